//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow three patterns:
//!
//! ### Page Templates (Widgets)
//!
//! Drawn off-screen so the stage can project them during a turn:
//! - `CoverPage`: Dark cover board with logo and name block
//! - `FolioPage`: Paper page with text on the left, image on the right
//! - `RasterView`: Half-block image renderer both templates share
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `PageStage`: Composites the current page, or both pages mid-turn
//! - `FolioIndicator`: "Folio n / len" and the page marks
//! - `SpiralBinding`: Wire coils down the bound edge
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `NavZones`: Click zones over the stage and their hover arrows
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into global state:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! FolioIndicator::new(app.navigator()).render(frame, stage);
//!
//! // Bad: Hidden dependency on global state
//! indicator.render(frame, stage); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── stage.rs        (Turn compositing)
//! ├── cover.rs        (Cover template)
//! ├── folio_page.rs   (Content template)
//! ├── raster_view.rs  (Half-block images)
//! ├── nav_zones.rs    (Click zones + arrows)
//! ├── indicator.rs    (Folio n / len)
//! └── spiral.rs       (Binding)
//! ```

pub mod cover;
pub mod folio_page;
pub mod indicator;
pub mod nav_zones;
pub mod raster_view;
pub mod spiral;
pub mod stage;

pub use indicator::FolioIndicator;
pub use nav_zones::{NavZones, NavZonesState};
pub use spiral::SpiralBinding;
pub use stage::{PageStage, PageTurn};
