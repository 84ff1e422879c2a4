//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Turning** (a page turn in flight): draws every `frame_ms` until every
//!   animation track has settled.
//! - **Idle** (no turn): sleeps up to 500ms, only redraws on events, resize,
//!   or an image arriving for the visible page.
//!
//! ## Turn Ownership
//!
//! Core state jumps to the new page the instant `paginate` succeeds. The turn
//! animation lives here, in `TuiState::turn`, and only decides what is drawn.
//! A click during a turn replaces it with a fresh turn from the new state.

mod component;
mod components;
mod event;
mod palette;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::deck::Deck;
use crate::core::motion::Motion;
use crate::core::state::App;
use crate::media::{ImageSource, offline_image, resolve_image};
use crate::tui::component::EventHandler;
use crate::tui::components::{NavZonesState, PageTurn};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub nav_zones: NavZonesState,
    /// The turn being animated (None = at rest).
    pub turn: Option<PageTurn>,
    pub motion: Motion,
    /// Cached `motion.total_duration()`.
    pub turn_duration: f64,
    pub frame_interval: Duration,
}

impl TuiState {
    pub fn new(motion: Motion, frame_interval: Duration) -> Self {
        Self {
            nav_zones: NavZonesState::new(),
            turn: None,
            turn_duration: motion.total_duration(),
            motion,
            frame_interval,
        }
    }

    /// Drops the turn once every track has settled. Returns whether a turn
    /// is still running.
    fn settle(&mut self, now: Instant) -> bool {
        let Some(turn) = &self.turn else {
            return false;
        };
        if turn.elapsed(now) < self.turn_duration {
            return true;
        }
        debug!(
            "Turn {} → {} settled after {:.2}s",
            turn.outgoing_id, turn.incoming_id, self.turn_duration
        );
        self.turn = None;
        false
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

/// Mouse capture is optional: without it the keys still turn pages.
fn keep_mode_guard(result: std::io::Result<TerminalModeGuard>) -> Option<TerminalModeGuard> {
    match result {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable mouse capture, click zones disabled: {}", e);
            None
        }
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// What the loop should do after an effect.
enum Flow {
    Continue { redraw: bool },
    Quit,
}

fn apply_effect(effect: Effect, tui: &mut TuiState, now: Instant) -> Flow {
    match effect {
        Effect::None => Flow::Continue { redraw: false },
        Effect::Turn(change) => {
            if let Some(previous) = &tui.turn {
                debug!(
                    "Interrupting turn {} → {} after {:.2}s",
                    previous.outgoing_id,
                    previous.incoming_id,
                    previous.elapsed(now)
                );
            }
            tui.turn = Some(PageTurn::start(&change, now));
            Flow::Continue { redraw: true }
        }
        Effect::Redraw => Flow::Continue { redraw: true },
        Effect::Quit => Flow::Quit,
    }
}

/// Kicks off one background task per image. Results arrive as
/// `Action::ImageResolved` on `tx`.
fn spawn_image_loads(
    deck: &Deck,
    config: &ResolvedConfig,
    source: Option<Arc<dyn ImageSource>>,
    tx: &mpsc::Sender<Action>,
) {
    let requests = deck.image_requests(&config.placeholder_base);
    let Some(source) = source.filter(|_| config.images_enabled) else {
        info!("Image loading disabled, using generated images");
        for request in &requests {
            if tx.send(Action::ImageResolved(offline_image(request))).is_err() {
                warn!("Failed to queue image '{}': receiver dropped", request.key);
            }
        }
        return;
    };

    info!("Spawning {} image loads via {}", requests.len(), source.name());
    for request in requests {
        let source = source.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let image = resolve_image(source.as_ref(), &request).await;
            if tx.send(Action::ImageResolved(image)).is_err() {
                warn!("Failed to deliver image '{}': receiver dropped", request.key);
            }
        });
    }
}

pub fn run(config: ResolvedConfig, source: Option<Arc<dyn ImageSource>>) -> std::io::Result<()> {
    let mut app = App::new(Deck::builtin());
    let mut tui = TuiState::new(config.motion, Duration::from_millis(config.frame_ms));
    info!(
        "Deck loaded: {} pages, turn settles in {:.2}s",
        app.deck.len(),
        tui.turn_duration
    );

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = keep_mode_guard(TerminalModeGuard::new());

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    spawn_image_loads(&app.deck, &config, source, &tx);

    // First paint: the current page at rest, no turn
    let mut needs_redraw = true;

    'outer: loop {
        let now = Instant::now();
        let animating = tui.settle(now);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            tui.frame_interval
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                TuiEvent::Resize => {
                    needs_redraw = true;
                    continue;
                }
                TuiEvent::Quit => Action::Quit,
                TuiEvent::Paginate(step) => Action::Paginate(step),
                TuiEvent::MouseMove(..) => {
                    let before = tui.nav_zones.hovered;
                    tui.nav_zones.handle_event(&event);
                    needs_redraw |= tui.nav_zones.hovered != before;
                    continue;
                }
                TuiEvent::MouseClick(..) => match tui.nav_zones.handle_event(&event) {
                    Some(step) => Action::Paginate(step),
                    None => continue,
                },
            };

            match apply_effect(update(&mut app, action), &mut tui, Instant::now()) {
                Flow::Continue { redraw } => needs_redraw |= redraw,
                Flow::Quit => break 'outer,
            }
        }

        // Handle background task actions (resolved images)
        while let Ok(action) = rx.try_recv() {
            match apply_effect(update(&mut app, action), &mut tui, Instant::now()) {
                Flow::Continue { redraw } => needs_redraw |= redraw,
                Flow::Quit => break 'outer,
            }
        }
    }

    info!("Folio shutting down on {}", app.navigator().folio_label());
    ratatui::restore();
    Ok(())
}
