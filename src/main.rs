use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use folio::LogLevel;
use folio::core::config::{self, CliOverrides, FolioConfig};
use folio::media::{HttpImageSource, ImageSource};
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "folio", about = "Flip-book slideshow for the terminal")]
struct Args {
    /// Config file to use instead of ~/.folio/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip network fetches and draw generated images
    #[arg(long)]
    no_images: bool,

    /// Redraw interval while a page is turning
    #[arg(long)]
    frame_ms: Option<u64>,

    /// Where to write the log
    #[arg(long, default_value = "folio.log")]
    log_file: PathBuf,

    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
    }

    log::info!("Folio starting up (log level {:?})", args.log_level);

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(file_config) => file_config,
        Err(e) => {
            log::warn!("Config not loaded, using defaults: {}", e);
            FolioConfig::default()
        }
    };
    let cli = CliOverrides {
        no_images: args.no_images,
        frame_ms: args.frame_ms,
    };
    let mut resolved = config::resolve(&file_config, &cli);

    let source: Option<Arc<dyn ImageSource>> = if resolved.images_enabled {
        match HttpImageSource::new(Duration::from_secs(resolved.image_timeout_secs)) {
            Ok(source) => Some(Arc::new(source)),
            Err(e) => {
                log::warn!("Image source unavailable, using generated images: {}", e);
                resolved.images_enabled = false;
                None
            }
        }
    } else {
        None
    };

    folio::tui::run(resolved, source)
}
