use anyhow::Result;
use chromeless::utils::Config;
use clap::Parser;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

/// Chromeless - a window without the standard title bar and borders
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Window title
    #[arg(long)]
    title: Option<String>,

    /// Window width
    #[arg(long)]
    width: Option<u32>,

    /// Window height
    #[arg(long)]
    height: Option<u32>,

    /// Do not ask the compositor for a frame shadow
    #[arg(long)]
    no_shadow: bool,

    /// Resize border thickness in pixels
    #[arg(long, value_name = "PX")]
    border: Option<i32>,

    /// Configuration file to use instead of the user one
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(title) = &self.title {
            config.window.title = title.clone();
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if self.no_shadow {
            config.frame.shadow = false;
        }
        if self.border.is_some() {
            config.frame.border_override = self.border;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("Starting Chromeless v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    chromeless::window::run(config)?;

    info!("Window closed");
    Ok(())
}
