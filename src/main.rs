use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use sigview::frame::FrameShell;
use sigview::session::SessionView;
use sigview::utils::Config;

/// Sigview - frameless shell for a signal-analyzer workbench
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Session snapshot to restore instead of the default one
    #[arg(value_name = "SESSION")]
    session: Option<PathBuf>,

    /// Select the display language by code
    #[arg(short, long, value_name = "CODE")]
    language: Option<i32>,

    /// Start maximized
    #[arg(short, long)]
    maximized: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load()?;

    let log_level = if args.debug {
        "debug"
    } else {
        config.general.log_level.as_str()
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("Starting Sigview v{}", env!("CARGO_PKG_VERSION"));

    if let Some(language) = args.language {
        config.frame.language = language;
    }
    if args.maximized {
        config.frame.is_max = true;
    }

    let session_path = args.session.or_else(SessionView::default_session_path);
    let content = SessionView::new(session_path);

    let shell = FrameShell::new(config, Box::new(content));
    shell.run()?;

    info!("Sigview exited");
    Ok(())
}
