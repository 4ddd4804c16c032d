use std::{fs::File, path::Path, process::exit};

use clap::Parser;
use env_logger::{Env, Target};
use gridsnake::app::App;
use gridsnake::config::{Args, GameConfig};
use gridsnake::error::{Result, SnakeError};
use log::info;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("gridsnake: {}", e);
        exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    init_logger(args.log_file.as_deref())?;
    let config = GameConfig::from_args(args)?;
    info!("Starting with {:?}", config);

    let mut app = App::new(config)?;
    app.run()
}

/// The terminal is in raw mode while playing, so logs only go to a file.
/// Without `--log-file` nothing is logged unless RUST_LOG asks for it.
fn init_logger(log_file: Option<&Path>) -> Result<()> {
    let default_filter = if log_file.is_some() { "gridsnake=info" } else { "off" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = File::create(path).map_err(SnakeError::LogFile)?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
