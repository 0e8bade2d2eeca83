use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{LevelFilter, error, info};
use simplelog::{Config, WriteLogger};
use wall_snake::app::App;
use wall_snake::config::{DEFAULT_LOG_FILE_NAME, GRID_SIZE};
use wall_snake::error::AppError;
use wall_snake::input::InputHandler;
use wall_snake::renderer;
use wall_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use wall_snake::theme::THEME_ARCADE;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the random source so walls and fruit repeat between runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log; defaults to the system temp directory.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = init_logging(&cli) {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    install_panic_hook();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) -> Result<(), AppError> {
    let path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE_NAME));
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    WriteLogger::init(level, Config::default(), File::create(&path)?)?;
    info!("logging to {}", path.display());
    Ok(())
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut app = App::new(GRID_SIZE, cli.seed);
    info!(
        "session started on a {}x{} grid",
        GRID_SIZE.width, GRID_SIZE.height
    );

    loop {
        let now = Instant::now();
        app.update(now);
        if app.is_terminated() {
            break;
        }

        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &app, &THEME_ARCADE, now))?;

        let timeout = app.time_until_next_event(Instant::now());
        if let Some(game_input) = input.poll_input(timeout)? {
            app.handle_input(game_input, Instant::now())?;
        }

        if app.is_terminated() {
            break;
        }
    }

    info!("session ended");
    Ok(())
}
