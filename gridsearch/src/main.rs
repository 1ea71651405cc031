//! gridsearch: BFS and DFS over an obstacle grid, in batch or side by side.

mod args;
mod error;
mod report;

use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;

use gridsearch_core::{Grid, GridConfig, Point};
use gridsearch_crossterm::CrosstermDriver;
use gridsearch_paths::{Algorithm, search};
use gridsearch_viz::{Comparison, ComparisonKeys};
use tracing_subscriber::filter::LevelFilter;

use args::{Args, Command, MENU, Mode, USAGE};
use error::AppError;

/// Log level for `verbosity` in `mode`.
///
/// The terminal view owns stderr's screen while it runs, so anything below
/// WARN is dropped in [`Mode::Viz`].
fn log_level(verbosity: u8, mode: Mode) -> LevelFilter {
    if mode == Mode::Viz {
        return LevelFilter::WARN;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_logging(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn ask_mode() -> Result<Mode, AppError> {
    println!("{MENU}");
    print!("Enter choice: ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    args::menu_choice(&answer).ok_or(AppError::InvalidChoice(answer))
}

fn run_batch(algorithm: Algorithm, grid: &Grid, start: Point, goal: Point) {
    let t0 = Instant::now();
    let result = search(algorithm, grid, start, goal);
    let elapsed = t0.elapsed();
    println!("{}", report::format_report(algorithm, &result, elapsed));
}

fn run_viz(grid: &Grid, start: Point, goal: Point) -> Result<(), AppError> {
    let mut cmp = Comparison::new(grid, start, goal);
    let mut driver = CrosstermDriver::new();
    driver.run(&mut cmp, &ComparisonKeys::default())?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    let mode = match args.command {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Version => {
            println!("gridsearch {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::Run(mode) => mode,
    };
    let mode = match mode {
        Some(mode) => mode,
        None => ask_mode()?,
    };
    init_logging(log_level(args.verbosity, mode));

    fs::create_dir_all(&args.results).map_err(|source| AppError::Results {
        path: args.results.clone(),
        source,
    })?;

    let config = match &args.config {
        Some(path) => GridConfig::load(path)?,
        None => GridConfig::example(),
    };
    let (grid, start, goal) = config.build()?;
    log::info!(
        "{}x{} grid, {} free cells, {start} -> {goal}",
        grid.rows(),
        grid.cols(),
        grid.free_count()
    );

    match mode {
        Mode::Batch(algorithm) => run_batch(algorithm, &grid, start, goal),
        Mode::Viz => run_viz(&grid, start, goal)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("gridsearch: {e}");
            return ExitCode::from(2);
        }
    };
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("gridsearch: {e}");
            ExitCode::FAILURE
        }
    }
}
