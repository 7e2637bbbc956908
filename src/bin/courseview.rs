//! courseview - Interactive terminal viewer for course documents.
//!
//! Usage:
//!   courseview                    # built-in sample course
//!   courseview intro.course.toml  # view a course file
//!   courseview --no-restore ...   # ignore saved progress
//!   courseview --log-file cv.log  # write tracing output to a file

use std::fs::File;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use courseview::content::Course;
use courseview::persist::ProgressStore;
use courseview::tui::App;

/// Interactive terminal viewer for course documents.
#[derive(Parser)]
#[command(name = "courseview", about = "Terminal course viewer")]
struct Args {
    /// Course file (TOML). Defaults to the built-in sample course.
    #[arg(value_name = "COURSE")]
    course: Option<String>,

    /// State directory for saved progress.
    /// Default: $XDG_STATE_HOME/courseview or ~/.local/state/courseview
    #[arg(long, value_name = "DIR")]
    state_dir: Option<String>,

    /// Start at the first section instead of the saved one.
    #[arg(long)]
    no_restore: bool,

    /// Write log output to this file. A TUI cannot log to the terminal,
    /// so without this flag log events are dropped.
    #[arg(long, value_name = "PATH")]
    log_file: Option<String>,

    /// Event tick interval in milliseconds. Drives animations and the
    /// search debounce; values above 300 make the debounce sluggish.
    #[arg(long, default_value_t = 100, value_name = "MS")]
    tick_ms: u64,
}

/// Initializes the tracing subscriber writing to the given file.
/// Level defaults to debug for this crate, overridable via RUST_LOG.
fn init_logging(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let filter = EnvFilter::from_default_env()
        .add_directive("courseview=debug".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Some(ref path) = args.log_file
        && let Err(e) = init_logging(path)
    {
        eprintln!("Error: cannot set up logging at '{}': {}", path, e);
        std::process::exit(1);
    }

    // Loading the course is the only fatal path; everything after this
    // degrades to no-ops on failure.
    let course = match args.course {
        Some(ref path) => match Course::from_path(path) {
            Ok(course) => course,
            Err(e) => {
                eprintln!("Error loading course from '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => Course::sample(),
    };

    info!(
        "courseview {} starting: '{}', {} sections",
        env!("CARGO_PKG_VERSION"),
        course.title,
        course.sections.len()
    );

    let state_dir = args
        .state_dir
        .map(Into::into)
        .unwrap_or_else(ProgressStore::default_dir);
    let store = ProgressStore::new(state_dir);

    let mut app = App::new(course, store);
    if !args.no_restore {
        app.restore_progress();
    }

    let tick_rate = Duration::from_millis(args.tick_ms.max(10));
    if let Err(e) = app.run(tick_rate) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
