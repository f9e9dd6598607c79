use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use making_change::config::{
    DEFAULT_INPUT, DEFAULT_MAX_DEPTH, DEFAULT_NAIVE_CALLS, DEFAULT_NAIVE_LIMIT,
};
use making_change::{Limits, Settings, Strategy, Writer, report};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "making-change")]
#[command(about = "Minimal coin change for every value in a problem-set file", long_about = None)]
struct Cli {
    /// Problem-set file to read
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Algorithm used to fill the solution table
    #[arg(short, long, value_enum, default_value_t = Strategy::BottomUp)]
    strategy: Strategy,

    /// Deepest call chain allowed for the memoized strategy
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Largest value the naive strategy will attempt
    #[arg(long, default_value_t = DEFAULT_NAIVE_LIMIT)]
    naive_limit: usize,

    /// Most recursive calls the naive strategy makes for one value
    #[arg(long, default_value_t = DEFAULT_NAIVE_CALLS)]
    naive_calls: u64,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Settings {
            input: cli.input,
            strategy: cli.strategy,
            limits: Limits {
                max_depth: cli.max_depth,
                naive_limit: cli.naive_limit,
                naive_calls: cli.naive_calls,
            },
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs share the terminal with the report, so keep them off stdout.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let settings = Settings::from(cli);
    let mut out = Writer::new(io::stdout().lock());

    match making_change::run_file(&settings, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            // Anything printed before the failure stays; the banner follows it.
            let _ = out.print(report::error_banner(&e));
            let _ = out.flush();
            ExitCode::FAILURE
        }
    }
}
