use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use relation_closure::closure::ClosureMethod;
use relation_closure::matrix::DEFAULT_MAX_UNIVERSE_SIZE;
use relation_closure::session::{Session, SessionConfig};
use std::fs::File;
use std::io::{BufRead, BufReader, IsTerminal};

#[derive(Parser)]
#[command(name = "relation_closure")]
#[command(about = "Compute the transitive closure of a relation entered row by row")]
struct Args {
    /// Read rows from a file instead of the standard input
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Closure algorithm
    #[arg(long, default_value = "warshall", require_equals = true)]
    algorithm: Algorithm,

    /// Largest accepted number of elements (length of the first row)
    #[arg(long, default_value_t = DEFAULT_MAX_UNIVERSE_SIZE, require_equals = true)]
    max_size: usize,

    /// Name of the relation in the printed pair sets
    #[arg(long, default_value = "R", require_equals = true)]
    name: String,

    /// Cancel the closure computation after this many iterations (unlimited by default)
    #[arg(long, value_name = "COUNT", require_equals = true)]
    max_iterations: Option<usize>,

        /// Do not print prompts, even when reading from a terminal
    #[arg(long)]
    no_prompt: bool,

    /// Logging verbosity (use -v for info, or -v=LEVEL for specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum Algorithm {
    #[value(name = "warshall")]
    Warshall,
    #[value(name = "boolean-powers")]
    BooleanPowers,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<Algorithm> for ClosureMethod {
    fn from(value: Algorithm) -> Self {
        match value {
            Algorithm::Warshall => ClosureMethod::Warshall,
            Algorithm::BooleanPowers => ClosureMethod::BooleanPowers,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

fn main() {
    let args = Args::parse();

    // None = not specified, Some(None) = -v without value, Some(Some(level)) = -v=level
    let log_level = match args.verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.into(),
    };
    Builder::from_default_env().filter_level(log_level).init();

    let (input, interactive): (Box<dyn BufRead>, bool) = match &args.file {
        Some(path) => {
            let file = File::open(path).unwrap_or_else(|e| {
                eprintln!("Failed to open input file {}: {}", path, e);
                std::process::exit(1);
            });
            (Box::new(BufReader::new(file)), false)
        }
        None => {
            let stdin = std::io::stdin();
            let interactive = stdin.is_terminal();
            (Box::new(stdin.lock()), interactive)
        }
    };

    let config = SessionConfig {
        max_universe_size: args.max_size,
        method: args.algorithm.into(),
        relation_name: args.name,
        prompt: interactive && !args.no_prompt,
        max_iterations: args.max_iterations.unwrap_or(usize::MAX),
    };

    let mut session = Session::new(config, input, std::io::stdout().lock());
    if let Err(e) = session.run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
