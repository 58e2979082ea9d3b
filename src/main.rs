use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pizza::io_utils::pizza_cli_error;
use pizza::{solve, Config, Emit, Fit, Pass, RandomOrder};

/// Long flags also accepted with a single dash, e.g. `-iterations 10`.
const SINGLE_DASH_FLAGS: &[&str] = &["iterations", "fileInput", "fileOutput", "filename"];

#[derive(Parser, Debug)]
#[command(
    name = "pizza",
    about = "Pick pizzas whose slices come as close as possible to the target"
)]
struct Args {
    /// Number of randomized greedy passes
    #[arg(long, default_value_t = 3)]
    iterations: usize,
    /// Problem file: target on line 1, slice counts after it
    #[arg(
        long = "file-input",
        alias = "fileInput",
        visible_alias = "filename",
        default_value = "a_example.in"
    )]
    file_input: PathBuf,
    /// Solution file, defaults to the input path with `.out` appended
    #[arg(long = "file-output", alias = "fileOutput")]
    file_output: Option<PathBuf>,
    /// Keep every pass strictly below the target
    #[arg(long)]
    exclusive: bool,
    /// End a pass at the first pizza that does not fit
    #[arg(long)]
    stop_on_overflow: bool,
    /// Write slice counts instead of pizza indices
    #[arg(long)]
    values: bool,
    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Disable logging and progress output
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            input: self.file_input.clone(),
            output: self.file_output.clone(),
            iterations: self.iterations,
            fit: if self.exclusive {
                Fit::Exclusive
            } else {
                Fit::Inclusive
            },
            pass: if self.stop_on_overflow {
                Pass::Stop
            } else {
                Pass::Skip
            },
            emit: if self.values {
                Emit::Values
            } else {
                Emit::Indices
            },
        }
    }
}

/// Rewrite `-name` and `-name=value` to their double dash form.
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            let rewritten = arg.to_str().and_then(|s| {
                let rest = s.strip_prefix('-')?;
                if rest.starts_with('-') {
                    return None;
                }
                let name = rest.split('=').next().unwrap_or(rest);
                SINGLE_DASH_FLAGS
                    .contains(&name)
                    .then(|| OsString::from(format!("-{s}")))
            });
            rewritten.unwrap_or(arg)
        })
        .collect()
}

/// Log sink that hides the progress bar while a line is written.
struct BarWriter<W> {
    bar: ProgressBar,
    inner: W,
}

impl<W> BarWriter<W> {
    fn new(bar: ProgressBar, inner: W) -> Self {
        Self { bar, inner }
    }
}

impl<W: Write> Write for BarWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let inner = &mut self.inner;
        self.bar.suspend(|| inner.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

fn init_tracing(args: &Args, bar: &ProgressBar) {
    if args.quiet {
        return;
    }

    let filter = match args.verbose {
        0 => "warn,pizza=info",
        1 => "info,pizza=debug",
        _ => "debug,pizza=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let bar = bar.clone();
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(move || BarWriter::new(bar.clone(), io::stderr())))
        .init();
}

fn progress_bar(args: &Args) -> ProgressBar {
    if args.quiet || args.json {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(args.iterations as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} passes [{elapsed}]") {
        bar.set_style(style);
    }
    bar
}

fn main() {
    let args = Args::parse_from(normalize_args(std::env::args_os()));
    let bar = progress_bar(&args);
    init_tracing(&args, &bar);

    if let Err(e) = run(&args, &bar) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args, bar: &ProgressBar) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.config();

    let summary = solve(&config, RandomOrder::from_clock(), |n| {
        bar.set_position(n as u64)
    })
    .map_err(|e| {
        bar.finish_and_clear();
        pizza_cli_error(e)
    })?;
    bar.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }

    Ok(())
}
