use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::exit,
    time::Instant,
};

use aoc2021::{
    error::Error,
    solutions::{self, Part, DAYS},
};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(about = "Advent of Code 2021, days 1 to 14")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve both parts of a day's puzzle
    Run {
        /// Day to solve
        day: u8,

        /// Puzzle input; defaults to stdin when piped, else inputs/dayNN.txt
        file: Option<PathBuf>,

        #[arg(short, long)]
        /// Print out how long each part took
        timings: bool,

        #[arg(short, long)]
        /// Also write the bonus answer to this file
        output: Option<PathBuf>,
    },

    /// List the available days
    List,
}

/// Log level comes from `RUST_LOG`, e.g. `RUST_LOG=aoc2021=debug`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(day: u8, file: Option<PathBuf>) -> io::Result<String> {
    if let Some(file) = file {
        return fs::read_to_string(file);
    }

    if !atty::is(atty::Stream::Stdin) {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        return Ok(input);
    }

    fs::read_to_string(format!("inputs/day{day:02}.txt"))
}

fn time<T>(timings: bool, f: impl FnOnce() -> T) -> T {
    let t0 = Instant::now();
    let result = f();
    if timings {
        eprintln!("  took {:?}", t0.elapsed());
    }
    result
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            for day in DAYS {
                if let Some(title) = solutions::title(day) {
                    println!("{day:>2}  {title}");
                }
            }
        }

        Commands::Run {
            day,
            file,
            timings,
            output,
        } => {
            if !DAYS.contains(&day) {
                eprintln!("{}", Error::UnknownDay(day));
                exit(2);
            }

            let input = match read_input(day, file) {
                Ok(input) => input,
                Err(err) => {
                    eprintln!("Could not read input: {err}");
                    exit(1);
                }
            };

            info!(day, "running");

            for part in [Part::First, Part::Bonus] {
                let answer = match time(timings, || solutions::run_part(day, part, &input)) {
                    Ok(answer) => answer,
                    Err(err @ Error::UnknownDay(_)) => {
                        eprintln!("{err}");
                        exit(2);
                    }
                    Err(err) => {
                        eprintln!("{part} failed: {err}");
                        exit(3);
                    }
                };

                // multi-line answers (folded paper) start on their own line
                if answer.contains('\n') {
                    println!("{part}:\n{answer}");
                } else {
                    println!("{part}: {answer}");
                }

                if let (Part::Bonus, Some(path)) = (part, &output) {
                    if let Err(err) = fs::write(path, format!("{answer}\n")) {
                        eprintln!("Could not write {}: {err}", path.display());
                        exit(1);
                    }
                }
            }
        }
    }
}
