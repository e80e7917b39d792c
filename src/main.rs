// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use log::{info, LevelFilter};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use fract::{write_png, FractError, Renderer, HEIGHT, MAX_ITERATIONS, WIDTH};

const FILE: &str = "file";
const THREADS: &str = "threads";
const VERBOSE: &str = "verbose";

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("fract")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Mandelbrot renderer")
        .arg(
            Arg::with_name(FILE)
                .required(false)
                .long(FILE)
                .short("f")
                .takes_value(true)
                .default_value("tmp.png")
                .help("The name of the file to write to"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in the renderer"),
        )
        .arg(
            Arg::with_name(VERBOSE)
                .short("v")
                .multiple(true)
                .help("Log more; repeat for more detail"),
        )
        .get_matches()
}

/// What a single run needs to know.  Built once from the command line
/// and passed down, never stored globally.
struct Config {
    output: PathBuf,
    threads: usize,
    verbosity: u64,
}

impl Config {
    fn from_matches(matches: &ArgMatches) -> Config {
        Config {
            output: PathBuf::from(matches.value_of(FILE).unwrap_or("tmp.png")),
            threads: matches
                .value_of(THREADS)
                .and_then(|s| usize::from_str(s).ok())
                .unwrap_or(1),
            verbosity: matches.occurrences_of(VERBOSE),
        }
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn run(config: &Config) -> Result<(), FractError> {
    let renderer = Renderer::new(WIDTH, HEIGHT, MAX_ITERATIONS);
    let (width, height) = renderer.dimensions();
    info!(
        "rendering {}x{} at {} iterations on {} thread(s)",
        width, height, MAX_ITERATIONS, config.threads
    );
    let image = renderer.render(config.threads)?;
    write_png(&config.output, &image)?;
    info!("wrote {}", config.output.display());
    Ok(())
}

fn main() {
    let config = Config::from_matches(&args());
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .init();

    if let Err(e) = run(&config) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
