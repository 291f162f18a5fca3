//
// Hashiwokakero solver
//
// Copyright 2021 Simon Frankau
//

use std::fs::File;
use std::io::{stdin, stdout, BufRead, BufReader, Read, Write};

use anyhow::Result;
use clap::Parser;
use log::{info, LevelFilter};

use bridges_solver::{
    display_grid, display_grid_coloured, read_grid, solve_with_report, SearchFailure,
    SolverConfig, DEFAULT_MAX_BRIDGES,
};

#[derive(Parser)]
#[clap(version = "0.1", author = "Simon Frankau <sgf@arbitrary.name>")]
#[clap(about = "Hashiwokakero (Bridges) puzzle solver")]
struct Opts {
    /// Input file. Uses stdin if none specified.
    #[clap(long)]
    input_file: Option<String>,
    /// Output file. Uses stdout if none specified.
    #[clap(long)]
    output_file: Option<String>,
    /// Maximum number of bridges between islands.
    #[clap(long, default_value_t = DEFAULT_MAX_BRIDGES)]
    max_bridges: usize,
    /// Give up after expanding this many search states.
    #[clap(long)]
    max_states: Option<usize>,
    /// Highlight satisfied and unsatisfied islands.
    #[clap(long)]
    color: bool,
    /// Log progress to stderr. Repeat for more detail.
    #[clap(short, long, parse(from_occurrences))]
    verbose: u64,
}

fn setup_logging(verbose: u64) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}

fn read_input(opts: &Opts) -> Result<Vec<String>> {
    let file: Box<dyn Read> = match &opts.input_file {
        Some(name) => Box::new(File::open(name)?),
        None => Box::new(stdin()),
    };

    Ok(BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()?)
}

fn write_output(opts: &Opts, s: &str) -> Result<()> {
    let mut file: Box<dyn Write> = match &opts.output_file {
        Some(name) => Box::new(File::create(name)?),
        None => Box::new(stdout()),
    };

    Ok(file.write_all(s.as_bytes())?)
}

fn main() -> Result<()> {
    let opts: Opts = Opts::parse();
    setup_logging(opts.verbose)?;

    let config = SolverConfig {
        max_bridges: opts.max_bridges,
        max_states: opts.max_states,
    };
    config.validate()?;

    let input_grid = read_grid(read_input(&opts)?.iter().map(String::as_str))?;
    info!(
        "Read {}x{} puzzle with {} islands",
        input_grid.rows(),
        input_grid.cols(),
        input_grid.island_iter().count()
    );

    let (result, report) = solve_with_report(&input_grid, &config);
    info!("Propagation took {:?}", report.propagation);
    info!("Search took {:?}: {:?}", report.search, report.statistics);

    match result {
        Ok(solved) => {
            let output_string = if opts.color {
                display_grid_coloured(&solved)
            } else {
                display_grid(&solved)
            };
            write_output(&opts, &output_string)?;
        }
        Err(SearchFailure::NoSolutions) => eprintln!("No solutions"),
        Err(e @ SearchFailure::GaveUp { .. }) => eprintln!("{}", e),
    }

    Ok(())
}
