mod clar_model;
mod clar_solver;
mod config;
mod error;
#[cfg(test)]
mod fixtures;
mod graph;
mod planar_code;
mod sink;
mod validate;

use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use clap::Parser;
use log::{debug, error, info, warn};
use lp4rust::{GoodLpSolver, BACKEND_NAME};

use clar_solver::ClarSolver;
use config::Args;
use error::ClarError;
use graph::Fullerene;
use planar_code::PlanarCodeReader;
use sink::{FileSink, ResultSink};

/// Counters of one run
#[derive(Debug, Default, PartialEq, Eq)]
struct RunStats {
    graphs: usize,
    instances: usize,
    failed: usize,
    structures: usize,
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn open_input(args: &Args) -> io::Result<Box<dyn BufRead>> {
    match &args.input {
        Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn run<R: BufRead>(args: &Args, input: R) -> Result<RunStats, Box<dyn Error>> {
    let ps = args.p_values();
    let config = args.solve_config();
    let mut sink = FileSink::create(&args.output_dir, &ps)?;
    info!("writing results for p = {:?} to {}", ps, sink.dir().display());

    let mut stats = RunStats::default();
    for graph in PlanarCodeReader::new(input) {
        let graph = graph?;
        stats.graphs += 1;
        if !args.any_cubic {
            if let Err(e) = graph.check_fullerene() {
                if !args.keep_going {
                    return Err(e.into());
                }
                warn!("skipping: {}", e);
                continue;
            }
        }
        debug!(
            "graph {}: n = {}, {} edges, {} pentagons, {} hexagons",
            graph.id,
            graph.n,
            graph.num_edges,
            graph.num_pentagons(),
            graph.num_hexagons()
        );

        let solver = ClarSolver::new(&graph, config);
        for &p in &ps {
            stats.instances += 1;
            match solver.enumerate(p, &mut sink) {
                Ok(outcome) => {
                    stats.structures += outcome.structures;
                    println!("{} {} {} {} {}", graph.id, graph.n, p, outcome.opt_val, outcome.structures);
                }
                // a broken sink fails every later instance as well
                Err(e @ ClarError::Sink(_)) => return Err(e.into()),
                Err(e) if args.keep_going => {
                    error!("{}", e);
                    stats.failed += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    sink.finish()?;
    Ok(stats)
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    let input = match open_input(&args) {
        Ok(input) => input,
        Err(e) => {
            error!("cannot open input: {}", e);
            std::process::exit(1);
        }
    };

    match run(&args, input) {
        Ok(stats) => {
            info!(
                "{} graphs, {} instances ({} failed), {} structures",
                stats.graphs, stats.instances, stats.failed, stats.structures
            );
            info!(
                "solver invocations: {} ({} {} solves)",
                ClarSolver::<Fullerene>::get_solve_count(),
                GoodLpSolver::get_solve_count(),
                BACKEND_NAME
            );
            if stats.failed > 0 {
                std::process::exit(2);
            }
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
