// Run configuration: command line arguments and solve settings

use std::path::PathBuf;

use clap::Parser;

/// Values above this count as 1 when reading a solution
pub const DEFAULT_TOLERANCE: f64 = 0.99;
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Settings of the enumeration for one (graph, p) instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveConfig {
    pub tolerance: f64,
    /// Enumerate even when the optimum has no resonant face, listing every
    /// structure that is a plain perfect matching
    pub enumerate_at_zero: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        SolveConfig {
            tolerance: DEFAULT_TOLERANCE,
            enumerate_at_zero: false,
        }
    }
}

impl SolveConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_enumerate_at_zero(mut self, enumerate_at_zero: bool) -> Self {
        self.enumerate_at_zero = enumerate_at_zero;
        self
    }
}

/// Enumerate all maximum p-anionic Clar structures of fullerene graphs
/// read in planar_code format.
#[derive(Parser, Debug)]
#[command(name = "clar", version, about, long_about = None)]
pub struct Args {
    /// Numbers of resonant pentagons to solve for
    #[arg(required = true)]
    pub p: Vec<usize>,

    /// planar_code input file (stdin if omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory receiving the result files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Also enumerate when the optimum has no resonant face
    #[arg(long)]
    pub all_matchings: bool,

    /// Threshold above which a variable value counts as 1
    #[arg(long, default_value_t = DEFAULT_TOLERANCE, value_parser = parse_tolerance)]
    pub tolerance: f64,

    /// Log failed instances and continue with the next one
    #[arg(long)]
    pub keep_going: bool,

    /// Accept any cubic plane graph, not only fullerenes
    #[arg(long)]
    pub any_cubic: bool,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn solve_config(&self) -> SolveConfig {
        SolveConfig::default()
            .with_tolerance(self.tolerance)
            .with_enumerate_at_zero(self.all_matchings)
    }

    /// Requested p values, sorted and without repeats
    pub fn p_values(&self) -> Vec<usize> {
        let mut ps = self.p.clone();
        ps.sort_unstable();
        ps.dedup();
        ps
    }
}

fn parse_tolerance(s: &str) -> Result<f64, String> {
    let t: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if t > 0.0 && t < 1.0 {
        Ok(t)
    } else {
        Err(format!("tolerance must lie strictly between 0 and 1, got {}", t))
    }
}
