// Enumeration of all maximum p-anionic Clar structures of one graph
//
// The first solve fixes the optimum opt_val. The solution is then cut off
// with a no-good constraint, the objective pinned to opt_val, and the model
// re-solved; each new optimal structure is recorded and cut off in turn
// until the solver reports infeasibility or a smaller face count.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, info};
use lp4rust::{GoodLpSolver, MilpSolver, SolveStatus};

use crate::clar_model::{build_model, clar_number_cons, exclusion_cut, ClarVars};
use crate::config::SolveConfig;
use crate::error::ClarError;
use crate::graph::GraphView;
use crate::sink::{ClarStructure, ResultSink};
use crate::validate::check_solution;

static CLAR_SOLVE_COUNT: AtomicUsize = AtomicUsize::new(0);

/// Result of one (graph, p) instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClarOutcome {
    /// p-anionic Clar number; 0 when no structure exists
    pub opt_val: usize,
    /// Number of recorded structures
    pub structures: usize,
    /// Number of optimize calls
    pub solves: usize,
}

pub struct ClarSolver<'g, G: GraphView> {
    graph: &'g G,
    config: SolveConfig,
}

impl<'g, G: GraphView> ClarSolver<'g, G> {
    pub fn new(graph: &'g G, config: SolveConfig) -> Self {
        ClarSolver { graph, config }
    }

    pub fn get_solve_count() -> usize {
        CLAR_SOLVE_COUNT.load(Ordering::SeqCst)
    }

    pub fn reset_solve_count() {
        CLAR_SOLVE_COUNT.store(0, Ordering::SeqCst);
    }

    /// Enumerate with a fresh good_lp-backed solver
    pub fn enumerate<K: ResultSink>(&self, p: usize, sink: &mut K) -> Result<ClarOutcome, ClarError> {
        self.enumerate_with(p, GoodLpSolver::new(), sink)
    }

    /// Build the model in `solver` (which must be empty), find the optimum
    /// and record every structure attaining it.
    pub fn enumerate_with<S: MilpSolver, K: ResultSink>(
        &self,
        p: usize,
        mut solver: S,
        sink: &mut K,
    ) -> Result<ClarOutcome, ClarError> {
        let graph = self.graph;
        debug!("n = {}, p = {}, graph {}: building model", graph.vertex_count(), p, graph.graph_id());
        let vars = build_model(graph, p, &mut solver).map_err(|e| ClarError::solver(graph, p, e))?;

        let mut outcome = ClarOutcome::default();
        match self.optimize(&mut solver, p, &mut outcome)? {
            SolveStatus::Optimal => {}
            SolveStatus::Infeasible => {
                sink.record_none(graph.graph_id(), p)?;
                info!("graph {} (n = {}), p = {}: no structure", graph.graph_id(), graph.vertex_count(), p);
                return Ok(outcome);
            }
            status => return Err(self.status_error(p, status)),
        }

        let first = self.read_solution(&solver, p, &vars)?;
        sink.record(&first)?;
        outcome.opt_val = first.num_res_faces;
        outcome.structures = 1;

        if outcome.opt_val >= 1 || self.config.enumerate_at_zero {
            self.enumerate_rest(p, &mut solver, &vars, first, sink, &mut outcome)?;
        }

        info!(
            "graph {} (n = {}), p = {}: opt {}, {} structures, {} solves",
            graph.graph_id(),
            graph.vertex_count(),
            p,
            outcome.opt_val,
            outcome.structures,
            outcome.solves
        );
        Ok(outcome)
    }

    fn enumerate_rest<S: MilpSolver, K: ResultSink>(
        &self,
        p: usize,
        solver: &mut S,
        vars: &ClarVars,
        first: ClarStructure,
        sink: &mut K,
        outcome: &mut ClarOutcome,
    ) -> Result<(), ClarError> {
        let opt_val = outcome.opt_val;
        self.exclude(solver, p, vars, &first)?;
        solver
            .add_constraint(clar_number_cons(vars, opt_val))
            .map_err(|e| ClarError::solver(self.graph, p, e))?;

        loop {
            match self.optimize(solver, p, outcome)? {
                SolveStatus::Optimal => {}
                SolveStatus::Infeasible => break,
                status => return Err(self.status_error(p, status)),
            }
            let structure = self.read_solution(solver, p, vars)?;
            if structure.num_res_faces != opt_val {
                debug!("graph {}, p = {}: next solution has {} faces, done", self.graph.graph_id(), p, structure.num_res_faces);
                break;
            }
            sink.record(&structure)?;
            outcome.structures += 1;
            self.exclude(solver, p, vars, &structure)?;
        }
        Ok(())
    }

    fn optimize<S: MilpSolver>(&self, solver: &mut S, p: usize, outcome: &mut ClarOutcome) -> Result<SolveStatus, ClarError> {
        CLAR_SOLVE_COUNT.fetch_add(1, Ordering::SeqCst);
        outcome.solves += 1;
        solver.optimize().map_err(|e| ClarError::solver(self.graph, p, e))
    }

    fn read_solution<S: MilpSolver>(&self, solver: &S, p: usize, vars: &ClarVars) -> Result<ClarStructure, ClarError> {
        let assignment = solver.assignment().map_err(|e| ClarError::solver(self.graph, p, e))?;
        let structure = check_solution(self.graph, p, vars, assignment, self.config.tolerance)?;
        debug!("{}", structure);
        Ok(structure)
    }

    /// Reset the solver and cut off `structure`
    fn exclude<S: MilpSolver>(&self, solver: &mut S, p: usize, vars: &ClarVars, structure: &ClarStructure) -> Result<(), ClarError> {
        solver.reset();
        solver
            .add_constraint(exclusion_cut(vars, structure))
            .map_err(|e| ClarError::solver(self.graph, p, e))
    }

    fn status_error(&self, p: usize, status: SolveStatus) -> ClarError {
        ClarError::diagnostic(self.graph, p, format!("status of solve: {}", status))
    }
}
