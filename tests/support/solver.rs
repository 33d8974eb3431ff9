use std::sync::atomic::{AtomicUsize, Ordering};

use supplyplan::adapter::outbound::solver::HiGHSSolver;
use supplyplan::error::Result;
use supplyplan::port::outbound::solver::{IlpProblem, LpSolution, Solver};

/// Delegates to HiGHS and counts how often it was asked to solve.
#[derive(Default)]
pub struct CountingSolver {
    inner: HiGHSSolver,
    calls: AtomicUsize,
}

impl CountingSolver {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Solver for CountingSolver {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.solve_ilp(problem)
    }
}
