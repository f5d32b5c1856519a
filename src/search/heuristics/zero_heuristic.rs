use crate::search::{problem_formulations::SearchProblem, Heuristic, HeuristicValue};

#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl<P: SearchProblem> Heuristic<P> for ZeroHeuristic {
    fn evaluate(&mut self, _state: &P::State, _problem: &mut P) -> HeuristicValue {
        (0.).into()
    }
}
