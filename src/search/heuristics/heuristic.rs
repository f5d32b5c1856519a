use crate::search::heuristics::{
    CapsuleHeuristic, CornersHeuristic, EuclideanHeuristic, FoodHeuristic, ManhattanHeuristic,
    ZeroHeuristic,
};
use crate::search::problem_formulations::{
    AnyFoodProblem, CapsulePolicy, CapsuleProblem, CapsuleVariant, CornersProblem, FoodProblem,
    PositionProblem, ProblemName, SearchProblem,
};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum_macros::EnumIter;

pub type HeuristicValue = OrderedFloat<f64>;

/// A heuristic estimates the cost from a state to the nearest goal of a
/// problem. The search engines never check the estimate: an inadmissible or
/// inconsistent heuristic silently leads to suboptimal plans.
pub trait Heuristic<P: SearchProblem>: Debug {
    /// Evaluate the given state of the given problem. The problem is passed
    /// mutably so that heuristics can memoise values in tables the problem
    /// owns.
    fn evaluate(&mut self, state: &P::State, problem: &mut P) -> HeuristicValue;
}

#[derive(
    clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, EnumIter,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "The zero heuristic, turns A* into uniform cost search.")]
    #[serde(alias = "null")]
    Zero,
    #[clap(help = "Manhattan distance to the goal of a position problem.")]
    Manhattan,
    #[clap(help = "Euclidean distance to the goal of a position problem.")]
    Euclidean,
    #[clap(help = "Shortest Manhattan tour through the unvisited corners.")]
    Corners,
    #[clap(help = "Maze distance to the farthest remaining food.")]
    Food,
    #[clap(help = "Capsule-aware cost to the farthest food, capsules are free.")]
    Capsule,
    #[clap(
        name = "capsule-avoid",
        help = "Capsule-aware cost to the farthest food, capsules are penalised."
    )]
    CapsuleAvoid,
}

impl HeuristicName {
    /// The problems whose states this heuristic can evaluate.
    pub fn problems(&self) -> &'static [ProblemName] {
        match self {
            HeuristicName::Zero => &[
                ProblemName::Position,
                ProblemName::Corners,
                ProblemName::Food,
                ProblemName::Capsule,
                ProblemName::CapsuleAvoid,
                ProblemName::AnyFood,
            ],
            HeuristicName::Manhattan | HeuristicName::Euclidean => &[ProblemName::Position],
            HeuristicName::Corners => &[ProblemName::Corners],
            HeuristicName::Food => &[ProblemName::Food],
            // Free capsules never overestimate the penalised variant either.
            HeuristicName::Capsule => &[ProblemName::Capsule, ProblemName::CapsuleAvoid],
            HeuristicName::CapsuleAvoid => &[ProblemName::CapsuleAvoid],
        }
    }

    pub fn supports(&self, problem: ProblemName) -> bool {
        self.problems().contains(&problem)
    }

    /// Create the named heuristic for `problem`, or `None` if it does not
    /// apply to it.
    pub fn create<P: NamedHeuristics>(&self, problem: &P) -> Option<Box<dyn Heuristic<P>>> {
        if !self.supports(problem.problem_name()) {
            return None;
        }
        problem.heuristic(*self)
    }
}

/// Problems whose heuristics can be chosen by [`HeuristicName`].
pub trait NamedHeuristics: SearchProblem + Sized {
    fn problem_name(&self) -> ProblemName;

    fn heuristic(&self, name: HeuristicName) -> Option<Box<dyn Heuristic<Self>>>;
}

impl NamedHeuristics for PositionProblem {
    fn problem_name(&self) -> ProblemName {
        ProblemName::Position
    }

    fn heuristic(&self, name: HeuristicName) -> Option<Box<dyn Heuristic<Self>>> {
        match name {
            HeuristicName::Zero => Some(Box::new(ZeroHeuristic::new())),
            HeuristicName::Manhattan => Some(Box::new(ManhattanHeuristic::new())),
            HeuristicName::Euclidean => Some(Box::new(EuclideanHeuristic::new())),
            _ => None,
        }
    }
}

impl NamedHeuristics for CornersProblem {
    fn problem_name(&self) -> ProblemName {
        ProblemName::Corners
    }

    fn heuristic(&self, name: HeuristicName) -> Option<Box<dyn Heuristic<Self>>> {
        match name {
            HeuristicName::Zero => Some(Box::new(ZeroHeuristic::new())),
            HeuristicName::Corners => Some(Box::new(CornersHeuristic::new())),
            _ => None,
        }
    }
}

impl NamedHeuristics for FoodProblem {
    fn problem_name(&self) -> ProblemName {
        ProblemName::Food
    }

    fn heuristic(&self, name: HeuristicName) -> Option<Box<dyn Heuristic<Self>>> {
        match name {
            HeuristicName::Zero => Some(Box::new(ZeroHeuristic::new())),
            HeuristicName::Food => Some(Box::new(FoodHeuristic::new())),
            _ => None,
        }
    }
}

impl NamedHeuristics for CapsuleProblem {
    fn problem_name(&self) -> ProblemName {
        match self.variant() {
            CapsuleVariant::Reward => ProblemName::Capsule,
            CapsuleVariant::Penalty => ProblemName::CapsuleAvoid,
        }
    }

    fn heuristic(&self, name: HeuristicName) -> Option<Box<dyn Heuristic<Self>>> {
        match name {
            HeuristicName::Zero => Some(Box::new(ZeroHeuristic::new())),
            HeuristicName::Capsule => {
                Some(Box::new(CapsuleHeuristic::new(CapsulePolicy::Encourage)))
            }
            HeuristicName::CapsuleAvoid => {
                Some(Box::new(CapsuleHeuristic::new(CapsulePolicy::Avoid)))
            }
            _ => None,
        }
    }
}

impl NamedHeuristics for AnyFoodProblem {
    fn problem_name(&self) -> ProblemName {
        ProblemName::AnyFood
    }

    fn heuristic(&self, name: HeuristicName) -> Option<Box<dyn Heuristic<Self>>> {
        match name {
            HeuristicName::Zero => Some(Box::new(ZeroHeuristic::new())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Layout, Position};
    use crate::test_utils::*;
    use strum::IntoEnumIterator;

    #[test]
    fn zero_supports_every_problem() {
        for problem in [
            ProblemName::Position,
            ProblemName::Corners,
            ProblemName::Food,
            ProblemName::Capsule,
            ProblemName::CapsuleAvoid,
            ProblemName::AnyFood,
        ] {
            assert!(HeuristicName::Zero.supports(problem));
        }
    }

    #[test]
    fn avoid_heuristic_is_not_used_for_free_capsules() {
        assert!(HeuristicName::CapsuleAvoid.supports(ProblemName::CapsuleAvoid));
        assert!(!HeuristicName::CapsuleAvoid.supports(ProblemName::Capsule));
        assert!(!HeuristicName::Manhattan.supports(ProblemName::Food));
    }

    #[test]
    fn registry_table_matches_constructors() {
        let layout = Layout::from_text(CAPSULE_MAZE_LAYOUT).unwrap();
        for name in HeuristicName::iter() {
            let position = PositionProblem::new(&layout, Position::new(1, 1));
            assert_eq!(
                position.heuristic(name).is_some(),
                name.supports(ProblemName::Position)
            );
            let corners = CornersProblem::new(&layout);
            assert_eq!(
                corners.heuristic(name).is_some(),
                name.supports(ProblemName::Corners)
            );
            let food = FoodProblem::new(&layout);
            assert_eq!(food.heuristic(name).is_some(), name.supports(ProblemName::Food));
            let any_food = AnyFoodProblem::new(&layout);
            assert_eq!(
                any_food.heuristic(name).is_some(),
                name.supports(ProblemName::AnyFood)
            );
            for variant in [CapsuleVariant::Reward, CapsuleVariant::Penalty] {
                let capsule = CapsuleProblem::new(&layout, variant);
                assert_eq!(
                    name.create(&capsule).is_some(),
                    name.supports(capsule.problem_name())
                );
            }
        }
    }
}
