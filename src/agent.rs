//! Agents turn a maze into a sequence of moves. They plan once, when they
//! first see the layout, and then hand out the planned moves one at a time.

use crate::config::{AgentConfig, ConfigError};
use crate::grid::{Direction, Layout, LayoutError};
use crate::search::heuristics::NamedHeuristics;
use crate::search::problem_formulations::{
    AnyFoodProblem, CapsuleProblem, CapsuleVariant, CornersProblem, FoodProblem, PositionProblem,
    ProblemName,
};
use crate::search::search_engines::Bfs;
use crate::search::{validate, Cost, Plan, SearchEngine, SearchError, SearchProblem};
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

pub trait Agent {
    /// Plan for the maze in `layout`. Called once, before any action is
    /// requested.
    fn register_initial_state(&mut self, layout: &Layout) -> Result<(), AgentError>;

    /// The planned moves in order, then [`Direction::Stop`] forever.
    fn next_action(&mut self) -> Direction;

    fn plan(&self) -> &Plan<Direction>;
}

/// Runs the configured engine on the configured problem and follows the plan.
#[derive(Debug)]
pub struct SearchAgent {
    config: AgentConfig,
    plan: Plan<Direction>,
    action_index: usize,
    total_cost: Cost,
    expanded: usize,
}

impl SearchAgent {
    pub fn new(config: AgentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            plan: Plan::empty(),
            action_index: 0,
            total_cost: 0.,
            expanded: 0,
        })
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Cost of the plan as reported by the problem.
    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    /// Number of expansions the search needed.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    fn solve<P>(&mut self, mut problem: P) -> Result<(), AgentError>
    where
        P: NamedHeuristics<Action = Direction>,
    {
        let mut heuristic = self.config.heuristic.create(&problem).ok_or(
            ConfigError::IncompatibleHeuristic {
                heuristic: self.config.heuristic,
                problem: self.config.problem,
            },
        )?;
        let mut engine = self.config.engine.create::<P>(self.config.time_limit);
        let plan = engine.search(&mut problem, heuristic.as_mut())?;
        self.adopt_plan(&mut problem, plan)
    }

    /// Replace the current plan with `plan` if it solves `problem`. On failure
    /// the agent keeps its previous plan, cost and expansion count.
    fn adopt_plan<P>(&mut self, problem: &mut P, plan: Plan<Direction>) -> Result<(), AgentError>
    where
        P: SearchProblem<Action = Direction>,
    {
        let total_cost = problem.cost_of_actions(&plan);
        let expanded = problem.expanded();
        validate(problem, &plan).map_err(SearchError::InvalidPlan)?;
        self.total_cost = total_cost;
        self.expanded = expanded;
        self.plan = plan;
        self.action_index = 0;
        Ok(())
    }
}

impl Agent for SearchAgent {
    fn register_initial_state(&mut self, layout: &Layout) -> Result<(), AgentError> {
        let start_time = Instant::now();
        info!(
            engine = ?self.config.engine,
            problem = ?self.config.problem,
            heuristic = ?self.config.heuristic,
            "planning"
        );
        let cost_fn = self.config.cost.cost_fn();
        match self.config.problem {
            ProblemName::Position => self.solve(
                PositionProblem::new(layout, self.config.goal()).with_cost_fn(cost_fn),
            )?,
            ProblemName::Corners => self.solve(CornersProblem::new(layout))?,
            ProblemName::Food => self.solve(FoodProblem::new(layout))?,
            ProblemName::Capsule => self.solve(
                CapsuleProblem::new(layout, CapsuleVariant::Reward).with_cost_fn(cost_fn),
            )?,
            ProblemName::CapsuleAvoid => {
                self.solve(CapsuleProblem::new(layout, CapsuleVariant::Penalty))?
            }
            ProblemName::AnyFood => self.solve(AnyFoodProblem::new(layout))?,
        }
        info!(
            total_cost = self.total_cost,
            expanded = self.expanded,
            plan_length = self.plan.len(),
            search_time = start_time.elapsed().as_secs_f64(),
            "path found"
        );
        Ok(())
    }

    fn next_action(&mut self) -> Direction {
        let action = self
            .plan
            .get(self.action_index)
            .copied()
            .unwrap_or(Direction::Stop);
        self.action_index += 1;
        action
    }

    fn plan(&self) -> &Plan<Direction> {
        &self.plan
    }
}

/// Eats all the food by repeatedly walking to the closest remaining pellet.
/// Fast, but the total path is usually not the shortest one.
#[derive(Debug, Default)]
pub struct ClosestDotAgent {
    plan: Plan<Direction>,
    action_index: usize,
    expanded: usize,
}

impl ClosestDotAgent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of expansions summed over all segment searches.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn total_cost(&self) -> Cost {
        self.plan.len() as Cost
    }
}

impl Agent for ClosestDotAgent {
    fn register_initial_state(&mut self, layout: &Layout) -> Result<(), AgentError> {
        let mut plan = Plan::empty();
        let mut expanded = 0;
        let mut position = layout.start();
        let mut food = layout.food().clone();

        while !food.is_empty() {
            let current = layout.with_agent(position, food.clone());
            let mut problem = AnyFoodProblem::new(&current);
            let segment = Bfs::new().search_uninformed(&mut problem)?;
            expanded += problem.expanded();

            for &action in segment.iter() {
                let next = position.step(action);
                if action == Direction::Stop || layout.walls().is_blocked(next) {
                    return Err(SearchError::InvalidPlan(format!(
                        "illegal move {} from {}",
                        action, position
                    ))
                    .into());
                }
                position = next;
                food.set(position, false);
            }
            debug!(segment_length = segment.len(), %position, remaining = food.count());
            plan.extend(segment);
        }

        info!(total_cost = plan.len(), expanded, "path found");
        self.plan = plan;
        self.action_index = 0;
        self.expanded = expanded;
        Ok(())
    }

    fn next_action(&mut self) -> Direction {
        let action = self
            .plan
            .get(self.action_index)
            .copied()
            .unwrap_or(Direction::Stop);
        self.action_index += 1;
        action
    }

    fn plan(&self) -> &Plan<Direction> {
        &self.plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;
    use crate::search::{HeuristicName, SearchEngineName};
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    fn layout(text: &str) -> Layout {
        Layout::from_text(text).unwrap()
    }

    #[test]
    fn search_agent_replays_then_stops() {
        let mut config = AgentConfig::new(
            SearchEngineName::Bfs,
            ProblemName::Position,
            HeuristicName::Zero,
        );
        config.goal = Some(Position::new(2, 1));
        let mut agent = SearchAgent::new(config).unwrap();
        agent
            .register_initial_state(&layout(TINY_CORRIDOR_LAYOUT))
            .unwrap();

        assert_eq!(agent.total_cost(), 1.);
        assert_eq!(agent.expanded(), 1);
        assert_eq!(agent.next_action(), Direction::East);
        assert_eq!(agent.next_action(), Direction::Stop);
        assert_eq!(agent.next_action(), Direction::Stop);
    }

    #[test]
    fn rejected_plan_keeps_the_previous_one() {
        let corridor = layout(TINY_CORRIDOR_LAYOUT);
        let goal = Position::new(2, 1);
        let mut config = AgentConfig::new(
            SearchEngineName::Bfs,
            ProblemName::Position,
            HeuristicName::Zero,
        );
        config.goal = Some(goal);
        let mut agent = SearchAgent::new(config).unwrap();
        agent.register_initial_state(&corridor).unwrap();

        let mut problem = PositionProblem::new(&corridor, goal);
        assert!(matches!(
            agent.adopt_plan(&mut problem, Plan::new(vec![Direction::West])),
            Err(AgentError::Search(SearchError::InvalidPlan(_)))
        ));
        assert_eq!(agent.plan().steps(), &[Direction::East]);
        assert_eq!(agent.total_cost(), 1.);
        assert_eq!(agent.expanded(), 1);
    }

    #[test]
    fn optimal_engines_agree_on_every_problem() {
        let cases = [
            (ProblemName::Position, HeuristicName::Manhattan, TINY_MAZE_LAYOUT, 8.),
            (ProblemName::Corners, HeuristicName::Corners, SMALL_CORNERS_LAYOUT, 8.),
            (ProblemName::Food, HeuristicName::Food, FOOD_LAYOUT, FOOD_OPTIMAL_COST),
            (ProblemName::Capsule, HeuristicName::Capsule, CAPSULE_CORRIDOR_LAYOUT, 3.),
            (
                ProblemName::CapsuleAvoid,
                HeuristicName::CapsuleAvoid,
                CAPSULE_CORRIDOR_LAYOUT,
                5.,
            ),
        ];
        let engines = [
            SearchEngineName::Ucs,
            SearchEngineName::Astar,
            SearchEngineName::Ida,
            SearchEngineName::IdaNoDup,
        ];
        for (problem, heuristic, text, optimal_cost) in cases {
            for engine in engines {
                let mut agent =
                    SearchAgent::new(AgentConfig::new(engine, problem, heuristic)).unwrap();
                agent.register_initial_state(&layout(text)).unwrap();
                assert_approx_eq!(agent.total_cost(), optimal_cost);
            }
        }
    }

    #[test]
    fn optimal_engines_agree_on_larger_mazes() {
        let cases = [
            (
                ProblemName::Corners,
                HeuristicName::Corners,
                MEDIUM_CORNERS_LAYOUT,
                MEDIUM_CORNERS_OPTIMAL_COST,
            ),
            (
                ProblemName::Capsule,
                HeuristicName::Capsule,
                CAPSULE_DETOUR_LAYOUT,
                CAPSULE_DETOUR_OPTIMAL_COST,
            ),
            (
                ProblemName::CapsuleAvoid,
                HeuristicName::Capsule,
                CAPSULE_DETOUR_LAYOUT,
                CAPSULE_DETOUR_OPTIMAL_COST,
            ),
            (
                ProblemName::CapsuleAvoid,
                HeuristicName::CapsuleAvoid,
                CAPSULE_DETOUR_LAYOUT,
                CAPSULE_DETOUR_OPTIMAL_COST,
            ),
        ];
        for (problem, heuristic, text, optimal_cost) in cases {
            for engine in [
                SearchEngineName::Ucs,
                SearchEngineName::Astar,
                SearchEngineName::Ida,
                SearchEngineName::IdaNoDup,
            ] {
                let mut agent =
                    SearchAgent::new(AgentConfig::new(engine, problem, heuristic)).unwrap();
                agent.register_initial_state(&layout(text)).unwrap();
                assert_approx_eq!(agent.total_cost(), optimal_cost);
            }
        }
    }

    #[test]
    fn goal_at_start_is_an_empty_plan_for_every_engine() {
        let text = TINY_CORRIDOR_LAYOUT;
        for engine in [
            SearchEngineName::Bfs,
            SearchEngineName::Ucs,
            SearchEngineName::Astar,
            SearchEngineName::Ehc,
            SearchEngineName::Ida,
            SearchEngineName::IdaNoDup,
        ] {
            let mut config =
                AgentConfig::new(engine, ProblemName::Position, HeuristicName::Manhattan);
            config.goal = Some(Position::new(1, 1));
            let mut agent = SearchAgent::new(config).unwrap();
            agent.register_initial_state(&layout(text)).unwrap();
            assert!(agent.plan().is_empty());
            assert_eq!(agent.expanded(), 0);
            assert_eq!(agent.next_action(), Direction::Stop);
        }
    }

    #[test]
    fn unreachable_goal_is_a_search_error() {
        let mut config = AgentConfig::new(
            SearchEngineName::Astar,
            ProblemName::Position,
            HeuristicName::Manhattan,
        );
        config.goal = Some(Position::new(3, 1));
        let mut agent = SearchAgent::new(config).unwrap();
        assert!(matches!(
            agent.register_initial_state(&layout("%%%%%\n%P%.%\n%%%%%")),
            Err(AgentError::Search(SearchError::ProvablyUnsolvable))
        ));
    }

    #[test]
    fn incompatible_heuristic_fails_before_searching() {
        let config = AgentConfig::new(
            SearchEngineName::Astar,
            ProblemName::Capsule,
            HeuristicName::CapsuleAvoid,
        );
        assert!(matches!(
            SearchAgent::new(config),
            Err(ConfigError::IncompatibleHeuristic { .. })
        ));
    }

    #[test]
    fn stay_east_costs_less_than_unit() {
        let mut config = AgentConfig::new(
            SearchEngineName::Ucs,
            ProblemName::Position,
            HeuristicName::Zero,
        );
        config.cost = crate::search::problem_formulations::CostFunctionName::StayEast;
        let mut agent = SearchAgent::new(config).unwrap();
        agent
            .register_initial_state(&layout(TINY_MAZE_LAYOUT))
            .unwrap();
        assert_eq!(agent.plan().len(), TINY_MAZE_SOLUTION.len());
        assert!(agent.total_cost() < TINY_MAZE_SOLUTION.len() as Cost);
    }

    #[test]
    fn closest_dot_eats_everything() {
        let food_layout = layout(FOOD_LAYOUT);
        let mut agent = ClosestDotAgent::new();
        agent.register_initial_state(&food_layout).unwrap();

        // Nearest first: (1, 3), then (4, 3), then (4, 1).
        assert_eq!(agent.total_cost(), FOOD_OPTIMAL_COST);
        let mut problem = FoodProblem::new(&food_layout);
        assert!(validate(&mut problem, agent.plan()).is_ok());
        assert!(agent.expanded() > 0);
    }

    #[test]
    fn closest_dot_without_food_does_nothing() {
        let mut agent = ClosestDotAgent::new();
        agent
            .register_initial_state(&layout("%%%%\n%P %\n%%%%"))
            .unwrap();
        assert!(agent.plan().is_empty());
        assert_eq!(agent.next_action(), Direction::Stop);
    }
}
