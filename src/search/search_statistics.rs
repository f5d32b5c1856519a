use crate::search::HeuristicValue;
use ordered_float::Float;
use std::time::Instant;
use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: i64,
    /// Number of nodes evaluated by the heuristic
    evaluated_nodes: i64,
    /// Number of nodes generated
    generated_nodes: i64,
    /// Number of nodes reopened because a cheaper path was found
    reopened_nodes: i64,
    /// Number of nodes popped from the frontier and then discarded as
    /// duplicates
    pruned_nodes: i64,
    /// Best heuristic value found so far
    best_heuristic_value: HeuristicValue,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self {
            expanded_nodes: 0,
            evaluated_nodes: 0,
            generated_nodes: 0,
            reopened_nodes: 0,
            pruned_nodes: 0,
            best_heuristic_value: HeuristicValue::infinity(),
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    /// Reset all counters and note the start of a new search.
    pub fn start_search(&mut self, engine: &str) {
        *self = Self::new();
        info!(engine, "starting search");
    }

    pub fn register_heuristic_value(&mut self, heuristic_value: HeuristicValue) {
        if heuristic_value < self.best_heuristic_value {
            self.best_heuristic_value = heuristic_value;
            self.log_if_needed();
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as i64;
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
    }

    pub fn expanded_nodes(&self) -> i64 {
        self.expanded_nodes
    }

    pub fn evaluated_nodes(&self) -> i64 {
        self.evaluated_nodes
    }

    pub fn reopened_nodes(&self) -> i64 {
        self.reopened_nodes
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            reopened_nodes = self.reopened_nodes,
            pruned_nodes = self.pruned_nodes,
            best_heuristic_value = self.best_heuristic_value.into_inner(),
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
