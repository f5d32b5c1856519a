use crate::search::search_engines::SearchError;
use std::time::{Duration, Instant};
use tracing::info;

/// Wall-clock budget of a search. Running out of time is reported as a
/// failed search, the same way an exhausted frontier is.
#[derive(Debug, Clone)]
pub struct TerminationCondition {
    time_limit: Option<Duration>,
    start_time: Instant,
}

impl Default for TerminationCondition {
    fn default() -> Self {
        Self::new(None)
    }
}

impl TerminationCondition {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            time_limit,
            start_time: Instant::now(),
        }
    }

    /// Restart the clock. Called at the beginning of every search.
    pub fn start(&mut self) {
        self.start_time = Instant::now();
        if let Some(time_limit) = self.time_limit {
            info!(time_limit = time_limit.as_secs_f64());
        }
    }

    pub fn should_terminate(&self) -> Option<SearchError> {
        match self.time_limit {
            Some(time_limit) if self.start_time.elapsed() > time_limit => {
                Some(SearchError::TimeLimitExceeded)
            }
            _ => None,
        }
    }

    pub fn finalise(&self) {
        info!(total_time_used = self.start_time.elapsed().as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_limit_never_terminates() {
        let mut condition = TerminationCondition::default();
        condition.start();
        assert_eq!(condition.should_terminate(), None);
    }

    #[test]
    fn zero_limit_terminates() {
        let mut condition = TerminationCondition::new(Some(Duration::ZERO));
        condition.start();
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(
            condition.should_terminate(),
            Some(SearchError::TimeLimitExceeded)
        );
    }
}
