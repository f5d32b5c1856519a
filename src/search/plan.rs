//! A plan is a sequence of actions that leads from the start state of a
//! problem to one of its goal states. This module provides the [`Plan`]
//! struct, which represents a plan.

use std::fmt;
use std::ops::{Deref, DerefMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<A> {
    steps: Vec<A>,
}

impl<A> Plan<A> {
    /// The plan of a problem whose start state is already a goal.
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<A>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[A] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append another plan, used when a plan is assembled from segments.
    pub fn extend(&mut self, other: Plan<A>) {
        self.steps.extend(other.steps);
    }
}

impl<A> Default for Plan<A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A: fmt::Display> fmt::Display for Plan<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for step in &self.steps {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", step)?;
            first = false;
        }
        Ok(())
    }
}

impl<A> IntoIterator for Plan<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<A> From<Vec<A>> for Plan<A> {
    fn from(steps: Vec<A>) -> Self {
        Self::new(steps)
    }
}

impl<A> Deref for Plan<A> {
    type Target = [A];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl<A> DerefMut for Plan<A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.steps
    }
}
