use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Ordered record of one repetition, one [`Episode`] per round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory(Vec<Episode>);

impl Trajectory {
    pub fn with_capacity(n: usize) -> Self {
        Self(Vec::with_capacity(n))
    }
    pub fn push(&mut self, episode: Episode) {
        self.0.push(episode);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn get(&self, index: usize) -> Option<&Episode> {
        self.0.get(index)
    }
    pub fn last(&self) -> Option<&Episode> {
        self.0.last()
    }
    pub fn episodes(&self) -> &[Episode] {
        &self.0
    }
    /// One agent's reading of `metric` at every episode.
    pub fn series(&self, agent: usize, metric: Metric) -> Vec<f64> {
        self.0.iter().map(|e| e.measure(agent, metric)).collect()
    }
}

impl From<Vec<Episode>> for Trajectory {
    fn from(episodes: Vec<Episode>) -> Self {
        Self(episodes)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Episode;
    type IntoIter = std::slice::Iter<'a, Episode>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
