use serde::{Deserialize, Serialize};
use std::ops::Index;

/// One timestamped point of the flight path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub x: f64,          // meters downrange
    pub y: f64,          // meters above ground
    pub velocity_x: f64, // m/s, raw drag-adjusted component
    pub velocity_y: f64, // m/s, raw drag-adjusted component
    pub time: f64,       // seconds since launch
}

/// Samples from the muzzle to ground impact, in time order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub fn new(samples: Vec<TrajectorySample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectorySample> {
        self.samples.iter()
    }

    pub fn first(&self) -> Option<&TrajectorySample> {
        self.samples.first()
    }

    /// Ground-contact sample (the last one appended)
    pub fn impact(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    pub fn time_of_flight(&self) -> f64 {
        self.impact().map_or(0.0, |s| s.time)
    }

    /// Downrange distance at impact
    pub fn range(&self) -> f64 {
        self.impact().map_or(0.0, |s| s.x)
    }

    /// Highest sample of the flight
    pub fn apex(&self) -> Option<&TrajectorySample> {
        self.samples
            .iter()
            .filter(|s| !s.y.is_nan())
            .max_by(|a, b| a.y.total_cmp(&b.y))
    }

    pub fn max_height(&self) -> f64 {
        self.apex().map_or(0.0, |s| s.y)
    }

    pub fn into_samples(self) -> Vec<TrajectorySample> {
        self.samples
    }
}

impl Index<usize> for Trajectory {
    type Output = TrajectorySample;

    fn index(&self, index: usize) -> &Self::Output {
        &self.samples[index]
    }
}

impl FromIterator<TrajectorySample> for Trajectory {
    fn from_iter<I: IntoIterator<Item = TrajectorySample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Trajectory {
    type Item = TrajectorySample;
    type IntoIter = std::vec::IntoIter<TrajectorySample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectorySample;
    type IntoIter = std::slice::Iter<'a, TrajectorySample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
