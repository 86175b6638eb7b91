use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrajectoryError {
    /// The iteration ceiling was reached before the projectile met the ground.
    #[error("trajectory did not reach the ground within {iterations} iterations (t = {last_time:.2} s)")]
    DidNotConverge { iterations: usize, last_time: f64 },
}
