//! Parallel evaluation of independent shots.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::TrajectoryError;
use crate::inputs::{OverrideOptions, ShotContext, WeaponProfile};
use crate::integrator::{compute_trajectory, TrajectoryIntegrator};
use crate::trajectory::Trajectory;

/// Inputs of one shot in a batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotRequest {
    pub weapon: WeaponProfile,
    pub context: ShotContext,
    pub overrides: OverrideOptions,
}

impl ShotRequest {
    pub fn new(weapon: WeaponProfile, context: ShotContext, overrides: OverrideOptions) -> Self {
        Self {
            weapon,
            context,
            overrides,
        }
    }
}

/// Compute every request on the rayon pool; results keep request order.
///
/// Unbounded like [`compute_trajectory`]: one non-landing request blocks the batch.
pub fn compute_batch(requests: &[ShotRequest]) -> Vec<Trajectory> {
    requests
        .par_iter()
        .map(|r| compute_trajectory(&r.weapon, &r.context, &r.overrides))
        .collect()
}

/// Like [`compute_batch`] with an iteration cap applied to every request.
pub fn compute_batch_bounded(
    requests: &[ShotRequest],
    max_iterations: usize,
) -> Vec<Result<Trajectory, TrajectoryError>> {
    requests
        .par_iter()
        .map(|r| {
            TrajectoryIntegrator::new(&r.weapon, &r.context, &r.overrides)
                .with_max_iterations(max_iterations)
                .integrate()
        })
        .collect()
}
