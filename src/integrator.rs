//! Fixed-step trajectory integration.
//!
//! Positions are absolute: every step recomputes `x` and `y` from the
//! elapsed time instead of accumulating increments. The raw velocity keeps
//! the static drag penalty computed from the adjusted muzzle speed, and only
//! the gravity term changes with time.
//!
//! Ground contact ends the flight after the sample that reaches `y <= 0` is
//! emitted. At the muzzle (`t = 0`, `y = 0`) the shot only continues if the
//! height one step later is positive, whether that lift comes from the
//! launch velocity or from an updraft; otherwise it stays a single sample.

use nalgebra::Vector2;

use crate::atmosphere::{adjust_muzzle_speed, calculate_air_density};
use crate::constants::{GRAVITY_MPS2, TIME_STEP_S};
use crate::coriolis::Coriolis;
use crate::drag::{cross_sectional_area, drag_penalty};
use crate::error::TrajectoryError;
use crate::inputs::{OverrideOptions, ResolvedParameters, ShotContext, WeaponProfile};
use crate::spin_drift::spin_drift_effect;
use crate::trajectory::{Trajectory, TrajectorySample};
use crate::wind::Wind;

/// Integrator for a single shot.
///
/// All derived constants are computed once on construction; the integrator
/// itself is immutable and may be shared between threads.
#[derive(Debug, Clone)]
pub struct TrajectoryIntegrator {
    params: ResolvedParameters,
    air_density: f64,
    adjusted_speed: f64,
    area: f64,
    launch_velocity: Vector2<f64>,
    drag: Vector2<f64>,
    wind: Wind,
    coriolis: Coriolis,
    max_iterations: Option<usize>,
}

impl TrajectoryIntegrator {
    pub fn new(weapon: &WeaponProfile, context: &ShotContext, overrides: &OverrideOptions) -> Self {
        Self::from_resolved(ResolvedParameters::resolve(weapon, context, overrides))
    }

    pub fn from_resolved(params: ResolvedParameters) -> Self {
        let air_density = calculate_air_density(params.altitude, params.humidity);
        let adjusted_speed =
            adjust_muzzle_speed(params.initial_speed, air_density, params.temperature);
        let area = cross_sectional_area(params.bullet_diameter_m);

        let launch_velocity = Vector2::new(
            adjusted_speed * params.launch_angle_rad.cos(),
            adjusted_speed * params.launch_angle_rad.sin(),
        );
        let penalty = |component: f64| {
            drag_penalty(
                component,
                params.drag_coefficient,
                air_density,
                area,
                params.bullet_mass_kg,
            )
        };
        let drag = Vector2::new(penalty(launch_velocity.x), penalty(launch_velocity.y));

        let wind = Wind::new(params.wind_speed, params.wind_angle_rad);
        let coriolis = Coriolis::new(params.coriolis_effect, params.latitude_rad);

        Self {
            params,
            air_density,
            adjusted_speed,
            area,
            launch_velocity,
            drag,
            wind,
            coriolis,
            max_iterations: None,
        }
    }

    /// Cap the number of loop iterations (samples) [`integrate`](Self::integrate) may run.
    ///
    /// Reaching the cap without ground contact is reported as
    /// [`TrajectoryError::DidNotConverge`]; samples are never truncated.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    pub fn parameters(&self) -> &ResolvedParameters {
        &self.params
    }

    pub fn air_density(&self) -> f64 {
        self.air_density
    }

    pub fn adjusted_speed(&self) -> f64 {
        self.adjusted_speed
    }

    pub fn cross_sectional_area(&self) -> f64 {
        self.area
    }

    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    /// Raw drag-adjusted velocity at `elapsed_s`, before wind, Coriolis and spin drift
    pub fn raw_velocity(&self, elapsed_s: f64) -> Vector2<f64> {
        Vector2::new(
            self.launch_velocity.x - self.drag.x,
            self.launch_velocity.y - GRAVITY_MPS2 * elapsed_s - self.drag.y,
        )
    }

    /// Sample at `elapsed_s`, positions measured from the muzzle.
    fn sample_at(&self, elapsed_s: f64) -> TrajectorySample {
        let t = elapsed_s;

        let velocity = self.raw_velocity(t);
        let rate = velocity + self.wind.effect_at(t) + self.coriolis.effect(&velocity, t);
        let spin = spin_drift_effect(self.params.spin_drift, t);

        TrajectorySample {
            x: (rate.x + spin) * t,
            y: rate.y * t - 0.5 * GRAVITY_MPS2 * t * t,
            velocity_x: velocity.x,
            velocity_y: velocity.y,
            time: t,
        }
    }

    /// Sample of step `step` and whether it is the ground-contact sample.
    fn step(&self, step: usize) -> (TrajectorySample, bool) {
        let sample = self.sample_at(step as f64 * TIME_STEP_S);

        // The muzzle height is always 0, so it is judged by the next step:
        // only a shot that rises off the ground leaves it. A NaN height there
        // also ends the flight; past the muzzle NaN never compares <= 0.
        let grounded = if step == 0 {
            let lift = self.sample_at(TIME_STEP_S).y;
            lift.is_nan() || lift <= 0.0
        } else {
            sample.y <= 0.0
        };
        (sample, grounded)
    }

    /// Lazily yield samples from the muzzle up to and including ground contact.
    ///
    /// Ignores the iteration cap; an input that never lands yields forever.
    pub fn samples(&self) -> Samples<'_> {
        Samples {
            integrator: self,
            step: 0,
            landed: false,
        }
    }

    /// Run the loop to ground contact, honouring the iteration cap if one is set.
    pub fn integrate(&self) -> Result<Trajectory, TrajectoryError> {
        let Some(limit) = self.max_iterations else {
            return Ok(self.samples().collect());
        };

        let mut samples: Vec<TrajectorySample> = Vec::new();
        for sample in self.samples() {
            if samples.len() >= limit {
                return Err(TrajectoryError::DidNotConverge {
                    iterations: limit,
                    last_time: samples.last().map_or(0.0, |s| s.time),
                });
            }
            samples.push(sample);
        }
        Ok(Trajectory::new(samples))
    }
}

/// Iterator over the samples of one shot, see [`TrajectoryIntegrator::samples`]
#[derive(Debug, Clone)]
pub struct Samples<'a> {
    integrator: &'a TrajectoryIntegrator,
    step: usize,
    landed: bool,
}

impl Iterator for Samples<'_> {
    type Item = TrajectorySample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.landed {
            return None;
        }
        let (sample, grounded) = self.integrator.step(self.step);
        self.step += 1;
        self.landed = grounded;
        Some(sample)
    }
}

impl std::iter::FusedIterator for Samples<'_> {}

/// Compute the trajectory of one shot.
///
/// There is no iteration cap: inputs whose height never returns to the
/// ground make this call loop forever. Use [`compute_trajectory_bounded`]
/// to get an error instead.
pub fn compute_trajectory(
    weapon: &WeaponProfile,
    context: &ShotContext,
    overrides: &OverrideOptions,
) -> Trajectory {
    TrajectoryIntegrator::new(weapon, context, overrides)
        .samples()
        .collect()
}

/// Compute the trajectory of one shot with at most `max_iterations` samples.
pub fn compute_trajectory_bounded(
    weapon: &WeaponProfile,
    context: &ShotContext,
    overrides: &OverrideOptions,
    max_iterations: usize,
) -> Result<Trajectory, TrajectoryError> {
    TrajectoryIntegrator::new(weapon, context, overrides)
        .with_max_iterations(max_iterations)
        .integrate()
}
