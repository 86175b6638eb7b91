//! # Exterior Ballistics
//!
//! Fixed-step trajectory integrator for a projectile: static drag, air density
//! for altitude and humidity, wind, Coriolis and spin drift, sampled every
//! 10 ms from the muzzle to ground impact.
//!
//! ```no_run
//! use exterior_ballistics::{compute_trajectory, OverrideOptions, ShotContext, WeaponProfile};
//!
//! let weapon = WeaponProfile {
//!     initial_speed: 800.0,
//!     drag_coefficient: 0.3,
//!     bullet_weight_g: 10.0,
//!     bullet_diameter_mm: 7.62,
//!     ..Default::default()
//! };
//! let trajectory =
//!     compute_trajectory(&weapon, &ShotContext::default(), &OverrideOptions::default());
//! println!("range {:.1} m after {:.2} s", trajectory.range(), trajectory.time_of_flight());
//! ```

// Re-export the main types and functions
pub use batch::{compute_batch, compute_batch_bounded, ShotRequest};
pub use error::TrajectoryError;
pub use inputs::{OverrideOptions, ResolvedParameters, ShotContext, WeaponProfile};
pub use integrator::{compute_trajectory, compute_trajectory_bounded, Samples, TrajectoryIntegrator};
pub use trajectory::{Trajectory, TrajectorySample};

// Module declarations
pub mod atmosphere;
pub mod constants;
pub mod coriolis;
pub mod drag;
pub mod spin_drift;
pub mod wind;
mod batch;
mod error;
mod inputs;
mod integrator;
mod trajectory;
