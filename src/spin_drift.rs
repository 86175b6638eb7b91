use crate::constants::SPIN_DRIFT_RATE;

/// Linear spin-drift term, applied to the x-axis only.
///
/// Returns `0.0001 * elapsed_s` when enabled, exactly zero otherwise.
#[inline]
pub fn spin_drift_effect(enabled: bool, elapsed_s: f64) -> f64 {
    if enabled {
        SPIN_DRIFT_RATE * elapsed_s
    } else {
        0.0
    }
}
