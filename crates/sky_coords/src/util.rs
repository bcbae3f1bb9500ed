//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// `rem_euclid` can return exactly 360.0 for tiny negative inputs;
/// that case folds to 0.0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Remap an angle in [0, 360) to (-180, 180].
pub fn wrap_180(deg: f64) -> f64 {
    if deg > 180.0 { deg - 360.0 } else { deg }
}
