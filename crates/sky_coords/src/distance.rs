//! Great-circle separation between two sky positions.
//!
//! Uses the haversine formula, which is well conditioned for small
//! separations but loses accuracy as the separation approaches 180 deg.

use crate::error::CoordError;

/// `sin²(θ/2)` for an angle in radians.
pub fn haversine(theta_rad: f64) -> f64 {
    let s = (theta_rad / 2.0).sin();
    s * s
}

/// Angular separation in degrees between (ra1, dec1) and (ra2, dec2), all in degrees.
///
/// No validation is done on the inputs; NaN propagates.
pub fn spherical_distance(ra1: f64, dec1: f64, ra2: f64, dec2: f64) -> f64 {
    let (a1, d1) = (ra1.to_radians(), dec1.to_radians());
    let (a2, d2) = (ra2.to_radians(), dec2.to_radians());

    let mut h = haversine(d1 - d2) + d1.cos() * d2.cos() * haversine(a1 - a2);
    // Rounding can push h just past ±1 near identical or antipodal points.
    if h.abs() > 1.0 {
        h = h.signum();
    }
    (2.0 * h.sqrt().asin()).to_degrees()
}

/// One argument to [`spherical_distance_broadcast`]: a scalar or a slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Scalar(f64),
    Array(&'a [f64]),
}

impl Operand<'_> {
    /// Broadcast length, or `None` for values that stretch to any length.
    fn broadcast_len(&self) -> Option<usize> {
        match self {
            Self::Scalar(_) => None,
            Self::Array(a) if a.len() == 1 => None,
            Self::Array(a) => Some(a.len()),
        }
    }

    fn at(&self, i: usize) -> f64 {
        match self {
            Self::Scalar(v) => *v,
            Self::Array(a) if a.len() == 1 => a[0],
            Self::Array(a) => a[i],
        }
    }
}

impl From<f64> for Operand<'_> {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl<'a> From<&'a [f64]> for Operand<'a> {
    fn from(a: &'a [f64]) -> Self {
        Self::Array(a)
    }
}

impl<'a> From<&'a Vec<f64>> for Operand<'a> {
    fn from(a: &'a Vec<f64>) -> Self {
        Self::Array(a.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Operand<'a> {
    fn from(a: &'a [f64; N]) -> Self {
        Self::Array(a.as_slice())
    }
}

/// Elementwise [`spherical_distance`] over scalars and equal-length slices.
///
/// Scalars (and one-element slices) are repeated to the common length.
/// Four scalars give a one-element result.
///
/// ```
/// use sky_coords::{spherical_distance, spherical_distance_broadcast};
///
/// let d = spherical_distance_broadcast(1.0, 2.0, &[1.0, 2.0, 3.0, 4.0], &[4.0, 5.0, 6.0, 7.0])
///     .unwrap();
/// assert_eq!(d.len(), 4);
/// assert_eq!(d[2], spherical_distance(1.0, 2.0, 3.0, 6.0));
/// ```
pub fn spherical_distance_broadcast<'a>(
    ra1: impl Into<Operand<'a>>,
    dec1: impl Into<Operand<'a>>,
    ra2: impl Into<Operand<'a>>,
    dec2: impl Into<Operand<'a>>,
) -> Result<Vec<f64>, CoordError> {
    let ops = [ra1.into(), dec1.into(), ra2.into(), dec2.into()];

    let mut len: Option<usize> = None;
    for n in ops.iter().filter_map(Operand::broadcast_len) {
        match len {
            None => len = Some(n),
            Some(expected) if expected != n => {
                log::debug!("broadcast rejected: lengths {expected} and {n}");
                return Err(CoordError::ShapeMismatch { expected, found: n });
            }
            Some(_) => {}
        }
    }

    let [a1, d1, a2, d2] = ops;
    Ok((0..len.unwrap_or(1))
        .map(|i| spherical_distance(a1.at(i), d1.at(i), a2.at(i), d2.at(i)))
        .collect())
}
