//! Sexagesimal (base-60) decomposition and rendering.
//!
//! Right ascension is split into hours-minutes-seconds of time (1h = 15 deg),
//! declination into a sign plus degrees-minutes-seconds of arc. Rendering
//! zero-pads every field and repairs the rollover that appears when seconds
//! round up to 60 at the requested precision.

use std::fmt::{Display, Formatter};

use crate::util::normalize_360;

/// Hours-minutes-seconds of right ascension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hms {
    /// Whole hours (0..23).
    pub hours: u8,
    /// Minutes of time (0..59).
    pub minutes: u8,
    /// Seconds of time (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Exclusive upper bound on an angle [`deg_to_dms`] can decompose.
pub const MAX_DMS_DEGREES: f64 = u32::MAX as f64 + 1.0;

/// Degrees-minutes-seconds of an unsigned angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees, up to `u32::MAX`.
    pub degrees: u32,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Sign of a declination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecSign {
    Plus,
    Minus,
}

impl DecSign {
    /// Sign of a decimal angle. Negative zero counts as `Plus`.
    pub fn of(deg: f64) -> Self {
        if deg < 0.0 { Self::Minus } else { Self::Plus }
    }

    /// `'+'` or `'-'`.
    pub const fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }

    /// Apply the sign to a non-negative magnitude.
    pub fn apply(self, magnitude: f64) -> f64 {
        match self {
            Self::Plus => magnitude,
            Self::Minus => -magnitude,
        }
    }
}

impl Display for DecSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Split a fractional unit into whole minutes and seconds.
///
/// `frac` must lie in [0, 1). Seconds come from the fractional minutes so
/// they stay strictly below 60.
fn split_fraction(frac: f64) -> (u8, f64) {
    let total_minutes = frac * 60.0;
    let minutes = total_minutes.floor();
    let seconds = ((total_minutes - minutes) * 60.0).max(0.0);
    (minutes.min(59.0) as u8, seconds)
}

/// Convert right ascension in degrees to hours-minutes-seconds.
///
/// The input is normalized to [0, 360) first.
pub fn deg_to_hms(ra_deg: f64) -> Hms {
    let h = normalize_360(ra_deg) / 15.0;
    let hours = h.floor();
    let (minutes, seconds) = split_fraction(h - hours);
    Hms {
        // Clamp in case of floating point edge just below 360 deg
        hours: hours.min(23.0) as u8,
        minutes,
        seconds,
    }
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value; see [`DecSign::of`]
/// for the sign. Returns `None` when the whole degrees do not fit in
/// [`Dms::degrees`] or the input is not finite.
pub fn deg_to_dms(deg: f64) -> Option<Dms> {
    let d = deg.abs();
    if !d.is_finite() || d >= MAX_DMS_DEGREES {
        return None;
    }
    let degrees = d.floor();
    let (minutes, seconds) = split_fraction(d - degrees);
    Some(Dms {
        degrees: degrees as u32,
        minutes,
        seconds,
    })
}

/// Convert hours-minutes-seconds back to degrees.
pub fn hms_to_deg(hms: &Hms) -> f64 {
    15.0 * (hms.hours as f64 + hms.minutes as f64 / 60.0 + hms.seconds / 3600.0)
}

/// Convert degrees-minutes-seconds back to (unsigned) decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Zero-padded seconds field, plus whether it rounded up to 60.
fn seconds_field(seconds: f64, frac_digits: usize) -> (String, bool) {
    let width = if frac_digits == 0 { 2 } else { frac_digits + 3 };
    let s = format!("{seconds:0width$.frac_digits$}");
    let sixty = format!("{:0width$.frac_digits$}", 60.0);
    if s == sixty {
        (format!("{:0width$.frac_digits$}", 0.0), true)
    } else {
        (s, false)
    }
}

/// Render hours-minutes-seconds as `HH<delim>MM<delim>SS.sss`.
///
/// Seconds that round to 60 carry into the minutes, minutes reaching 60
/// carry into the hours, and hour 24 wraps to 00. Only the string is
/// corrected; `hms` is left untouched.
pub fn format_hms(hms: &Hms, delim: &str, frac_digits: usize) -> String {
    let mut hours = u32::from(hms.hours);
    let mut minutes = u32::from(hms.minutes);
    let (secs, carried) = seconds_field(hms.seconds, frac_digits);
    if carried {
        log::trace!("RA seconds {} rolled over at {frac_digits} digits", hms.seconds);
        minutes += 1;
    }
    if minutes == 60 {
        minutes = 0;
        hours += 1;
    }
    if hours == 24 {
        hours = 0;
    }
    [format!("{hours:02}"), format!("{minutes:02}"), secs].join(delim)
}

/// Render a signed degrees-minutes-seconds value as `±DD<delim>MM<delim>SS.ss`.
///
/// Same carry rules as [`format_hms`], except degrees never wrap.
pub fn format_dms(sign: DecSign, dms: &Dms, delim: &str, frac_digits: usize) -> String {
    let mut degrees = u64::from(dms.degrees);
    let mut minutes = u32::from(dms.minutes);
    let (secs, carried) = seconds_field(dms.seconds, frac_digits);
    if carried {
        log::trace!("Dec seconds {} rolled over at {frac_digits} digits", dms.seconds);
        minutes += 1;
    }
    if minutes == 60 {
        minutes = 0;
        degrees += 1;
    }
    format!(
        "{sign}{}",
        [format!("{degrees:02}"), format!("{minutes:02}"), secs].join(delim)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn deg_to_hms_zero() {
        let h = deg_to_hms(0.0);
        assert_eq!(h.hours, 0);
        assert_eq!(h.minutes, 0);
        assert!(h.seconds.abs() < EPS);
    }

    #[test]
    fn deg_to_hms_known() {
        // 180.25975 deg = 12h 01m 02.34s
        let h = deg_to_hms(180.25975);
        assert_eq!(h.hours, 12);
        assert_eq!(h.minutes, 1);
        assert!((h.seconds - 2.34).abs() < 1e-6, "seconds = {}", h.seconds);
    }

    #[test]
    fn deg_to_hms_negative_wraps() {
        // -15 deg = 345 deg = 23h
        let h = deg_to_hms(-15.0);
        assert_eq!(h.hours, 23);
        assert_eq!(h.minutes, 0);
        assert!(h.seconds.abs() < 1e-6);
    }

    #[test]
    fn deg_to_dms_known() {
        // 34.2095 deg = 34 deg 12' 34.2"
        let d = deg_to_dms(-34.2095).unwrap();
        assert_eq!(d.degrees, 34);
        assert_eq!(d.minutes, 12);
        assert!((d.seconds - 34.2).abs() < 1e-6, "seconds = {}", d.seconds);
    }

    #[test]
    fn seconds_always_below_sixty() {
        for i in 0..10_000 {
            let deg = i as f64 * 0.0371;
            let h = deg_to_hms(deg);
            let d = deg_to_dms(deg).unwrap();
            assert!((0.0..60.0).contains(&h.seconds), "{deg}: {}", h.seconds);
            assert!((0.0..60.0).contains(&d.seconds), "{deg}: {}", d.seconds);
            assert!(h.minutes < 60 && d.minutes < 60);
        }
    }

    #[test]
    fn hms_round_trip() {
        let deg = 287.123456;
        let back = hms_to_deg(&deg_to_hms(deg));
        assert!((back - deg).abs() < EPS, "back = {back}");
    }

    #[test]
    fn dms_round_trip() {
        let deg = 23.853;
        let back = dms_to_deg(&deg_to_dms(deg).unwrap());
        assert!((back - deg).abs() < EPS, "back = {back}");
    }

    #[test]
    fn format_hms_padding() {
        let h = Hms {
            hours: 1,
            minutes: 2,
            seconds: 3.4,
        };
        assert_eq!(format_hms(&h, ":", 3), "01:02:03.400");
        assert_eq!(format_hms(&h, " ", 3), "01 02 03.400");
    }

    #[test]
    fn format_hms_full_rollover_wraps_hour() {
        let h = Hms {
            hours: 23,
            minutes: 59,
            seconds: 59.9999,
        };
        assert_eq!(format_hms(&h, ":", 3), "00:00:00.000");
    }

    #[test]
    fn format_hms_minute_carry() {
        let h = Hms {
            hours: 5,
            minutes: 14,
            seconds: 59.99951,
        };
        assert_eq!(format_hms(&h, ":", 3), "05:15:00.000");
    }

    #[test]
    fn format_hms_zero_digits() {
        let h = Hms {
            hours: 5,
            minutes: 59,
            seconds: 59.6,
        };
        assert_eq!(format_hms(&h, ":", 0), "06:00:00");
    }

    #[test]
    fn format_dms_sign_and_padding() {
        let d = Dms {
            degrees: 4,
            minutes: 5,
            seconds: 6.789,
        };
        assert_eq!(format_dms(DecSign::Minus, &d, ":", 2), "-04:05:06.79");
        assert_eq!(format_dms(DecSign::Plus, &d, "_", 2), "+04_05_06.79");
    }

    #[test]
    fn format_dms_rollover_carries_into_degrees() {
        let d = Dms {
            degrees: 89,
            minutes: 59,
            seconds: 59.996,
        };
        assert_eq!(format_dms(DecSign::Plus, &d, ":", 2), "+90:00:00.00");
    }

    #[test]
    fn format_dms_degrees_never_wrap() {
        let d = Dms {
            degrees: 359,
            minutes: 59,
            seconds: 59.999,
        };
        assert_eq!(format_dms(DecSign::Plus, &d, ":", 2), "+360:00:00.00");
    }

    #[test]
    fn deg_to_dms_rejects_degrees_beyond_u32() {
        assert!(deg_to_dms(5.0e9).is_none());
        assert!(deg_to_dms(-MAX_DMS_DEGREES).is_none());
        assert!(deg_to_dms(f64::INFINITY).is_none());
        let d = deg_to_dms(MAX_DMS_DEGREES - 1.0).unwrap();
        assert_eq!(d.degrees, u32::MAX);
    }

    #[test]
    fn sign_of_negative_zero_is_plus() {
        assert_eq!(DecSign::of(-0.0), DecSign::Plus);
        assert_eq!(DecSign::of(-1e-12), DecSign::Minus);
        assert_eq!(DecSign::Minus.to_string(), "-");
        assert_eq!(DecSign::Minus.apply(2.5), -2.5);
    }
}
