//! Equatorial (RA, Dec) positions in decimal and sexagesimal form.
//!
//! An [`EquatorialCoordinate`] is built from any mix of string and numeric
//! parts that together hold either two decimal values (RA deg, Dec deg) or
//! six sexagesimal values (RA h m s, Dec d m s). The characters `,:dhms` act
//! as separators, so `"12:01:02.34, -34:12:34.11"`,
//! `"12h01m02.34s -34d12m34.11s"` and `(180.25975, "-34.2095")` are all
//! accepted.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::config::SexagesimalConfig;
use crate::error::CoordError;
use crate::sexagesimal::{
    DecSign, Dms, Hms, deg_to_dms, deg_to_hms, dms_to_deg, format_dms, format_hms, hms_to_deg,
};
use crate::util::{normalize_360, wrap_180};

/// Characters treated as token separators in addition to whitespace.
const SEPARATORS: [char; 6] = [',', ':', 'd', 'h', 'm', 's'];

/// Build an [`EquatorialCoordinate`] from a heterogeneous list of parts.
///
/// Each part only needs to implement `Display`.
///
/// ```
/// use sky_coords::equatorial;
///
/// let pos = equatorial!(12, 1, 2.34, "-34", 12, 34.11).unwrap();
/// assert_eq!(pos.decsign().as_char(), '-');
/// assert_eq!(pos.dec_dms(), "-34:12:34.11");
/// ```
#[macro_export]
macro_rules! equatorial {
    ($($part:expr),+ $(,)?) => {
        $crate::EquatorialCoordinate::from_parts(&[$(&$part as &dyn ::std::fmt::Display),+])
    };
}

/// Split raw input into numeric tokens.
///
/// Every separator character becomes a space, then the text is split on
/// whitespace.
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// An equatorial sky position, immutable apart from its rendering config.
#[derive(Debug, Clone, PartialEq)]
pub struct EquatorialCoordinate {
    ra: f64,
    dec: f64,
    ra0: f64,
    hms: Hms,
    sign: DecSign,
    dms: Dms,
    config: SexagesimalConfig,
}

impl EquatorialCoordinate {
    /// Parse from parts whose `Display` forms, joined by spaces, hold 2 or 6
    /// values.
    ///
    /// With six values the fields are range-checked: hours 0..=23, minutes
    /// and arc-minutes 0..=59, seconds and arc-seconds in [0, 60). Whole
    /// declination degrees must fit in a `u32`, in either form.
    pub fn from_parts(parts: &[&dyn Display]) -> Result<Self, CoordError> {
        let joined = parts
            .iter()
            .map(|p| p.to_string().trim().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let tokens = tokenize(&joined);
        Self::from_tokens(&tokens).inspect_err(|e| log::debug!("rejected coordinate: {e}"))
    }

    /// Construct from decimal RA and Dec in degrees.
    ///
    /// RA is normalized to [0, 360); Dec is kept as given, but must be
    /// finite with |Dec| below [`MAX_DMS_DEGREES`](crate::MAX_DMS_DEGREES).
    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Result<Self, CoordError> {
        let tokens = [ra_deg.to_string(), dec_deg.to_string()];
        Self::from_decimal(ra_deg, dec_deg, &tokens)
    }

    fn from_decimal(ra_deg: f64, dec_deg: f64, tokens: &[String]) -> Result<Self, CoordError> {
        if !ra_deg.is_finite() || !dec_deg.is_finite() {
            return Err(CoordError::invalid(tokens, "values must be finite"));
        }
        let dms = deg_to_dms(dec_deg)
            .ok_or_else(|| CoordError::invalid(tokens, "declination degrees out of range"))?;
        let ra = normalize_360(ra_deg);
        Ok(Self {
            ra,
            dec: dec_deg,
            ra0: wrap_180(ra),
            hms: deg_to_hms(ra),
            sign: DecSign::of(dec_deg),
            dms,
            config: SexagesimalConfig::default(),
        })
    }

    fn from_tokens(tokens: &[String]) -> Result<Self, CoordError> {
        match tokens.len() {
            2 => {
                let ra = parse_float(tokens, 0)?;
                let dec = parse_float(tokens, 1)?;
                Self::from_decimal(ra, dec, tokens)
            }
            6 => Self::from_sexagesimal_tokens(tokens),
            n => Err(CoordError::invalid(
                tokens,
                format!("expected 2 or 6 values, got {n}"),
            )),
        }
    }

    fn from_sexagesimal_tokens(tokens: &[String]) -> Result<Self, CoordError> {
        let hms = Hms {
            hours: parse_bounded_int(tokens, 0, 23)?,
            minutes: parse_bounded_int(tokens, 1, 59)?,
            seconds: parse_seconds(tokens, 2)?,
        };

        // The sign is read from the text so that "-00" keeps its minus.
        let sign = if tokens[3].starts_with('-') {
            DecSign::Minus
        } else {
            DecSign::Plus
        };
        let degrees = parse_int(tokens, 3)?.unsigned_abs();
        let degrees = u32::try_from(degrees)
            .map_err(|_| CoordError::invalid(tokens, "declination degrees out of range"))?;
        let dms = Dms {
            degrees,
            minutes: parse_bounded_int(tokens, 4, 59)?,
            seconds: parse_seconds(tokens, 5)?,
        };

        let ra = normalize_360(hms_to_deg(&hms));
        Ok(Self {
            ra,
            dec: sign.apply(dms_to_deg(&dms)),
            ra0: wrap_180(ra),
            hms,
            sign,
            dms,
            config: SexagesimalConfig::default(),
        })
    }

    /// Replace the rendering configuration.
    pub fn with_config(mut self, config: SexagesimalConfig) -> Self {
        self.config = config;
        self
    }

    /// Right ascension in degrees, [0, 360).
    pub fn ra(&self) -> f64 {
        self.ra
    }

    /// Declination in degrees.
    pub fn dec(&self) -> f64 {
        self.dec
    }

    /// Right ascension remapped to (-180, 180].
    pub fn ra0(&self) -> f64 {
        self.ra0
    }

    /// RA hours, 0..=23.
    pub fn rah(&self) -> u8 {
        self.hms.hours
    }

    /// RA minutes, 0..=59.
    pub fn ram(&self) -> u8 {
        self.hms.minutes
    }

    /// RA seconds, [0, 60).
    pub fn ras(&self) -> f64 {
        self.hms.seconds
    }

    /// Sign of the declination.
    pub fn decsign(&self) -> DecSign {
        self.sign
    }

    /// Whole degrees of |Dec|.
    pub fn decd(&self) -> u32 {
        self.dms.degrees
    }

    /// Arc-minutes of |Dec|, 0..=59.
    pub fn decm(&self) -> u8 {
        self.dms.minutes
    }

    /// Arc-seconds of |Dec|, [0, 60).
    pub fn decs(&self) -> f64 {
        self.dms.seconds
    }

    /// RA as stored hours-minutes-seconds.
    pub fn hms(&self) -> Hms {
        self.hms
    }

    /// Absolute Dec as stored degrees-minutes-seconds.
    pub fn dms(&self) -> Dms {
        self.dms
    }

    /// Current rendering configuration.
    pub fn config(&self) -> &SexagesimalConfig {
        &self.config
    }

    /// Field separator used by [`ra_hms`](Self::ra_hms) and
    /// [`dec_dms`](Self::dec_dms).
    pub fn delim(&self) -> &str {
        &self.config.delim
    }

    /// Change the field separator for later renderings.
    pub fn set_delim(&mut self, delim: impl Into<String>) {
        self.config.delim = delim.into();
    }

    /// RA as `HH:MM:SS.sss`, with seconds rollover applied.
    pub fn ra_hms(&self) -> String {
        format_hms(&self.hms, &self.config.delim, self.config.ra_sec_digits)
    }

    /// Dec as `±DD:MM:SS.ss`, with seconds rollover applied.
    pub fn dec_dms(&self) -> String {
        format_dms(
            self.sign,
            &self.dms,
            &self.config.delim,
            self.config.dec_sec_digits,
        )
    }
}

impl FromStr for EquatorialCoordinate {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_parts(&[&s as &dyn Display])
    }
}

impl Display for EquatorialCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RA, Dec = {:.5}, {:.4} = {}, {}",
            self.ra,
            self.dec,
            self.ra_hms(),
            self.dec_dms()
        )
    }
}

fn parse_float(tokens: &[String], idx: usize) -> Result<f64, CoordError> {
    tokens[idx]
        .parse::<f64>()
        .map_err(|e| CoordError::invalid(tokens, format!("'{}': {e}", tokens[idx])))
}

fn parse_int(tokens: &[String], idx: usize) -> Result<i64, CoordError> {
    tokens[idx]
        .parse::<i64>()
        .map_err(|e| CoordError::invalid(tokens, format!("'{}': {e}", tokens[idx])))
}

fn parse_bounded_int(tokens: &[String], idx: usize, max: u8) -> Result<u8, CoordError> {
    let v = parse_int(tokens, idx)?;
    if !(0..=i64::from(max)).contains(&v) {
        return Err(CoordError::invalid(
            tokens,
            format!("'{}' outside 0..={max}", tokens[idx]),
        ));
    }
    Ok(v as u8)
}

fn parse_seconds(tokens: &[String], idx: usize) -> Result<f64, CoordError> {
    let v = parse_float(tokens, idx)?;
    if !(0.0..60.0).contains(&v) {
        return Err(CoordError::invalid(
            tokens,
            format!("'{}' outside [0, 60)", tokens[idx]),
        ));
    }
    Ok(v)
}
