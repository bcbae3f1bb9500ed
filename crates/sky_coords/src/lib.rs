//! Equatorial coordinate formatting and sky separation.
//!
//! This crate provides:
//! - [`EquatorialCoordinate`]: flexible parsing of RA/Dec given as two
//!   decimal values or six sexagesimal fields, with decimal and
//!   `HH:MM:SS.sss` / `±DD:MM:SS.ss` views
//! - [`spherical_distance`]: haversine great-circle separation, plus an
//!   elementwise form over slices
//!
//! # Quick start
//!
//! ```
//! use sky_coords::{EquatorialCoordinate, spherical_distance};
//!
//! let pos: EquatorialCoordinate = "12:01:02.34, -34:12:34.11".parse().unwrap();
//! assert_eq!(
//!     pos.to_string(),
//!     "RA, Dec = 180.25975, -34.2095 = 12:01:02.340, -34:12:34.11"
//! );
//!
//! let d = spherical_distance(pos.ra(), pos.dec(), 180.0, -34.0);
//! assert!(d < 0.5);
//! ```

pub mod config;
pub mod distance;
pub mod equatorial;
pub mod error;
pub mod sexagesimal;
pub mod util;

pub use config::SexagesimalConfig;
pub use distance::{Operand, haversine, spherical_distance, spherical_distance_broadcast};
pub use equatorial::{EquatorialCoordinate, tokenize};
pub use error::CoordError;
pub use sexagesimal::{
    DecSign, Dms, Hms, MAX_DMS_DEGREES, deg_to_dms, deg_to_hms, dms_to_deg, format_dms,
    format_hms, hms_to_deg,
};
pub use util::{normalize_360, wrap_180};
