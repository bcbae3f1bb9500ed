//! Rendering options for sexagesimal strings.

/// Configurable parameters for sexagesimal rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SexagesimalConfig {
    /// Separator placed between fields. Default: `":"`.
    pub delim: String,
    /// Decimal places on RA seconds. Default: 3.
    pub ra_sec_digits: usize,
    /// Decimal places on Dec arc-seconds. Default: 2.
    pub dec_sec_digits: usize,
}

impl Default for SexagesimalConfig {
    fn default() -> Self {
        Self {
            delim: ":".to_string(),
            ra_sec_digits: 3,
            dec_sec_digits: 2,
        }
    }
}

impl SexagesimalConfig {
    /// Default precision with a custom separator.
    pub fn with_delim(delim: impl Into<String>) -> Self {
        Self {
            delim: delim.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = SexagesimalConfig::default();
        assert_eq!(c.delim, ":");
        assert_eq!(c.ra_sec_digits, 3);
        assert_eq!(c.dec_sec_digits, 2);
    }

    #[test]
    fn with_delim_keeps_precision() {
        let c = SexagesimalConfig::with_delim(" ");
        assert_eq!(c.delim, " ");
        assert_eq!(c.ra_sec_digits, 3);
    }
}
