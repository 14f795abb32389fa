use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::{GeneratorError, Result};

pub const KIB: u64 = 1024;
pub const MIB: u64 = 1024 * KIB;
pub const GIB: u64 = 1024 * MIB;

/// A target file size in bytes, parsed from strings such as `500KB` or `1.5GB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SizeSpec(u64);

impl SizeSpec {
    pub fn bytes(self) -> u64 {
        self.0
    }

    pub fn megabytes(self) -> f64 {
        self.0 as f64 / MIB as f64
    }
}

impl FromStr for SizeSpec {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_size(s).map(SizeSpec)
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes ({:.1} MB)", self.0, self.megabytes())
    }
}

/// Parses a size string into a byte count.
///
/// Matching is case-insensitive and ignores surrounding whitespace. The
/// `KB`, `MB` and `GB` suffixes are binary multiples and accept a decimal
/// literal; a bare literal (optionally suffixed with `B`) must be an integer.
pub fn parse_size(input: &str) -> Result<u64> {
    let normalized = input.trim().to_ascii_uppercase();

    let (literal, multiplier) = if let Some(n) = normalized.strip_suffix("KB") {
        (n, KIB)
    } else if let Some(n) = normalized.strip_suffix("MB") {
        (n, MIB)
    } else if let Some(n) = normalized.strip_suffix("GB") {
        (n, GIB)
    } else if let Some(n) = normalized.strip_suffix('B') {
        (n, 1)
    } else {
        (normalized.as_str(), 1)
    };

    let literal = literal.trim();
    let invalid = || GeneratorError::InvalidSize(format!("'{}'", input));

    if multiplier == 1 {
        return literal.parse::<u64>().map_err(|_| invalid());
    }

    let value: f64 = literal.parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }

    let bytes = value * multiplier as f64;
    if bytes >= u64::MAX as f64 {
        return Err(invalid());
    }

    // Truncates toward zero, so "1.0000001KB" is 1024 bytes.
    Ok(bytes as u64)
}
