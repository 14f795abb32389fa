use crate::image_pipeline::sizing::MIB;

/// Requested vs. written file size. Diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    pub target_bytes: u64,
    pub actual_bytes: u64,
}

impl SizeReport {
    pub fn deviation_bytes(&self) -> i128 {
        self.actual_bytes as i128 - self.target_bytes as i128
    }

    /// Deviation relative to the target, in percent. Zero when the target is zero.
    pub fn deviation_percent(&self) -> f64 {
        if self.target_bytes == 0 {
            return 0.0;
        }
        self.deviation_bytes() as f64 / self.target_bytes as f64 * 100.0
    }

    pub fn actual_megabytes(&self) -> f64 {
        self.actual_bytes as f64 / MIB as f64
    }

    pub fn deviation_megabytes(&self) -> f64 {
        self.deviation_bytes() as f64 / MIB as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deviation() {
        let report = SizeReport {
            target_bytes: 1000,
            actual_bytes: 950,
        };
        assert_eq!(report.deviation_bytes(), -50);
        assert!((report.deviation_percent() + 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_target() {
        let report = SizeReport {
            target_bytes: 0,
            actual_bytes: 131_072,
        };
        assert_eq!(report.deviation_bytes(), 131_072);
        assert_eq!(report.deviation_percent(), 0.0);
        assert!((report.actual_megabytes() - 0.125).abs() < 1e-12);
    }
}
