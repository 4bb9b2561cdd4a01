/// One disk-utilization reading taken at the start of a pass, paired with
/// the configured threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskSample {
    /// Percentage (0-100) of the catalog's root filesystem in use.
    pub percent_used: f64,
    /// Utilization at or above which removals are allowed.
    pub threshold: f64,
}

impl DiskSample {
    /// Whether the disk is under enough pressure to allow removals.
    pub fn is_full(&self) -> bool {
        self.percent_used >= self.threshold
    }

    /// A sample from a failed probe: reads as "not under pressure" so a
    /// probe failure can never itself trigger a deletion.
    pub fn fail_open(threshold: f64) -> Self {
        Self {
            percent_used: 0.0,
            threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_at_exact_threshold() {
        let sample = DiskSample {
            percent_used: 90.0,
            threshold: 90.0,
        };
        assert!(sample.is_full());
    }

    #[test]
    fn not_full_below_threshold() {
        let sample = DiskSample {
            percent_used: 89.9,
            threshold: 90.0,
        };
        assert!(!sample.is_full());
    }

    #[test]
    fn fail_open_is_never_full() {
        assert!(!DiskSample::fail_open(0.5).is_full());
    }
}
