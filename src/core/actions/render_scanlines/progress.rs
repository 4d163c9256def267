use std::fmt;
use std::time::Duration;

const METRIC_UNITS: [&str; 7] = ["", "k", "M", "G", "T", "P", "E"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThroughputUnit {
    PerSecond,
    PerMinute,
}

impl ThroughputUnit {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PerSecond => "second",
            Self::PerMinute => "minute",
        }
    }
}

/// Pixels rendered per unit of time, floored to a whole number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throughput {
    pub value: f64,
    pub unit: ThroughputUnit,
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match metric_units(self.value) {
            Some(value) => write!(f, "{} pixels/{}", value, self.unit.label()),
            None => write!(f, "{} pixels/{}", self.value, self.unit.label()),
        }
    }
}

/// Computes the throughput for `pixels` written in `elapsed`.
///
/// Per second is preferred. When that figure cannot be shown (not finite, or
/// below one pixel per second) the per minute figure is used instead; if that
/// is not finite either the value is reported as zero.
#[must_use]
pub fn throughput(pixels: u64, elapsed: Duration) -> Throughput {
    let seconds = elapsed.as_secs_f64();
    let per_second = (pixels as f64 / seconds).floor();

    if metric_units(per_second).is_some() {
        return Throughput {
            value: per_second,
            unit: ThroughputUnit::PerSecond,
        };
    }

    let per_minute = (60.0 * pixels as f64 / seconds).floor();

    Throughput {
        value: if per_minute.is_finite() { per_minute } else { 0.0 },
        unit: ThroughputUnit::PerMinute,
    }
}

/// Formats `value` with two decimals and a metric suffix, e.g. `2.50k`.
///
/// Returns `None` for values that have no meaningful rendering: non-finite,
/// zero or negative.
#[must_use]
pub fn metric_units(value: f64) -> Option<String> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }

    let magnitude = ((1.0 + value.log10()) / 3.0).ceil().clamp(1.0, METRIC_UNITS.len() as f64);
    let index = magnitude as usize - 1;
    let scaled = value / 10f64.powi(3 * index as i32);

    Some(format!("{:.2}{}", scaled, METRIC_UNITS[index]))
}

/// Snapshot of an in-flight render, sent at most once per update interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressReport {
    pub elapsed: Duration,
    pub rows_written: u32,
    pub pixels_written: u64,
    pub throughput: Throughput,
}

impl ProgressReport {
    #[must_use]
    pub fn new(elapsed: Duration, rows_written: u32, pixels_written: u64) -> Self {
        Self {
            elapsed,
            rows_written,
            pixels_written,
            throughput: throughput(pixels_written, elapsed),
        }
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}s, {}", self.elapsed_seconds(), self.throughput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput_per_second() {
        let result = throughput(10_000, Duration::from_millis(500));

        assert_eq!(result.value, 20_000.0);
        assert_eq!(result.unit, ThroughputUnit::PerSecond);
    }

    #[test]
    fn test_throughput_is_floored() {
        let result = throughput(10, Duration::from_secs(3));

        assert_eq!(result.value, 3.0);
        assert_eq!(result.unit, ThroughputUnit::PerSecond);
    }

    #[test]
    fn test_zero_elapsed_with_no_pixels_falls_back_to_minutes() {
        // 0 / 0 is not a number
        let result = throughput(0, Duration::ZERO);

        assert_eq!(result.unit, ThroughputUnit::PerMinute);
        assert_eq!(result.unit.label(), "minute");
        assert_eq!(result.value, 0.0);
    }

    #[test]
    fn test_zero_elapsed_with_pixels_falls_back_to_minutes() {
        let result = throughput(640, Duration::ZERO);

        assert_eq!(result.unit, ThroughputUnit::PerMinute);
        assert!(result.value.is_finite());
    }

    #[test]
    fn test_slow_render_reports_per_minute() {
        let result = throughput(30, Duration::from_secs(60));

        assert_eq!(result.unit, ThroughputUnit::PerMinute);
        assert_eq!(result.value, 30.0);
    }

    #[test]
    fn test_metric_units() {
        assert_eq!(metric_units(5.0).as_deref(), Some("5.00"));
        assert_eq!(metric_units(2_500.0).as_deref(), Some("2.50k"));
        assert_eq!(metric_units(3_000_000.0).as_deref(), Some("3.00M"));
        assert_eq!(metric_units(4.2e9).as_deref(), Some("4.20G"));
    }

    #[test]
    fn test_metric_units_rejects_unrenderable_values() {
        assert_eq!(metric_units(0.0), None);
        assert_eq!(metric_units(-3.0), None);
        assert_eq!(metric_units(f64::NAN), None);
        assert_eq!(metric_units(f64::INFINITY), None);
    }

    #[test]
    fn test_progress_report_display() {
        let report = ProgressReport::new(Duration::from_millis(1_500), 10, 3_000);

        assert_eq!(report.to_string(), "1.5s, 2.00k pixels/second");
        assert_eq!(report.elapsed_seconds(), 1.5);
    }
}
