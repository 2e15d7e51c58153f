// ---------------------------------------------------------------------------
// Negative-safe base-10 logarithm
// ---------------------------------------------------------------------------

use std::f64::consts::LN_10;

/// Magnitudes below this are blended linearly instead of taking a plain log.
const BLEND_THRESHOLD: f64 = 10.0;

/// Slope of the blend `1 + 0.9 m` below the threshold.
const BLEND_SLOPE: f64 = (BLEND_THRESHOLD - 1.0) / BLEND_THRESHOLD;

/// Map a data value to its position on a negative-safe log axis.
///
/// Works on the magnitude and restores the sign afterwards. Magnitudes in
/// `[0, 10)` are lifted to `m + (10 - m) / 10 = 1 + 0.9 m`, which lands in
/// `[1, 10)`, so zero maps to `log10(1) = 0` and the curve meets the plain
/// log at 10. The blended branch goes through `ln_1p` so tiny magnitudes
/// keep their significant digits. NaN and infinities pass through without
/// panicking.
pub fn to_plot_position(value: f64) -> f64 {
    let sign = if value < 0.0 { -1.0 } else { 1.0 };
    let magnitude = value.abs();
    let position = if magnitude < BLEND_THRESHOLD {
        (BLEND_SLOPE * magnitude).ln_1p() / LN_10
    } else {
        magnitude.log10()
    };
    sign * position
}

/// Inverse of [`to_plot_position`].
///
/// Positions below 1 invert the blend as `10 (10^p - 1) / 9`, computed with
/// `exp_m1`.
pub fn from_plot_position(position: f64) -> f64 {
    let sign = if position < 0.0 { -1.0 } else { 1.0 };
    let p = position.abs();
    let magnitude = if p < 1.0 {
        (p * LN_10).exp_m1() / BLEND_SLOPE
    } else {
        10f64.powf(p)
    };
    sign * magnitude
}

// ---------------------------------------------------------------------------
// Axis samples
// ---------------------------------------------------------------------------

/// A data value paired with its plot coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogAxisSample {
    pub value: f64,
    pub position: f64,
}

impl LogAxisSample {
    pub fn at_value(value: f64) -> Self {
        Self {
            value,
            position: to_plot_position(value),
        }
    }
}

/// Grid samples at every whole plot position inside `[min, max]`.
///
/// Whole positions `k` are the values `±10^|k|` (and 0 at `k = 0`), so the
/// axis gets one line per decade on both sides of zero.
pub fn decade_marks(min: f64, max: f64) -> Vec<LogAxisSample> {
    if !min.is_finite() || !max.is_finite() || max < min {
        return Vec::new();
    }
    let first = min.ceil() as i64;
    let last = max.floor() as i64;
    (first..=last)
        .map(|k| {
            let value = match k {
                0 => 0.0,
                _ => (k.signum() as f64) * 10f64.powi(k.unsigned_abs() as i32),
            };
            LogAxisSample::at_value(value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Relative comparison, no absolute floor.
    fn close(a: f64, b: f64, rel: f64) -> bool {
        if a == b {
            return true;
        }
        (a - b).abs() <= rel * a.abs().max(b.abs())
    }

    /// Values spread across the interesting ranges, both signs.
    fn sweep() -> Vec<f64> {
        let mut values = vec![0.0, 1e-12, 1e-9, 1e-7, 2e-7, 0.5, 9.999999, 10.000001, 42.0];
        for exp in -3..=7 {
            for mantissa in ["1", "2.5", "3.7", "7.2"] {
                values.push(format!("{mantissa}e{exp}").parse().unwrap());
            }
        }
        let negatives: Vec<f64> = values.iter().map(|v| -v).collect();
        values.extend(negatives);
        values.retain(|v| v.abs() <= 1e7);
        values.sort_by(f64::total_cmp);
        values.dedup();
        values
    }

    #[test]
    fn round_trip_within_tolerance() {
        for v in sweep() {
            let back = from_plot_position(to_plot_position(v));
            assert!(close(back, v, 1e-9), "{v} came back as {back}");
        }
    }

    #[test]
    fn strictly_increasing() {
        let values = sweep();
        for pair in values.windows(2) {
            let (a, b) = (to_plot_position(pair[0]), to_plot_position(pair[1]));
            assert!(a < b, "{} -> {a} not below {} -> {b}", pair[0], pair[1]);
        }
    }

    #[test]
    fn zero_is_fixed() {
        assert_eq!(to_plot_position(0.0), 0.0);
        assert_eq!(from_plot_position(0.0), 0.0);
    }

    #[test]
    fn odd_symmetry_and_sign() {
        for v in sweep().into_iter().filter(|v| *v > 0.0) {
            let p = to_plot_position(v);
            assert!(p > 0.0);
            assert_eq!(to_plot_position(-v), -p);
        }
    }

    #[test]
    fn continuous_at_ten() {
        let at = to_plot_position(10.0);
        assert_eq!(at, 1.0);
        for eps in [1e-3, 1e-6, 1e-9] {
            assert!((to_plot_position(10.0 - eps) - at).abs() < eps);
            assert!((to_plot_position(10.0 + eps) - at).abs() < eps);
        }
        assert_eq!(from_plot_position(1.0), 10.0);
    }

    #[test]
    fn known_points() {
        assert!(close(to_plot_position(1000.0), 3.0, 1e-12));
        assert!(close(to_plot_position(-100.0), -2.0, 1e-12));
        // 5 blends to 5.5.
        assert!(close(to_plot_position(5.0), 5.5f64.log10(), 1e-12));
    }

    #[test]
    fn non_finite_inputs_do_not_panic() {
        assert!(to_plot_position(f64::NAN).is_nan());
        assert_eq!(to_plot_position(f64::INFINITY), f64::INFINITY);
        assert_eq!(to_plot_position(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(from_plot_position(f64::NAN).is_nan());
    }

    #[test]
    fn decade_marks_cover_both_signs() {
        let marks = decade_marks(-2.5, 3.2);
        let values: Vec<f64> = marks.iter().map(|m| m.value).collect();
        assert_eq!(values, [-100.0, -10.0, 0.0, 10.0, 100.0, 1000.0]);
        for m in &marks {
            assert!(close(from_plot_position(m.position), m.value, 1e-12));
        }
        assert!(decade_marks(0.2, 0.8).is_empty());
        assert!(decade_marks(f64::NAN, 1.0).is_empty());
    }

    #[test]
    fn tiny_magnitudes_keep_relative_precision() {
        for v in [1e-12, -1e-12, 1e-9, 1e-7, -2e-7, 3.3e-5] {
            let back = from_plot_position(to_plot_position(v));
            assert!(close(back, v, 1e-12), "{v} came back as {back}");
        }
        // Positions near zero are proportional to the value.
        let ratio = to_plot_position(2e-12) / to_plot_position(1e-12);
        assert!(close(ratio, 2.0, 1e-9), "{ratio}");
    }

    #[test]
    fn samples_agree_with_transform() {
        let s = LogAxisSample::at_value(-250.0);
        assert_eq!(s.position, to_plot_position(-250.0));
        assert!(close(from_plot_position(s.position), -250.0, 1e-12));
    }
}
