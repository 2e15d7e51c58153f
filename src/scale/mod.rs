//! Axis conversion strategies: how a data value becomes a plot coordinate.
//!
//! A chart picks one [`AxisScale`] when it is created and can switch it
//! later through its handle; nothing here is global.

pub mod log;

use serde::{Deserialize, Serialize};

pub use self::log::{LogAxisSample, decade_marks, from_plot_position, to_plot_position};

/// Forward/inverse mapping between data values and plot coordinates.
pub trait AxisConversion {
    fn to_plot(&self, value: f64) -> f64;
    fn from_plot(&self, position: f64) -> f64;
}

/// The y-axis modes offered by the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisScale {
    /// Identity mapping.
    #[default]
    Linear,
    /// Sign-preserving base-10 log, blended near zero.
    NegativeSafeLog,
}

impl AxisScale {
    pub const ALL: [AxisScale; 2] = [AxisScale::Linear, AxisScale::NegativeSafeLog];

    pub fn label(self) -> &'static str {
        match self {
            AxisScale::Linear => "Linear",
            AxisScale::NegativeSafeLog => "Log",
        }
    }

    pub fn is_log(self) -> bool {
        self == AxisScale::NegativeSafeLog
    }
}

impl AxisConversion for AxisScale {
    fn to_plot(&self, value: f64) -> f64 {
        match self {
            AxisScale::Linear => value,
            AxisScale::NegativeSafeLog => to_plot_position(value),
        }
    }

    fn from_plot(&self, position: f64) -> f64 {
        match self {
            AxisScale::Linear => position,
            AxisScale::NegativeSafeLog => from_plot_position(position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_is_identity() {
        let s = AxisScale::Linear;
        assert_eq!(s.to_plot(-1234.5), -1234.5);
        assert_eq!(s.from_plot(7.0), 7.0);
    }

    #[test]
    fn log_strategy_uses_negative_safe_transform() {
        let s = AxisScale::NegativeSafeLog;
        assert_eq!(s.to_plot(-1000.0), to_plot_position(-1000.0));
        assert_eq!(s.from_plot(2.0), from_plot_position(2.0));
    }

    #[test]
    fn scale_names_in_config() {
        let s: AxisScale = serde_json::from_str("\"negative_safe_log\"").unwrap();
        assert!(s.is_log());
    }
}
