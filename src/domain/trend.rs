//! Trend classification over a window of daily mood averages

use crate::domain::mood::round_to_tenth;
use std::fmt;

/// Deltas within this band (inclusive) classify as stable.
const STABLE_DEADBAND: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

impl TrendDirection {
    pub fn emoji(&self) -> &'static str {
        match self {
            TrendDirection::Improving => "📈",
            TrendDirection::Declining => "📉",
            TrendDirection::Stable => "➖",
        }
    }

    /// Hex color for chart rendering.
    pub fn color(&self) -> &'static str {
        match self {
            TrendDirection::Improving => "#4CAF50",
            TrendDirection::Declining => "#F44336",
            TrendDirection::Stable => "#9E9E9E",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrendDirection::Improving => "improving",
            TrendDirection::Declining => "declining",
            TrendDirection::Stable => "stable",
        };
        write!(f, "{}", label)
    }
}

/// Direction plus the signed first-half to second-half delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodTrend {
    pub direction: TrendDirection,
    pub change: f64,
}

impl MoodTrend {
    fn stable() -> Self {
        MoodTrend {
            direction: TrendDirection::Stable,
            change: 0.0,
        }
    }
}

/// Classify the trend across a series of daily averages.
///
/// Days without data are dropped before splitting; fewer than two remaining
/// points classify as stable with zero change. The series splits into halves
/// with the first half taking the extra point on odd lengths, and the delta
/// (second half mean minus first half mean) is rounded to one decimal before
/// the deadband comparison, so a rounded delta of exactly 0.5 is stable.
pub fn analyze_mood_trend(values: &[Option<f64>]) -> MoodTrend {
    let valid: Vec<f64> = values.iter().filter_map(|v| *v).collect();
    if valid.len() < 2 {
        return MoodTrend::stable();
    }

    let mid = (valid.len() + 1) / 2;
    let change = round_to_tenth(mean(&valid[mid..]) - mean(&valid[..mid]));

    let direction = if change > STABLE_DEADBAND {
        TrendDirection::Improving
    } else if change < -STABLE_DEADBAND {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    MoodTrend { direction, change }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
