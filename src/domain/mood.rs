//! Mood vocabulary and the numeric mood scale

use std::fmt;
use std::str::FromStr;

/// Mood labels attached to journal entries.
///
/// The vocabulary is closed; anything outside it is carried as
/// [`MoodLabel::Unrecognized`] and maps to the neutral value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodLabel {
    Sad,
    Anxious,
    Neutral,
    Calm,
    Happy,
    Excited,
    /// A label outside the known vocabulary (including the empty string).
    Unrecognized(String),
}

impl MoodLabel {
    /// Parse any label, falling back to [`MoodLabel::Unrecognized`].
    ///
    /// Never fails; lookup is case-insensitive. Extraction from hand-edited
    /// notes goes through this path.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "sad" => MoodLabel::Sad,
            "anxious" => MoodLabel::Anxious,
            "neutral" => MoodLabel::Neutral,
            "calm" => MoodLabel::Calm,
            "happy" => MoodLabel::Happy,
            "excited" => MoodLabel::Excited,
            _ => MoodLabel::Unrecognized(input.trim().to_string()),
        }
    }

    /// Numeric value on the 1-10 scale used for averaging.
    ///
    /// The table is curated, not uniform: sad=2, anxious=3, neutral=5,
    /// calm=7, happy=8, excited=9. Unrecognized labels count as neutral (5).
    pub fn value(&self) -> u8 {
        match self {
            MoodLabel::Sad => 2,
            MoodLabel::Anxious => 3,
            MoodLabel::Neutral => 5,
            MoodLabel::Calm => 7,
            MoodLabel::Happy => 8,
            MoodLabel::Excited => 9,
            MoodLabel::Unrecognized(_) => 5,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MoodLabel::Sad => "sad",
            MoodLabel::Anxious => "anxious",
            MoodLabel::Neutral => "neutral",
            MoodLabel::Calm => "calm",
            MoodLabel::Happy => "happy",
            MoodLabel::Excited => "excited",
            MoodLabel::Unrecognized(label) => label,
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MoodLabel {
    /// The rejected label, for wrapping into an error by the caller.
    type Err = String;

    /// Strict parse accepting only the known vocabulary.
    ///
    /// The CLI validates user input through this; unknown labels are
    /// rejected rather than recorded as neutral.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match MoodLabel::parse(s) {
            MoodLabel::Unrecognized(label) => Err(label),
            known => Ok(known),
        }
    }
}

/// Round to one decimal place, half away from zero.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
