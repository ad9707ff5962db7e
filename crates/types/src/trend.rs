/// Richtung zwischen zwei aufeinanderfolgenden Schlusskursen
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Current close above previous
    Up,
    /// Current close below previous
    Down,
    /// Unchanged
    Neutral,
}

impl Trend {
    /// Classifies the move from `previous` to `current`.
    #[must_use]
    pub fn between(current: f64, previous: f64) -> Self {
        if current > previous {
            Trend::Up
        } else if current < previous {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }

    /// Lowercase string form as used in serving-layer payloads.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Neutral => "neutral",
        }
    }
}
