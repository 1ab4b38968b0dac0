use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

lazy_static! {
    /// A standalone spot length inside free text, e.g. ":30" or "60 sec"
    static ref DURATION_TOKEN_REGEX: Regex = Regex::new(r"\b(15|30|60)\b").unwrap();
}

/// Length of a radio spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpotDuration {
    Fifteen,
    #[default]
    Thirty,
    Sixty,
}

/// Conversational word budget for a spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordTargets {
    pub min: usize,
    pub max: usize,
}

impl SpotDuration {
    pub fn seconds(self) -> u32 {
        match self {
            SpotDuration::Fifteen => 15,
            SpotDuration::Thirty => 30,
            SpotDuration::Sixty => 60,
        }
    }

    pub fn from_seconds(seconds: u32) -> Option<Self> {
        match seconds {
            15 => Some(SpotDuration::Fifteen),
            30 => Some(SpotDuration::Thirty),
            60 => Some(SpotDuration::Sixty),
            _ => None,
        }
    }

    pub fn word_targets(self) -> WordTargets {
        match self {
            SpotDuration::Fifteen => WordTargets { min: 35, max: 50 },
            SpotDuration::Thirty => WordTargets { min: 70, max: 90 },
            SpotDuration::Sixty => WordTargets { min: 140, max: 170 },
        }
    }

    /// Pick a duration from loosely typed request fields
    ///
    /// The first candidate that is present and not null decides:
    /// - 15, 30, 60 as a number or numeric string → that duration
    /// - a string containing a standalone 15/30/60 (":30") → the first one
    /// - anything else → 30
    pub fn pick(candidates: &[Option<&Value>]) -> Self {
        let selector = candidates
            .iter()
            .flatten()
            .find(|value| !value.is_null());

        match selector {
            Some(value) => Self::from_value(value).unwrap_or_default(),
            None => SpotDuration::default(),
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().and_then(Self::from_exact),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(Self::from_exact)
                .or_else(|| Self::from_text(s)),
            _ => None,
        }
    }

    fn from_exact(seconds: f64) -> Option<Self> {
        if seconds.fract() != 0.0 || !(0.0..=60.0).contains(&seconds) {
            return None;
        }
        Self::from_seconds(seconds as u32)
    }

    fn from_text(text: &str) -> Option<Self> {
        DURATION_TOKEN_REGEX
            .captures(text)
            .and_then(|caps| caps[1].parse::<u32>().ok())
            .and_then(Self::from_seconds)
    }
}
