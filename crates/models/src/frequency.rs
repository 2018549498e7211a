use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The cadence at which a Task may be credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 3] = [Frequency::Daily, Frequency::Weekly, Frequency::Monthly];

    /// The wire form used in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Frequency::ALL
            .into_iter()
            .find(|freq| freq.as_str() == s)
            .ok_or_else(|| ModelError::InvalidFrequency {
                value: s.to_string(),
            })
    }
}

/// Whether `input` is one of `daily`, `weekly`, `monthly`.
pub fn is_frequency(input: &str) -> bool {
    input.parse::<Frequency>().is_ok()
}

pub fn frequency_from_string(input: &str) -> Result<Frequency, ModelError> {
    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_frequencies_are_accepted() {
        assert!(is_frequency("daily"));
        assert!(is_frequency("weekly"));
        assert!(is_frequency("monthly"));
    }

    #[test]
    fn unknown_frequencies_are_rejected() {
        assert!(!is_frequency("invalidFrequency"));
        assert!(!is_frequency("Daily"));
        assert!(!is_frequency(""));
    }

    #[test]
    fn from_string_round_trips_wire_form() {
        for freq in Frequency::ALL {
            assert_eq!(frequency_from_string(freq.as_str()), Ok(freq));
            assert_eq!(freq.to_string(), freq.as_str());
        }
    }

    #[test]
    fn from_string_names_the_bad_value() {
        let err = frequency_from_string("hourly").unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidFrequency {
                value: "hourly".to_string()
            }
        );
        assert_eq!(err.to_string(), "Invalid frequency: hourly");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_value(Frequency::Weekly).unwrap(),
            serde_json::json!("weekly")
        );
        let parsed: Frequency = serde_json::from_value(serde_json::json!("monthly")).unwrap();
        assert_eq!(parsed, Frequency::Monthly);
    }
}
