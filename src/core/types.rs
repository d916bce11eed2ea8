use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PricingError;

/// Plain-vanilla option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
}

impl OptionType {
    /// Returns +1.0 for calls and -1.0 for puts.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => f.write_str("Call"),
            Self::Put => f.write_str("Put"),
        }
    }
}

/// Direction of a holding: bought (long) or written (short).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    /// Holder of the option; pays the premium.
    #[default]
    Long,
    /// Writer of the option; receives the premium.
    Short,
}

impl PositionSide {
    /// Returns +1.0 for long and -1.0 for short.
    pub fn sign(self) -> f64 {
        match self {
            Self::Long => 1.0,
            Self::Short => -1.0,
        }
    }
}

impl fmt::Display for PositionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => f.write_str("Long"),
            Self::Short => f.write_str("Short"),
        }
    }
}

impl FromStr for PositionSide {
    type Err = PricingError;

    /// Parses `long` or `short`, ignoring case. Anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(Self::Long),
            "short" => Ok(Self::Short),
            other => Err(PricingError::invalid(format!(
                "position side must be 'long' or 'short', got '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_parses_known_tokens_case_insensitively() {
        assert_eq!("long".parse::<PositionSide>(), Ok(PositionSide::Long));
        assert_eq!(" Short ".parse::<PositionSide>(), Ok(PositionSide::Short));
        assert_eq!("LONG".parse::<PositionSide>(), Ok(PositionSide::Long));
    }

    #[test]
    fn side_rejects_unknown_tokens() {
        // Unknown sides used to be treated as short.
        for raw in ["", "buy", "sell", "longg"] {
            assert!(matches!(
                raw.parse::<PositionSide>(),
                Err(PricingError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn labels_are_title_case() {
        assert_eq!(PositionSide::Long.to_string(), "Long");
        assert_eq!(PositionSide::Short.to_string(), "Short");
        assert_eq!(OptionType::Call.to_string(), "Call");
        assert_eq!(OptionType::Put.to_string(), "Put");
    }

    #[test]
    fn serde_uses_lowercase_tokens() {
        let json = serde_json::to_string(&PositionSide::Short).unwrap();
        assert_eq!(json, "\"short\"");
        let parsed: OptionType = serde_json::from_str("\"put\"").unwrap();
        assert_eq!(parsed, OptionType::Put);
        assert!(serde_json::from_str::<PositionSide>("\"sideways\"").is_err());
    }
}
