// 🌍 Region Codes - closed set of supported regions

use crate::error::LessonError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionCode {
    /// United States
    US,
    /// India
    IN,
    /// Kenya
    KE,
}

impl RegionCode {
    pub const ALL: [RegionCode; 3] = [RegionCode::US, RegionCode::IN, RegionCode::KE];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionCode::US => "US",
            RegionCode::IN => "IN",
            RegionCode::KE => "KE",
        }
    }
}

impl std::fmt::Display for RegionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionCode {
    type Err = LessonError;

    /// Exact match only; "us" or " US" are rejected like any other unknown code
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "US" => Ok(RegionCode::US),
            "IN" => Ok(RegionCode::IN),
            "KE" => Ok(RegionCode::KE),
            other => Err(LessonError::UnrecognizedRegion(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        for code in RegionCode::ALL {
            assert_eq!(code.as_str().parse::<RegionCode>(), Ok(code));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_lowercase() {
        assert_eq!(
            "FR".parse::<RegionCode>(),
            Err(LessonError::UnrecognizedRegion("FR".to_string()))
        );
        assert!("us".parse::<RegionCode>().is_err());
        assert!("".parse::<RegionCode>().is_err());
    }

    #[test]
    fn test_serde_uses_plain_codes() {
        let json = serde_json::to_string(&RegionCode::KE).unwrap();
        assert_eq!(json, "\"KE\"");

        let parsed: RegionCode = serde_json::from_str("\"IN\"").unwrap();
        assert_eq!(parsed, RegionCode::IN);

        assert!(serde_json::from_str::<RegionCode>("\"ZZ\"").is_err());
    }
}
