use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A frontend token that does not map to a known enum variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {field}: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// The two appointment kinds offered by the intake selector.
///
/// Wire tokens are the upper-case forms the frontend submits
/// (`CHECKUP` / `FOLLOWUP`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentType {
    Checkup,
    Followup,
}

impl AppointmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checkup => "CHECKUP",
            Self::Followup => "FOLLOWUP",
        }
    }
}

impl std::str::FromStr for AppointmentType {
    type Err = InvalidEnum;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CHECKUP" => Ok(Self::Checkup),
            "FOLLOWUP" => Ok(Self::Followup),
            _ => Err(InvalidEnum {
                field: "AppointmentType".into(),
                value: s.into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_via_str() {
        for ty in [AppointmentType::Checkup, AppointmentType::Followup] {
            assert_eq!(ty.as_str().parse::<AppointmentType>().unwrap(), ty);
        }
    }

    #[test]
    fn rejects_unknown_token() {
        let err = "URGENT".parse::<AppointmentType>().unwrap_err();
        assert_eq!(err.value, "URGENT");
    }

    #[test]
    fn serializes_as_wire_token() {
        let json = serde_json::to_string(&AppointmentType::Followup).unwrap();
        assert_eq!(json, "\"FOLLOWUP\"");
    }
}
