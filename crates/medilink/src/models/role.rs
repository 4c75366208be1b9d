use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::errors::ConfigurationError;

/// The behavioral mode of the assistant. Selects the system prompt, the model and the
/// expected shape of the reply.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
    Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum AgentRole {
    Triage,
    Recovery,
    Billing,
}

impl AgentRole {
    /// Resolve a role from its wire name, e.g. `"TRIAGE"`. Unknown names are a
    /// configuration error and never fall back to another role.
    pub fn from_name(name: &str) -> Result<Self, ConfigurationError> {
        AgentRole::from_str(name.trim())
            .map_err(|_| ConfigurationError::UnknownRole(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_name() {
        assert_eq!(AgentRole::from_name("TRIAGE").unwrap(), AgentRole::Triage);
        assert_eq!(AgentRole::from_name("recovery").unwrap(), AgentRole::Recovery);
        assert_eq!(AgentRole::from_name(" Billing ").unwrap(), AgentRole::Billing);
    }

    #[test]
    fn test_from_name_unknown() {
        let err = AgentRole::from_name("DENTAL").unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownRole("DENTAL".to_string()));
        assert!(AgentRole::from_name("").is_err());
    }

    #[test]
    fn test_wire_names_round_trip() {
        for role in AgentRole::iter() {
            assert_eq!(AgentRole::from_name(&role.to_string()).unwrap(), role);
            let json = serde_json::to_value(role).unwrap();
            assert_eq!(json.as_str().unwrap(), role.as_ref());
        }
    }
}
