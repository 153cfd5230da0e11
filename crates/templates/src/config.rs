use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::acronyms::{validate_acronym, Acronyms};
use crate::error::Result;
use crate::namify::Namifier;

/// Comma separated acronyms merged on top of the configured ones.
pub const ACRONYMS_ENV: &str = "ASYNCGEN_ACRONYMS";

/// Naming configuration, usually read from a TOML file:
///
/// ```toml
/// acronyms = ["AMQP", "MQTT"]
/// builtin_acronyms = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Acronyms added to the table
    pub acronyms: Vec<String>,

    /// Start from the built-in table (false starts from an empty one)
    pub builtin_acronyms: bool,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            acronyms: Vec::new(),
            builtin_acronyms: true,
        }
    }
}

impl NamingConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        log::debug!(
            "Loaded naming config from {} ({} extra acronyms, builtin={})",
            path.display(),
            config.acronyms.len(),
            config.builtin_acronyms
        );
        Ok(config)
    }

    /// Merges acronyms from `ASYNCGEN_ACRONYMS`.
    pub fn with_env_overrides(self) -> Self {
        let raw = std::env::var(ACRONYMS_ENV).ok();
        self.with_extra_acronyms(parse_acronym_list(raw.as_deref()))
    }

    fn with_extra_acronyms(mut self, extra: Vec<String>) -> Self {
        if !extra.is_empty() {
            log::debug!("Adding {} acronyms from {ACRONYMS_ENV}", extra.len());
        }
        for acronym in extra {
            if !self.acronyms.contains(&acronym) {
                self.acronyms.push(acronym);
            }
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.acronyms
            .iter()
            .try_for_each(|acronym| validate_acronym(acronym))
    }

    /// Builds the acronym table this configuration describes.
    pub fn acronyms(&self) -> Result<Acronyms> {
        let base = if self.builtin_acronyms {
            Acronyms::builtin()
        } else {
            Arc::new(Acronyms::empty())
        };
        base.with(&self.acronyms)
    }

    pub fn namifier(&self) -> Result<Namifier> {
        Ok(Namifier::new(Arc::new(self.acronyms()?)))
    }
}

fn parse_acronym_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_ascii_uppercase)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NamingError;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_is_builtin_table() {
        let config = NamingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.acronyms().unwrap(), *Acronyms::builtin());
    }

    #[test]
    fn toml_adds_acronyms() {
        let config = NamingConfig::from_toml_str(r#"acronyms = ["AMQP", "MQTT"]"#).unwrap();
        assert!(config.builtin_acronyms);

        let namifier = config.namifier().unwrap();
        assert_eq!(namifier.namify("mqtt_broker_id"), "MQTTBrokerID");
    }

    #[test]
    fn toml_can_drop_builtin_table() {
        let config = NamingConfig::from_toml_str(
            r#"
acronyms = ["AMQP"]
builtin_acronyms = false
"#,
        )
        .unwrap();

        let acronyms = config.acronyms().unwrap();
        assert_eq!(acronyms.iter().collect::<Vec<_>>(), vec!["AMQP"]);
        assert_eq!(config.namifier().unwrap().namify("user_id"), "UserId");
    }

    #[test]
    fn invalid_acronym_is_rejected() {
        let err = NamingConfig::from_toml_str(r#"acronyms = ["Mqtt"]"#).unwrap_err();
        assert!(matches!(err, NamingError::InvalidAcronym(ref a) if a == "Mqtt"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = NamingConfig::from_toml_str("acronyms = 3").unwrap_err();
        assert!(matches!(err, NamingError::Toml(_)));
    }

    #[test]
    fn parse_acronym_list_trims_and_uppercases() {
        assert!(parse_acronym_list(None).is_empty());
        assert!(parse_acronym_list(Some("")).is_empty());
        assert!(parse_acronym_list(Some(" , ,")).is_empty());
        assert_eq!(
            parse_acronym_list(Some("amqp, MQTT ,,nats")),
            vec!["AMQP", "MQTT", "NATS"]
        );
    }

    #[test]
    fn extra_acronyms_are_deduplicated() {
        let config = NamingConfig {
            acronyms: vec!["AMQP".to_string()],
            ..Default::default()
        }
        .with_extra_acronyms(vec!["AMQP".to_string(), "NATS".to_string()]);
        assert_eq!(config.acronyms, vec!["AMQP", "NATS"]);
    }
}
