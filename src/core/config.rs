use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_SITE_CONFIG: &str = include_str!("../../site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Business profile shown on the page and quoted by the assistant.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub business_name: String,
    pub assistant_name: String,
    pub established: String,
    pub region: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub claims_email: String,
    pub weekday_hours: String,
    pub trust_points: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            business_name: "De Jongh's Panelbeating Centre".to_string(),
            assistant_name: "Lourens".to_string(),
            established: "1989".to_string(),
            region: "Helderberg".to_string(),
            address: "12 Mynhardt Street, Strand, Western Cape".to_string(),
            phone: "021 853 1234".to_string(),
            email: "bookings@dejonghs-panel.co.za".to_string(),
            claims_email: "claims@dejonghs-panel.co.za".to_string(),
            weekday_hours: "7:30 - 17:00".to_string(),
            trust_points: vec![
                "Manufacturer-approved repair techniques and lifetime workmanship guarantees.".to_string(),
                "Insurance-friendly estimates with photo documentation and same-day submission.".to_string(),
                "Courtesy car arrangements and towing partners for major collisions.".to_string(),
                "Colour-matched spray booth finishes baked to OEM durability.".to_string(),
            ],
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parses the profile bundled with the site.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_SITE_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_profile_parses() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(config.phone, "021 853 1234");
        assert_eq!(config.trust_points.len(), 4);
    }

    #[test]
    fn partial_profile_keeps_defaults_for_missing_keys() {
        let config = SiteConfig::from_json(r#"{"phone":"021 000 0000"}"#).unwrap();
        assert_eq!(config.phone, "021 000 0000");
        assert_eq!(config.assistant_name, "Lourens");
    }

    #[test]
    fn malformed_profile_is_an_error() {
        let err = SiteConfig::from_json("{ phone: 1 }").unwrap_err();
        assert!(err.to_string().starts_with("invalid site configuration"));
    }
}
