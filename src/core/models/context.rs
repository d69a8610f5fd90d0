use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Af,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Af => "af",
        }
    }

    /// Picks the English or Afrikaans variant of a piece of copy.
    pub fn pick<T>(self, en: T, af: T) -> T {
        match self {
            Locale::En => en,
            Locale::Af => af,
        }
    }
}

/// Which conversation the agent believes it is in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    #[default]
    Idle,
    Estimate,
    Update,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EstimateDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_description: Option<String>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AgentContext {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub flow: Flow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<EstimateDetails>,
    /// Keys owned by a page-supplied agent, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AgentContext {
    pub fn with_flow(mut self, flow: Flow) -> Self {
        self.flow = flow;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_uses_the_wire_shape_of_the_web_agent() {
        let context = AgentContext {
            locale: Locale::Af,
            flow: Flow::Estimate,
            estimate: Some(EstimateDetails {
                car_model: Some("VW Polo".into()),
                photo_urls: vec!["a.jpg".into()],
                ..Default::default()
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&context).unwrap();
        assert_eq!(value["locale"], "af");
        assert_eq!(value["flow"], "estimate");
        assert_eq!(value["estimate"]["carModel"], "VW Polo");
        assert_eq!(value["estimate"]["photoUrls"][0], "a.jpg");
        assert!(value["estimate"].get("year").is_none());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let context: AgentContext = serde_json::from_str(r#"{"locale":"af"}"#).unwrap();
        assert_eq!(context.locale, Locale::Af);
        assert_eq!(context.flow, Flow::Idle);
        assert!(context.estimate.is_none());
    }

    #[test]
    fn agent_owned_keys_survive_a_round_trip() {
        let context: AgentContext = serde_json::from_str(
            r#"{"locale":"en","flow":"update","attempts":2,"lastIntent":"status"}"#,
        )
        .unwrap();
        assert_eq!(context.flow, Flow::Update);
        assert_eq!(context.extra.len(), 2);

        let next = context.with_flow(Flow::Idle);
        let back = serde_json::to_value(&next).unwrap();
        assert_eq!(back["flow"], "idle");
        assert_eq!(back["attempts"], 2);
        assert_eq!(back["lastIntent"], "status");
        assert!(back.get("extra").is_none());
    }

    #[test]
    fn unknown_flow_is_rejected() {
        let parsed = serde_json::from_str::<AgentContext>(r#"{"flow":"booking"}"#);
        assert!(parsed.is_err());
    }
}
