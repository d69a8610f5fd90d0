use js_sys::{Function, Reflect};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

use crate::core::agent::{AgentError, AgentResponse, PanelbeatingAgent, ResponseGenerator};
use crate::core::models::{AgentContext, EstimateDetails, Locale};

/// Global the hosting page can set to plug in its own dialogue logic.
const AGENT_GLOBAL: &str = "panelAgent";

fn describe(error: &JsValue) -> String {
    error
        .as_string()
        .or_else(|| {
            error
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{:?}", error))
}

// Plain objects, not `Map`s: page agents read the context with dot access.
fn encode<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, AgentError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| AgentError::Encode(e.to_string()))
}

/// Agent implemented in page script as `window.panelAgent`.
///
/// Only `generateAgentResponse` is required. The other hooks
/// (`createWelcomeMessages`, `summarizeEstimate`, `summarizeUpdateRequest`)
/// are optional and fall back to the built-in agent when missing or broken.
/// `initialContext` may be a plain object or a function returning one.
pub struct ScriptAgent {
    handle: JsValue,
    fallback: PanelbeatingAgent,
}

impl ScriptAgent {
    /// Returns the page's agent if one is installed.
    pub fn detect(fallback: PanelbeatingAgent) -> Option<Self> {
        let window = web_sys::window()?;
        let handle = Reflect::get(&window, &JsValue::from_str(AGENT_GLOBAL)).ok()?;
        if handle.is_undefined() || handle.is_null() {
            return None;
        }
        web_sys::console::log_1(&format!("[agent] using window.{}", AGENT_GLOBAL).into());
        Some(Self { handle, fallback })
    }

    fn call<T: DeserializeOwned>(&self, name: &str, args: &[JsValue]) -> Result<T, AgentError> {
        let function = self
            .property(name)?
            .dyn_into::<Function>()
            .map_err(|_| AgentError::Unavailable)?;

        let result = match args {
            [] => function.call0(&self.handle),
            [a] => function.call1(&self.handle, a),
            [a, b] => function.call2(&self.handle, a, b),
            [a, b, c, ..] => function.call3(&self.handle, a, b, c),
        }
        .map_err(|e| AgentError::Script(describe(&e)))?;

        serde_wasm_bindgen::from_value(result).map_err(|e| AgentError::InvalidResponse(e.to_string()))
    }

    fn property(&self, name: &str) -> Result<JsValue, AgentError> {
        Reflect::get(&self.handle, &JsValue::from_str(name))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
            .ok_or(AgentError::Unavailable)
    }

    fn initial_context_value(&self) -> Result<AgentContext, AgentError> {
        let value = self.property("initialContext")?;
        if value.is_function() {
            return self.call("initialContext", &[]);
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| AgentError::InvalidResponse(e.to_string()))
    }

    fn call_or_else<T: DeserializeOwned>(
        &self,
        name: &str,
        args: Result<Vec<JsValue>, AgentError>,
        fallback: impl FnOnce() -> T,
    ) -> T {
        self.or_fallback(name, args.and_then(|args| self.call(name, &args)), fallback)
    }

    fn or_fallback<T>(&self, name: &str, result: Result<T, AgentError>, fallback: impl FnOnce() -> T) -> T {
        match result {
            Ok(value) => value,
            Err(AgentError::Unavailable) => fallback(),
            Err(e) => {
                web_sys::console::warn_1(&format!("[agent] {} failed, using built-in: {}", name, e).into());
                fallback()
            }
        }
    }
}

impl ResponseGenerator for ScriptAgent {
    fn initial_context(&self) -> AgentContext {
        self.or_fallback("initialContext", self.initial_context_value(), || {
            self.fallback.initial_context()
        })
    }

    fn welcome_messages(&self, locale: Locale) -> Vec<String> {
        self.call_or_else(
            "createWelcomeMessages",
            Ok(vec![JsValue::from_str(locale.as_str())]),
            || self.fallback.welcome_messages(locale),
        )
    }

    fn starter_quick_replies(&self, locale: Locale) -> Vec<String> {
        self.fallback.starter_quick_replies(locale)
    }

    fn respond(&self, input: &str, context: &AgentContext) -> Result<AgentResponse, AgentError> {
        let context = encode(context)?;
        self.call("generateAgentResponse", &[JsValue::from_str(input), context])
    }

    fn summarize_estimate(&self, details: &EstimateDetails, locale: Locale) -> String {
        let args = encode(details).map(|details| vec![details, JsValue::from_str(locale.as_str())]);
        self.call_or_else("summarizeEstimate", args, || {
            self.fallback.summarize_estimate(details, locale)
        })
    }

    fn summarize_update_request(&self, identifier: &str, locale: Locale) -> String {
        let args = vec![JsValue::from_str(identifier), JsValue::from_str(locale.as_str())];
        self.call_or_else("summarizeUpdateRequest", Ok(args), || {
            self.fallback.summarize_update_request(identifier, locale)
        })
    }
}
