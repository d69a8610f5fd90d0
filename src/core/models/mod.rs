pub mod context;
pub mod message;

pub use context::{AgentContext, EstimateDetails, Flow, Locale};
pub use message::{ChatMessage, FormKind, Sender};
