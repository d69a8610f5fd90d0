use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("no external agent is installed on the page")]
    Unavailable,
    #[error("external agent threw: {0}")]
    Script(String),
    #[error("could not pass the conversation context to the agent: {0}")]
    Encode(String),
    #[error("agent returned a malformed response: {0}")]
    InvalidResponse(String),
}
