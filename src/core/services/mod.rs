pub mod agent_bridge;
pub mod scroll;

pub use agent_bridge::*;
pub use scroll::*;
