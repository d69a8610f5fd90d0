pub mod components;
pub mod dispatcher;
pub mod forms;
pub mod hooks;
pub mod store;

pub use components::*;
pub use hooks::*;
