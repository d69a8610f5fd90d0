pub mod use_conversation;

pub use use_conversation::*;
