pub mod chat_bubble;
pub mod chat_input;
pub mod chat_panel;
pub mod estimate_form;
pub mod message_list;
pub mod quick_reply_button;
pub mod update_form;

pub use chat_bubble::*;
pub use chat_input::*;
pub use chat_panel::*;
pub use estimate_form::*;
pub use message_list::*;
pub use quick_reply_button::*;
pub use update_form::*;
