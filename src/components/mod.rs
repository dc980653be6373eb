//! UI Components
//!
//! Leptos components making up the card stack.

mod activity_row;
mod card_stack;
mod stack_placeholders;
mod toggle_button;

pub use activity_row::{ActivityRow, CARD_CLASS};
pub use card_stack::CardStack;
pub use stack_placeholders::StackPlaceholders;
pub use toggle_button::ToggleButton;
