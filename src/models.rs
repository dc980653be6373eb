//! Frontend Models
//!
//! Data structures rendered by the card stack.

/// A single activity card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub id: u32,
    /// Emoji shown in the dark icon tile
    pub icon: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub date: &'static str,
}
