//! Card Stack Context
//!
//! Toggle state and motion settings shared with the stack's child
//! components via Leptos Context API.

use leptos::logging::log;
use leptos::prelude::*;

use crate::config::MotionConfig;
use crate::models::Activity;
use crate::stack::{StackLayout, StackState};

#[derive(Clone, Copy)]
pub struct CardStackContext {
    /// Expand/collapse state - read
    pub state: ReadSignal<StackState>,
    /// Expand/collapse state - write
    set_state: WriteSignal<StackState>,
    pub activities: &'static [Activity],
    pub motion: MotionConfig,
}

impl CardStackContext {
    /// Fresh context; every mount starts collapsed
    pub fn new(activities: &'static [Activity], motion: MotionConfig) -> Self {
        let (state, set_state) = signal(StackState::default());
        Self { state, set_state, activities, motion }
    }

    pub fn is_expanded(&self) -> bool {
        self.state.get().is_expanded()
    }

    /// What is visible in the current state (tracked)
    pub fn layout(&self) -> Option<StackLayout<'static>> {
        StackLayout::build(self.activities, self.state.get())
    }

    /// Flip between collapsed and expanded
    pub fn toggle(&self) {
        self.set_state.update(|s| *s = s.toggled());
        log!("[CARD_STACK] toggled to {:?}", self.state.get_untracked());
    }
}

/// Get the card stack context
pub fn use_card_stack() -> CardStackContext {
    expect_context::<CardStackContext>()
}
