//! Card Stack Frontend App
//!
//! Page shell centering the card stack on a light gray background.

use leptos::prelude::*;

use crate::components::CardStack;
use crate::config::MotionConfig;
use crate::data::ACTIVITIES;

#[component]
pub fn App(motion: MotionConfig) -> impl IntoView {
    // Provide motion settings to the stack
    provide_context(motion);

    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center p-4">
            <CardStack activities=ACTIVITIES />
        </div>
    }
}
