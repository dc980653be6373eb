//! Toggle Button Component
//!
//! "Show All" / "Hide" button under the stack with a rotating chevron.

use leptos::prelude::*;

use crate::context::use_card_stack;
use crate::motion::chevron_style;

#[component]
pub fn ToggleButton() -> impl IntoView {
    let ctx = use_card_stack();

    // Extra clearance while the placeholder panels hang below the summary
    let button_class = move || {
        let margin = if ctx.is_expanded() { "mt-6" } else { "mt-9" };
        format!(
            "{} mx-auto w-fit bg-white transition-colors hover:bg-gray-100 rounded-full shadow-md py-2 px-6 text-sm text-gray-600 flex items-center justify-center gap-2",
            margin,
        )
    };

    view! {
        <button type="button" class=button_class on:click=move |_| ctx.toggle()>
            <span>{move || ctx.state.get().button_label()}</span>
            <span class="inline-flex" style=move || chevron_style(ctx.state.get(), &ctx.motion)>
                <ChevronDown />
            </span>
        </button>
    }
}

#[component]
fn ChevronDown() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="w-4 h-4"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="m6 9 6 6 6-6" />
        </svg>
    }
}
