//! Stack Placeholders Component
//!
//! Decorative panels peeking out behind the summary row while collapsed.

use leptos::prelude::*;

use crate::context::use_card_stack;
use crate::motion::placeholder_style;
use crate::stack::PLACEHOLDER_PANELS;

#[component]
pub fn StackPlaceholders() -> impl IntoView {
    let ctx = use_card_stack();
    let placeholder_count = move || ctx.layout().map_or(0, |layout| layout.placeholder_count);

    view! {
        <Show when=move || { placeholder_count() > 0 }>
            {move || PLACEHOLDER_PANELS
                .into_iter()
                .take(placeholder_count())
                .map(|panel| {
                    view! {
                        <div
                            aria-hidden="true"
                            class=format!(
                                "card-stack-placeholder absolute h-16 bg-white rounded-xl shadow-md {}",
                                panel.class,
                            )
                            style=placeholder_style(&panel, &ctx.motion)
                        ></div>
                    }
                })
                .collect_view()}
        </Show>
    }
}
