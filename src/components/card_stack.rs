//! Card Stack Component
//!
//! Summary row with a collapsible list of the remaining activities.
//! Collapsed, decorative panels suggest hidden cards; expanded, the rows
//! slide in one after another and slide back out before unmounting.

use leptos::prelude::*;
use leptos_presence::create_presence;

use crate::components::{ActivityRow, StackPlaceholders, ToggleButton, CARD_CLASS};
use crate::config::MotionConfig;
use crate::context::CardStackContext;
use crate::models::Activity;
use crate::motion::{container_style, exit_duration, row_style};
use crate::stack::{StackLayout, StackState};

#[component]
pub fn CardStack(activities: &'static [Activity]) -> impl IntoView {
    let motion = use_context::<MotionConfig>().unwrap_or_default();
    let ctx = CardStackContext::new(activities, motion);
    provide_context(ctx);

    // Everything that can ever be on screen: the summary plus all rows
    let (summary, rest) = match StackLayout::build(activities, StackState::Expanded) {
        Some(layout) => (Some(*layout.summary), layout.rows),
        None => (None, &[][..]),
    };

    let expanded = Signal::derive(move || ctx.is_expanded());
    // Region is collapsed on mount, so there is never an initial entrance
    let presence = create_presence(expanded, exit_duration(rest.len(), &motion), false);

    let rows = move || {
        view! {
            <For
                each=move || rest.iter().copied().enumerate()
                key=|(_, activity)| activity.id
                children=move |(index, activity)| {
                    let class = if index + 1 < rest.len() {
                        format!("{} mb-2", CARD_CLASS)
                    } else {
                        CARD_CLASS.to_string()
                    };
                    view! {
                        <div
                            class=class
                            style=move || row_style(index, presence.is_exiting(), presence.animates_enter(), &motion)
                        >
                            <ActivityRow activity=activity />
                        </div>
                    }
                }
            />
        }
    };

    view! {
        <div class="w-full max-w-md mx-auto p-4">
            <div class="relative">
                <StackPlaceholders />

                <div class="rounded-xl overflow-hidden z-20 relative">
                    {summary.map(|activity| view! {
                        <div class=format!("{} mb-2", CARD_CLASS)>
                            <ActivityRow activity=activity />
                        </div>
                    })}

                    <Show when=move || presence.is_mounted()>
                        <div
                            class="card-stack-expanded"
                            style=move || container_style(presence.is_exiting(), presence.animates_enter(), &motion)
                        >
                            <div class="card-stack-expanded-inner">{rows}</div>
                        </div>
                    </Show>
                </div>

                <ToggleButton />
            </div>
        </div>
    }
}
