//! Activity Row Component
//!
//! Contents of one activity card: icon tile, title, location and date.

use leptos::prelude::*;

use crate::models::Activity;

/// White rounded card shared by the summary and the expanded rows
pub const CARD_CLASS: &str = "p-4 flex items-center justify-between bg-white rounded-xl shadow-md";

/// Card contents; the caller supplies the card container
#[component]
pub fn ActivityRow(activity: Activity) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <div class="w-10 h-10 bg-gray-900 rounded-lg flex items-center justify-center text-xl">
                {activity.icon}
            </div>
            <div>
                <h3 class="font-semibold text-gray-900">{activity.title}</h3>
                <p class="text-sm text-gray-500">{activity.location}</p>
            </div>
        </div>
        <span class="text-sm text-gray-500">{activity.date}</span>
    }
}
