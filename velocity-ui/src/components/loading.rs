//! Loading Component

use leptos::*;

/// Inline spinner shown inside a button while a submit is pending
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4 mr-2" />
    }
}
