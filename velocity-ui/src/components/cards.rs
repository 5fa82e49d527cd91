//! Content Cards
//!
//! Presentational pieces rendered from `crate::content` data.

use leptos::*;

use crate::content::{ComparisonRow, FeatureItem, PricingTier};
use crate::waitlist::Plan;

#[component]
pub fn FeatureCard(feature: &'static FeatureItem) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-gray-500/20 p-6 hover:border-indigo-500/50 transition-colors">
            <div class="text-3xl mb-4">{feature.icon}</div>
            <h3 class="text-lg font-semibold mb-2">{feature.title}</h3>
            <p class="text-gray-400 text-sm leading-relaxed">{feature.description}</p>
        </div>
    }
}

/// One pricing tier with its "Join Waitlist" button
#[component]
pub fn PricingCard(tier: &'static PricingTier, on_select: Callback<Plan>) -> impl IntoView {
    let plan = tier.plan;
    let card_class = if tier.highlight {
        "relative rounded-2xl p-8 border-2 border-indigo-500 shadow-xl shadow-indigo-500/10"
    } else {
        "relative rounded-2xl p-8 border border-gray-500/20"
    };
    let button_class = if tier.highlight {
        "w-full py-3 rounded-lg font-medium bg-indigo-600 hover:bg-indigo-700 text-white"
    } else {
        "w-full py-3 rounded-lg font-medium border border-gray-500/40 hover:border-indigo-500"
    };

    view! {
        <div class=card_class>
            <Show when=move || tier.highlight>
                <span class="absolute -top-3 left-1/2 -translate-x-1/2 px-3 py-1 rounded-full bg-indigo-600 text-white text-xs font-semibold">
                    "Most Popular"
                </span>
            </Show>
            <h3 class="text-xl font-semibold">{tier.name}</h3>
            <p class="text-gray-400 text-sm mt-1">{tier.subtitle}</p>
            <div class="my-6">
                <span class="text-4xl font-bold">{tier.price}</span>
                <span class="text-gray-400">"/mo"</span>
            </div>
            <ul class="space-y-3 mb-6 text-sm">
                {tier
                    .features
                    .iter()
                    .map(|feature| view! {
                        <li class="flex items-center space-x-2">
                            <span class="text-green-500">"✓"</span>
                            <span>{*feature}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
            <p class="text-xs text-gray-400 mb-6">
                "Replaces: " <span class="font-medium">{tier.replaces}</span>
            </p>
            <button class=button_class on:click=move |_| on_select.call(plan)>
                "Join Waitlist"
            </button>
        </div>
    }
}

/// Table row in the competitor comparison
#[component]
pub fn ComparisonRowView(row: &'static ComparisonRow) -> impl IntoView {
    let competitor_class = if row.competitor_bad {
        "py-4 px-4 text-red-400"
    } else {
        "py-4 px-4 text-gray-400"
    };
    let us_class = match (row.highlight_us, row.us_good) {
        (_, true) => "py-4 px-4 text-green-500 font-semibold",
        (true, false) => "py-4 px-4 text-indigo-400 font-semibold",
        _ => "py-4 px-4",
    };

    view! {
        <tr class="border-b border-gray-500/20">
            <td class="py-4 px-4 font-medium">{row.feature}</td>
            <td class=competitor_class>
                {row.competitor_bad.then_some("✗ ")}
                {row.competitor}
            </td>
            <td class=us_class>
                {row.us_good.then_some("✓ ")}
                {row.us}
            </td>
        </tr>
    }
}
