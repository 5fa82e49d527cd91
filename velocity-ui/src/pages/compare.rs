//! Compare Page (`/vs-jobber`)

use leptos::*;
use leptos_router::*;

use crate::components::ComparisonRowView;
use crate::content::{COMPARISON_ROWS, PRODUCT_NAME};
use crate::routing::Section;
use crate::state::use_site;

#[component]
pub fn Compare() -> impl IntoView {
    let site = use_site();
    let location = use_location();
    let navigate = use_navigate();

    let on_switch = move |_| {
        site.analytics.track_cta("compare_switch");
        let navigate = navigate.clone();
        site.anchors.go_to(Section::Pricing, &location.pathname.get_untracked(), move |path| {
            navigate(path, Default::default())
        });
    };

    view! {
        <div class="container mx-auto px-4 pt-32 pb-24 max-w-6xl">
            <A href="/" class="inline-block text-sm text-gray-400 hover:text-indigo-400 mb-12">
                "← Back to Home"
            </A>

            <div class="text-center mb-20">
                <h1 class="text-4xl md:text-7xl font-bold tracking-tight mb-6">
                    {PRODUCT_NAME} <span class="text-gray-400 mx-2">"vs."</span> "Traditional CRMs"
                </h1>
                <p class="text-xl text-gray-400 max-w-2xl mx-auto">
                    "Traditional CRMs are designed to organize paperwork. Velocity Logic is designed to generate revenue. Choose your weapon."
                </p>
            </div>

            <div class="rounded-3xl border border-gray-500/20 overflow-hidden">
                <table class="w-full text-left">
                    <thead>
                        <tr class="border-b border-gray-500/20 text-xs uppercase tracking-widest text-gray-400">
                            <th class="py-4 px-4">"Feature"</th>
                            <th class="py-4 px-4">"Traditional CRM"</th>
                            <th class="py-4 px-4 text-indigo-400">{PRODUCT_NAME}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {COMPARISON_ROWS.iter().map(|row| view! { <ComparisonRowView row=row/> }).collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="mt-20 text-center rounded-3xl p-16 border border-gray-500/20">
                <h3 class="text-3xl font-bold mb-8">"Ready to stop managing and start earning?"</h3>
                <button
                    class="px-8 py-4 rounded-full font-bold bg-indigo-600 hover:bg-indigo-700 text-white"
                    on:click=on_switch
                >
                    "Switch to Velocity Logic"
                </button>
            </div>
        </div>
    }
}
