//! Landing Page
//!
//! Hero, old-vs-new comparison, `#features`, integrations and `#pricing`.

use leptos::*;
use leptos_router::*;

use crate::analytics::{event_data, names};
use crate::components::{FeatureCard, PricingCard};
use crate::content::{FEATURES, INTEGRATIONS, NEW_WAY, OLD_WAY, PRICING_TIERS};
use crate::routing::Section;
use crate::state::use_site;
use crate::waitlist::Plan;

/// `/signup` link carrying the chosen plan
pub fn signup_href(plan: Plan) -> String {
    format!("/signup?plan={}", plan.as_str())
}

#[component]
pub fn Landing() -> impl IntoView {
    let site = use_site();

    // Sections exist once this frame is painted; finish any parked anchor jump
    let anchors = site.anchors.clone();
    request_animation_frame(move || anchors.landing_mounted());

    let analytics = site.analytics.clone();
    let anchors = site.anchors.clone();
    let on_hero_waitlist = move |_| {
        analytics.track_cta("hero_waitlist");
        anchors.go_to(Section::Pricing, "/", |_| {});
    };

    let analytics = site.analytics.clone();
    let anchors = site.anchors.clone();
    let on_hero_demo = move |_| {
        analytics.track_cta("hero_demo");
        anchors.go_to(Section::Features, "/", |_| {});
    };

    let analytics = site.analytics.clone();
    let navigate = use_navigate();
    let on_select = Callback::new(move |plan: Plan| {
        analytics.track_event(names::PRICING_SELECT, event_data([("plan", plan.as_str())]));
        navigate(&signup_href(plan), Default::default());
    });

    view! {
        <div class="flex flex-col">
            <section class="pt-32 pb-24 text-center">
                <div class="container mx-auto px-4 max-w-4xl">
                    <span class="inline-block px-3 py-1 rounded-full border border-gray-500/30 text-xs uppercase tracking-wide text-gray-400 mb-8">
                        "The Automatic Sales Engine"
                    </span>
                    <h1 class="text-5xl md:text-7xl font-bold tracking-tight mb-8">
                        "Be The First To Quote." <br/>
                        <span class="text-indigo-500">"Every Single Time."</span>
                    </h1>
                    <p class="text-lg md:text-xl text-gray-400 mb-12">
                        "Your competitors take 24 hours to reply. Velocity Logic replies in 30 seconds. "
                        "The automated estimator that reads your emails, checks your inventory, and closes deals while you sleep."
                    </p>
                    <div class="flex flex-col sm:flex-row justify-center gap-4">
                        <button
                            class="px-8 py-4 rounded-full font-bold bg-indigo-600 hover:bg-indigo-700 text-white"
                            on:click=on_hero_waitlist
                        >
                            "Join Waitlist →"
                        </button>
                        <button
                            class="px-8 py-4 rounded-full font-medium border border-gray-500/40 hover:border-indigo-500"
                            on:click=on_hero_demo
                        >
                            "See 30-Second Demo"
                        </button>
                    </div>
                </div>
            </section>

            <section class="py-24">
                <div class="container mx-auto px-4 max-w-5xl">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold mb-4">"The Old Way vs. The Velocity Way"</h2>
                        <p class="text-gray-400">"Stop acting like an office manager. Start acting like a market leader."</p>
                    </div>
                    <div class="grid md:grid-cols-2 gap-6">
                        <WayCard
                            title="Traditional CRM"
                            items=&OLD_WAY
                            marker="✗"
                            result="RESULT: LOST REVENUE"
                            accent="text-red-500"
                        />
                        <WayCard
                            title="Velocity Logic"
                            items=&NEW_WAY
                            marker="✓"
                            result="RESULT: MORE CLOSED DEALS"
                            accent="text-green-500"
                        />
                    </div>
                </div>
            </section>

            <section id={Section::Features.element_id()} class="py-24">
                <div class="container mx-auto px-4">
                    <h2 class="text-4xl md:text-5xl font-bold text-center mb-16">
                        "The First Quoting Tool That Doesn't Need You."
                    </h2>
                    <div class="grid md:grid-cols-3 gap-6">
                        {FEATURES.iter().map(|feature| view! { <FeatureCard feature=feature/> }).collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-24">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="text-4xl md:text-5xl font-bold mb-8">"We Feed Your Ecosystem."</h2>
                    <p class="text-gray-400 max-w-2xl mx-auto mb-10">
                        "Velocity Logic pushes every won quote straight into the tools you already run."
                    </p>
                    <div class="flex flex-wrap justify-center gap-4">
                        {INTEGRATIONS
                            .iter()
                            .map(|(name, dot)| view! {
                                <span class="inline-flex items-center gap-2 px-4 py-2 rounded-full border border-gray-500/30 text-sm">
                                    <span class={format!("w-2 h-2 rounded-full {}", dot)}/>
                                    {*name}
                                </span>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id={Section::Pricing.element_id()} class="py-24">
                <div class="container mx-auto px-4 max-w-4xl">
                    <h2 class="text-4xl md:text-5xl font-bold text-center mb-16">"Cheaper Than Your Worst Employee."</h2>
                    <div class="grid md:grid-cols-2 gap-8">
                        {PRICING_TIERS
                            .iter()
                            .map(|tier| view! { <PricingCard tier=tier on_select=on_select/> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-32 text-center">
                <h2 class="text-4xl md:text-6xl font-bold mb-10">
                    "While your competitors are typing," <br/> "you are closing."
                </h2>
                <A href="/vs-jobber" class="text-indigo-500 hover:text-indigo-400 font-semibold text-lg">
                    "Compare vs. Traditional CRMs ›"
                </A>
            </section>
        </div>
    }
}

#[component]
fn WayCard(
    title: &'static str,
    items: &'static [&'static str],
    marker: &'static str,
    result: &'static str,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="p-8 rounded-3xl border border-gray-500/20">
            <h3 class={format!("text-lg font-semibold mb-6 {}", accent)}>{title}</h3>
            <ul class="space-y-4">
                {items
                    .iter()
                    .map(|item| view! {
                        <li class="flex gap-4">
                            <span class=accent>{marker}</span>
                            <span class="text-gray-400">{*item}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
            <div class={format!("mt-8 pt-6 border-t border-gray-500/20 text-xs font-mono font-bold tracking-widest {}", accent)}>
                {result}
            </div>
        </div>
    }
}
