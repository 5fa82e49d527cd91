//! Header Component
//!
//! Fixed top bar shown on every route.

use leptos::*;
use leptos_router::*;

use crate::content::PRODUCT_NAME;
use crate::platform;
use crate::routing::Section;
use crate::state::{use_site, ThemeContext};

/// Scroll offset after which the header gets its solid background
const SCROLLED_THRESHOLD_PX: f64 = 20.0;

#[component]
pub fn Header(theme: ThemeContext) -> impl IntoView {
    let site = use_site();
    let (scrolled, set_scrolled) = create_signal(platform::scroll_y() > SCROLLED_THRESHOLD_PX);

    let handle = window_event_listener(ev::scroll, move |_| {
        set_scrolled.set(platform::scroll_y() > SCROLLED_THRESHOLD_PX);
    });
    on_cleanup(move || handle.remove());

    let location = use_location();
    let navigate = use_navigate();
    let anchors = site.anchors.clone();
    let go_to = move |section: Section| {
        let navigate = navigate.clone();
        anchors.go_to(section, &location.pathname.get_untracked(), move |path| {
            navigate(path, Default::default())
        });
    };

    let go_features = go_to.clone();
    let go_pricing = go_to.clone();
    let analytics = site.analytics.clone();
    let on_demo = move |_| {
        analytics.track_cta("header_demo");
        go_to(Section::Pricing);
    };

    view! {
        <header
            class="fixed top-0 inset-x-0 z-50 transition-all"
            class=("bg-white/90", move || scrolled.get() && !theme.is_dark())
            class=("bg-gray-950/90", move || scrolled.get() && theme.is_dark())
            class=("shadow", move || scrolled.get())
            class=("py-4", move || !scrolled.get())
            class=("py-2", move || scrolled.get())
        >
            <div class="container mx-auto px-4 flex items-center justify-between">
                <A href="/" class="flex items-center space-x-2 font-bold text-xl">
                    <span class="text-indigo-500">"⚡"</span>
                    <span>{PRODUCT_NAME}</span>
                </A>

                <nav class="hidden md:flex items-center space-x-6 text-sm">
                    <A href="/vs-jobber" class="hover:text-indigo-400" active_class="text-indigo-400">
                        "Compare"
                    </A>
                    <button class="hover:text-indigo-400" on:click=move |_| go_features(Section::Features)>
                        "Features"
                    </button>
                    <button class="hover:text-indigo-400" on:click=move |_| go_pricing(Section::Pricing)>
                        "Pricing"
                    </button>
                </nav>

                <div class="flex items-center space-x-3">
                    <button
                        class="p-2 rounded-full hover:bg-gray-500/20"
                        aria-label="Toggle theme"
                        on:click=move |_| theme.toggle()
                    >
                        {move || if theme.is_dark() { "☀" } else { "☾" }}
                    </button>
                    <A href="/login" class="text-sm hover:text-indigo-400">"Sign In"</A>
                    <button
                        class="px-4 py-2 rounded-lg bg-indigo-600 hover:bg-indigo-700 text-white text-sm font-medium"
                        on:click=on_demo
                    >
                        "Get Demo"
                    </button>
                </div>
            </div>
        </header>
    }
}
