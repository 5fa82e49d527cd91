//! App Root Component
//!
//! Builds the site services, provides the theme, and mounts the router.

use leptos::*;
use leptos_router::*;

use crate::components::{Footer, Header};
use crate::state::{provide_site_services, provide_theme, use_site, SiteServices};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_site_services(SiteServices::browser());
    let theme = provide_theme();

    view! {
        <Router>
            <RouteEffects/>
            <div class="min-h-screen flex flex-col transition-colors">
                <Header theme=theme/>

                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=crate::pages::Landing/>
                        <Route path="/vs-jobber" view=crate::pages::Compare/>
                        <Route path="/login" view=crate::pages::Login/>
                        <Route path="/signup" view=crate::pages::Signup/>
                        <Route path="/*any" view=NotFound/>
                    </Routes>
                </main>

                <Footer/>
            </div>
        </Router>
    }
}

/// Scroll reset and page-view tracking on every path change
#[component]
fn RouteEffects() -> impl IntoView {
    let navigation = use_site().navigation;
    let location = use_location();

    create_effect(move |_| {
        let path = location.pathname.get();
        navigation.on_route_change(&path);
    });
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] pt-32 text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors"
            >
                "Back to Home"
            </A>
        </div>
    }
}
