//! Login Page
//!
//! Sign-in form backed by `SimulatedAuth`; any input "succeeds".

use leptos::*;
use leptos_router::*;

use crate::auth::SimulatedAuth;
use crate::components::InlineLoading;

#[component]
pub fn Login() -> impl IntoView {
    let auth = SimulatedAuth::new();
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        auth.submit(move || navigate("/", Default::default()));
    };

    view! {
        <AuthShell title="Welcome Back" subtitle="Sign in to your Velocity Logic account">
            <form class="space-y-5" on:submit=on_submit>
                <Field label="Email Address">
                    <input
                        type="email"
                        required
                        placeholder="you@company.com"
                        class=INPUT_CLASS
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </Field>
                <Field label="Password">
                    <input
                        type="password"
                        required
                        placeholder="••••••••"
                        class=INPUT_CLASS
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </Field>
                <SubmitButton pending=Signal::derive(move || auth.is_pending()) label="Sign In"/>
            </form>
            <p class="mt-8 text-center text-sm text-gray-400">
                "Don't have an account? "
                <A href="/signup" class="text-indigo-400 hover:text-indigo-300 font-medium">"Start Free Trial"</A>
            </p>
        </AuthShell>
    }
}

pub(crate) const INPUT_CLASS: &str = "w-full rounded-xl py-3 px-4 bg-transparent border border-gray-500/30 \
                                      focus:outline-none focus:border-indigo-500";

/// Centered card used by the login and signup forms
#[component]
pub(crate) fn AuthShell(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center px-4 pt-24 pb-12">
            <div class="w-full max-w-md">
                <A href="/" class="inline-block text-sm text-gray-400 hover:text-indigo-400 mb-8">
                    "← Back to Home"
                </A>
                <div class="rounded-3xl border border-gray-500/20 p-8 shadow-2xl">
                    <div class="text-center mb-8">
                        <h1 class="text-3xl font-bold mb-2">{title}</h1>
                        <p class="text-gray-400">{subtitle}</p>
                    </div>
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub(crate) fn Field(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <label class="block text-xs font-medium text-gray-400 uppercase tracking-wider mb-1.5">
                {label}
            </label>
            {children()}
        </div>
    }
}

#[component]
pub(crate) fn SubmitButton(pending: Signal<bool>, label: &'static str) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || pending.get()
            class="w-full py-3.5 rounded-xl bg-indigo-600 hover:bg-indigo-700 text-white font-bold \
                   disabled:opacity-70 disabled:cursor-not-allowed flex items-center justify-center"
        >
            {move || if pending.get() {
                view! { <InlineLoading/> }.into_view()
            } else {
                label.into_view()
            }}
        </button>
    }
}
