//! Signup Page
//!
//! Waitlist lead capture by default; the simulated account form when the
//! bundle is built with `VELOCITY_SIGNUP_MODE=account`.

use chrono::Utc;
use leptos::*;
use leptos_router::*;

use super::login::{AuthShell, Field, SubmitButton, INPUT_CLASS};
use crate::auth::{SignupMode, SimulatedAuth};
use crate::platform::show_alert;
use crate::state::use_site;
use crate::waitlist::{submit_waitlist, Plan, SubmitState, WaitlistFlow};

const FAILURE_ALERT: &str = "Something went wrong joining the waitlist. Please try again.";

#[component]
pub fn Signup() -> impl IntoView {
    let site = use_site();
    let query = use_query_map();
    let plan = Plan::from_query(query.with_untracked(|q| q.get("plan").cloned()).as_deref());

    match site.signup_mode {
        SignupMode::Waitlist => view! { <WaitlistForm plan=plan/> }.into_view(),
        SignupMode::Account => view! { <AccountForm plan=plan/> }.into_view(),
    }
}

#[component]
fn WaitlistForm(plan: Plan) -> impl IntoView {
    let site = use_site();
    let flow = create_rw_signal(WaitlistFlow::new(plan));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let entry = match flow.try_update(|f| f.begin_submit(Utc::now())).flatten() {
            None => return,
            Some(Err(e)) => {
                show_alert(&e.to_string());
                return;
            }
            Some(Ok(entry)) => entry,
        };

        let store = site.store.clone();
        let analytics = site.analytics.clone();
        spawn_local(async move {
            let result = submit_waitlist(store.as_ref(), &analytics, &entry).await;
            let failed = result.is_err();
            flow.update(|f| f.complete(result));
            if failed {
                show_alert(FAILURE_ALERT);
                flow.update(|f| f.acknowledge_failure());
            }
        });
    };

    let submitted = move || flow.with(|f| f.state() == &SubmitState::Submitted);
    let pending = Signal::derive(move || flow.with(|f| f.state() == &SubmitState::Submitting));
    let selected = Signal::derive(move || flow.with(|f| f.form.plan));

    view! {
        <Show
            when=submitted
            fallback=move || { let on_submit = on_submit.clone(); view! {
                <AuthShell title="Join the Waitlist" subtitle="Be first in line when Velocity Logic opens up">
                    <PlanSelector selected=selected on_change=Callback::new(move |p| flow.update(|f| f.form.plan = p))/>
                    <form class="space-y-5" on:submit=on_submit.clone()>
                        <div class="grid grid-cols-2 gap-4">
                            <Field label="First Name">
                                <input
                                    required
                                    placeholder="John"
                                    class=INPUT_CLASS
                                    prop:value=move || flow.with(|f| f.form.first_name.clone())
                                    prop:disabled=move || !flow.with(WaitlistFlow::is_editable)
                                    on:input=move |ev| flow.update(|f| f.form.first_name = event_target_value(&ev))
                                />
                            </Field>
                            <Field label="Last Name">
                                <input
                                    required
                                    placeholder="Doe"
                                    class=INPUT_CLASS
                                    prop:value=move || flow.with(|f| f.form.last_name.clone())
                                    prop:disabled=move || !flow.with(WaitlistFlow::is_editable)
                                    on:input=move |ev| flow.update(|f| f.form.last_name = event_target_value(&ev))
                                />
                            </Field>
                        </div>
                        <Field label="Company Name">
                            <input
                                required
                                placeholder="Acme Inc."
                                class=INPUT_CLASS
                                prop:value=move || flow.with(|f| f.form.company_name.clone())
                                prop:disabled=move || !flow.with(WaitlistFlow::is_editable)
                                on:input=move |ev| flow.update(|f| f.form.company_name = event_target_value(&ev))
                            />
                        </Field>
                        <Field label="Email Address">
                            <input
                                type="email"
                                required
                                placeholder="you@company.com"
                                class=INPUT_CLASS
                                prop:value=move || flow.with(|f| f.form.email.clone())
                                prop:disabled=move || !flow.with(WaitlistFlow::is_editable)
                                on:input=move |ev| flow.update(|f| f.form.email = event_target_value(&ev))
                            />
                        </Field>
                        <PlanSummary selected=selected/>
                        <SubmitButton pending=pending label="Join Waitlist"/>
                    </form>
                </AuthShell>
            }}
        >
            <div class="min-h-screen flex items-center justify-center px-4 pt-24 pb-12">
                <div class="max-w-md text-center rounded-3xl border border-gray-500/20 p-10">
                    <div class="text-5xl mb-6 text-green-500">"✓"</div>
                    <h1 class="text-3xl font-bold mb-4">"You're on the list!"</h1>
                    <p class="text-gray-400 mb-8">
                        "Thanks for your interest in the "
                        {move || flow.with(|f| f.form.plan.label())}
                        " plan. We'll be in touch soon."
                    </p>
                    <A href="/" class="text-indigo-400 hover:text-indigo-300 font-medium">"← Back to Home"</A>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn AccountForm(plan: Plan) -> impl IntoView {
    let auth = SimulatedAuth::new();
    let (selected, set_selected) = create_signal(plan);
    let navigate = use_navigate();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        auth.submit(move || navigate("/", Default::default()));
    };

    view! {
        <AuthShell title="Get Started" subtitle="Start automating your quotes today">
            <PlanSelector selected=selected on_change=Callback::new(move |p| set_selected.set(p))/>
            <form class="space-y-5" on:submit=on_submit>
                <div class="grid grid-cols-2 gap-4">
                    <Field label="First Name">
                        <input required placeholder="John" class=INPUT_CLASS/>
                    </Field>
                    <Field label="Last Name">
                        <input required placeholder="Doe" class=INPUT_CLASS/>
                    </Field>
                </div>
                <Field label="Company Name">
                    <input required placeholder="Acme Inc." class=INPUT_CLASS/>
                </Field>
                <Field label="Email Address">
                    <input type="email" required placeholder="you@company.com" class=INPUT_CLASS/>
                </Field>
                <Field label="Password">
                    <input type="password" required placeholder="••••••••" class=INPUT_CLASS/>
                </Field>
                <PlanSummary selected=selected/>
                <SubmitButton pending=Signal::derive(move || auth.is_pending()) label="Create Account"/>
            </form>
            <p class="mt-8 text-center text-sm text-gray-400">
                "Already have an account? "
                <A href="/login" class="text-indigo-400 hover:text-indigo-300 font-medium">"Sign In"</A>
            </p>
        </AuthShell>
    }
}

#[component]
fn PlanSelector(#[prop(into)] selected: Signal<Plan>, on_change: Callback<Plan>) -> impl IntoView {
    let option = move |plan: Plan, label: &'static str| {
        view! {
            <button
                type="button"
                class="py-2 px-4 rounded-lg text-sm font-medium transition-all"
                class=("bg-indigo-600", move || selected.get() == plan)
                class=("text-white", move || selected.get() == plan)
                class=("text-gray-400", move || selected.get() != plan)
                on:click=move |_| on_change.call(plan)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="grid grid-cols-2 gap-3 mb-8 p-1 rounded-xl border border-gray-500/20">
            {option(Plan::Standard, "Standard")}
            {option(Plan::Pro, "Pro Plan")}
        </div>
    }
}

#[component]
fn PlanSummary(#[prop(into)] selected: Signal<Plan>) -> impl IntoView {
    view! {
        <div class="rounded-xl p-4 border border-gray-500/20 text-xs text-gray-400">
            "You are selecting the "
            <span class="font-bold">{move || format!("{} Plan", selected.get().label())}</span>
            ". "
            {move || selected.get().blurb()}
        </div>
    }
}
