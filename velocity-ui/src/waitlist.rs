//! Waitlist Submission Flow
//!
//! Form model, submission state machine and the insert into the `waitlist`
//! table. The view in `pages::signup` is a thin shell over these types.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::analytics::{event_data, names, Analytics};
use crate::api::{RemoteStore, StoreError, WAITLIST_TABLE};

/// Subscription tier a lead is interested in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Standard,
    Pro,
}

impl Plan {
    pub fn as_str(self) -> &'static str {
        match self {
            Plan::Standard => "standard",
            Plan::Pro => "pro",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(Plan::Standard),
            "pro" => Some(Plan::Pro),
            _ => None,
        }
    }

    /// Value of the `plan` query parameter, default when absent or unknown
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(Plan::parse).unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Plan::Standard => "Standard",
            Plan::Pro => "Pro",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Plan::Standard => "Perfect for starting out.",
            Plan::Pro => "Includes full CRM integration.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WaitlistError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Editable form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaitlistForm {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub email: String,
    pub plan: Plan,
}

impl WaitlistForm {
    pub fn with_plan(plan: Plan) -> Self {
        Self {
            plan,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), WaitlistError> {
        let required = [
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("Company name", &self.company_name),
            ("Email", &self.email),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(WaitlistError::MissingField(label));
            }
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(WaitlistError::InvalidEmail),
        }
    }

    /// Row for the `waitlist` table
    pub fn to_entry(&self, created_at: DateTime<Utc>) -> WaitlistEntry {
        WaitlistEntry {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            company_name: self.company_name.trim().to_string(),
            email: self.email.trim().to_string(),
            plan_interest: self.plan,
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaitlistEntry {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub email: String,
    pub plan_interest: Plan,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitState {
    Editing,
    Submitting,
    Submitted,
    Failed(String),
}

/// One form instance's lifecycle
#[derive(Debug, Clone, PartialEq)]
pub struct WaitlistFlow {
    pub form: WaitlistForm,
    state: SubmitState,
}

impl WaitlistFlow {
    pub fn new(plan: Plan) -> Self {
        Self {
            form: WaitlistForm::with_plan(plan),
            state: SubmitState::Editing,
        }
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_editable(&self) -> bool {
        self.state == SubmitState::Editing
    }

    /// Editing → Submitting. Returns the row to insert, or `None` when the
    /// form is not currently editable.
    pub fn begin_submit(
        &mut self,
        now: DateTime<Utc>,
    ) -> Option<Result<WaitlistEntry, WaitlistError>> {
        if self.state != SubmitState::Editing {
            return None;
        }
        if let Err(e) = self.form.validate() {
            return Some(Err(e));
        }
        self.state = SubmitState::Submitting;
        Some(Ok(self.form.to_entry(now)))
    }

    /// Submitting → Submitted | Failed
    pub fn complete(&mut self, result: Result<(), StoreError>) {
        if self.state != SubmitState::Submitting {
            return;
        }
        self.state = match result {
            Ok(()) => SubmitState::Submitted,
            Err(e) => SubmitState::Failed(e.to_string()),
        };
    }

    /// Failed → Editing, fields untouched
    pub fn acknowledge_failure(&mut self) {
        if matches!(self.state, SubmitState::Failed(_)) {
            self.state = SubmitState::Editing;
        }
    }
}

/// Insert the entry; on success record a `waitlist_signup` event
pub async fn submit_waitlist(
    store: &dyn RemoteStore,
    analytics: &Analytics,
    entry: &WaitlistEntry,
) -> Result<(), StoreError> {
    let rows = serde_json::to_value([entry]).map_err(|e| StoreError::Encode(e.to_string()))?;

    if let Err(e) = store.insert(WAITLIST_TABLE, rows).await {
        tracing::error!(error = %e, "Error joining waitlist");
        return Err(e);
    }

    tracing::info!(plan = entry.plan_interest.as_str(), "Waitlist entry created");
    analytics.track_event(
        names::WAITLIST_SIGNUP,
        event_data([("plan", entry.plan_interest.as_str())]),
    );
    Ok(())
}
