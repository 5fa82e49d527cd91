//! Analytics event record, shaped like the `analytics_events` table

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub event_name: String,
    pub event_data: Map<String, Value>,
    pub page_path: String,
    pub session_id: String,
    pub referrer: String,
}

/// Build an event payload from key/value pairs
///
/// ```ignore
/// let data = event_data([("button", "hero_waitlist")]);
/// ```
pub fn event_data<K, V, I>(pairs: I) -> Map<String, Value>
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_table_columns() {
        let event = AnalyticsEvent {
            event_name: "cta_click".to_string(),
            event_data: event_data([("button", "hero_waitlist")]),
            page_path: "/".to_string(),
            session_id: "s1".to_string(),
            referrer: String::new(),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "event_name": "cta_click",
                "event_data": { "button": "hero_waitlist" },
                "page_path": "/",
                "session_id": "s1",
                "referrer": ""
            })
        );
    }
}
