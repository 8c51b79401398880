// Shared test fixture for the event registration payload, seeded from the JSON sample.

use crate::modules::events::core::event::EventRegistration;
use chrono::{DateTime, Utc};

const EVENT_REGISTRATION_JSON: &str = include_str!("json/event_registration.json");

pub struct EventRegistrationBuilder {
    inner: EventRegistration,
}

impl Default for EventRegistrationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventRegistrationBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(EVENT_REGISTRATION_JSON).unwrap(),
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn description(mut self, v: Option<String>) -> Self {
        self.inner.description = v;
        self
    }

    pub fn start_date(mut self, v: DateTime<Utc>) -> Self {
        self.inner.start_date = v;
        self
    }

    pub fn end_date(mut self, v: DateTime<Utc>) -> Self {
        self.inner.end_date = v;
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn ticket_price(mut self, v: i32) -> Self {
        self.inner.ticket_price = v;
        self
    }

    pub fn ticket_amount(mut self, v: u32) -> Self {
        self.inner.ticket_amount = v;
        self
    }

    pub fn build(self) -> EventRegistration {
        self.inner
    }
}

#[cfg(test)]
mod event_registration_builder_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = EventRegistrationBuilder::default().build();
        assert_eq!(built.name, "comicon");
        assert_eq!(built.location, "Convention Center, Cityville");
        assert_eq!(built.ticket_price, 49);
        assert_eq!(built.ticket_amount, 500);
        assert_eq!(
            built.end_date,
            Utc.with_ymd_and_hms(2025, 5, 29, 18, 0, 0).unwrap()
        );
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 1, 2, 17, 0, 0).unwrap();
        let custom = EventRegistrationBuilder::new()
            .name("rustconf")
            .description(Some("talks".into()))
            .start_date(start)
            .end_date(end)
            .location("Hall B")
            .ticket_price(10)
            .ticket_amount(20)
            .build();

        assert_eq!(custom.name, "rustconf");
        assert_eq!(custom.description.as_deref(), Some("talks"));
        assert_eq!(custom.start_date, start);
        assert_eq!(custom.end_date, end);
        assert_eq!(custom.location, "Hall B");
        assert_eq!(custom.ticket_price, 10);
        assert_eq!(custom.ticket_amount, 20);
    }
}
