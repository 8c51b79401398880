use crate::shared::infrastructure::repository::Entity;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TICKET_STATUS: &str = "Available";

/// Caller supplied ticket fields. Identity, purchase date and status are never taken from input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRegistration {
    pub event_id: i32,
    pub holder_name: String,
    pub holder_email: String,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketEntity {
    pub id: i32,
    pub event_id: i32,
    pub holder_name: Option<String>,
    pub holder_email: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub price: Decimal,
    pub status: String,
}

impl Default for TicketEntity {
    fn default() -> Self {
        Self {
            id: 0,
            event_id: 0,
            holder_name: None,
            holder_email: None,
            purchase_date: None,
            price: Decimal::ZERO,
            status: DEFAULT_TICKET_STATUS.to_string(),
        }
    }
}

impl Entity for TicketEntity {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i32,
    pub event_id: i32,
    pub holder_name: Option<String>,
    pub holder_email: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub status: String,
}
