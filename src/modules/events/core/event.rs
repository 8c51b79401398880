use crate::shared::infrastructure::repository::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};

/// Caller supplied event fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistration {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    pub ticket_price: i32,
    #[serde(deserialize_with = "ticket_amount")]
    pub ticket_amount: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEntity {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    pub ticket_price: i32,
    pub ticket_amount: u32,
}

impl Entity for EventEntity {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    pub ticket_price: i32,
    #[serde(deserialize_with = "ticket_amount")]
    pub ticket_amount: u32,
}

// Older clients send the amount as a numeric string ("500").
fn ticket_amount<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Count(u32),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Count(count) => Ok(count),
        Amount::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid ticket amount: {text:?}"))),
    }
}
