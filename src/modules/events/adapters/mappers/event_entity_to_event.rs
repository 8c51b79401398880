use crate::modules::events::core::event::{Event, EventEntity};

impl From<EventEntity> for Event {
    fn from(entity: EventEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            start_date: entity.start_date,
            end_date: entity.end_date,
            location: entity.location,
            ticket_price: entity.ticket_price,
            ticket_amount: entity.ticket_amount,
        }
    }
}
