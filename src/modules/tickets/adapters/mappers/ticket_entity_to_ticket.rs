use crate::modules::tickets::core::ticket::{Ticket, TicketEntity};

impl From<TicketEntity> for Ticket {
    fn from(entity: TicketEntity) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            holder_name: entity.holder_name,
            holder_email: entity.holder_email,
            purchase_date: entity.purchase_date,
            price: entity.price,
            status: entity.status,
        }
    }
}
