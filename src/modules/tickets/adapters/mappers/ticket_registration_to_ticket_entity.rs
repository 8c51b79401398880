use crate::modules::tickets::core::ticket::{TicketEntity, TicketRegistration};
use rust_decimal::Decimal;

/// Absent input maps to no entity. Identity, purchase date and status keep their defaults.
pub fn ticket_registration_to_ticket_entity(
    registration: Option<TicketRegistration>,
) -> Option<TicketEntity> {
    let registration = registration?;
    Some(TicketEntity {
        event_id: registration.event_id,
        holder_name: Some(registration.holder_name),
        holder_email: Some(registration.holder_email),
        price: registration.price.unwrap_or(Decimal::ZERO),
        ..TicketEntity::default()
    })
}
