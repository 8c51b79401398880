use crate::modules::events::core::event::{EventEntity, EventRegistration};

/// Absent input maps to no entity. The identity stays unassigned until the store adds the record.
pub fn event_registration_to_event_entity(
    registration: Option<EventRegistration>,
) -> Option<EventEntity> {
    let registration = registration?;
    Some(EventEntity {
        id: 0,
        name: registration.name,
        description: registration.description,
        start_date: registration.start_date,
        end_date: registration.end_date,
        location: registration.location,
        ticket_price: registration.ticket_price,
        ticket_amount: registration.ticket_amount,
    })
}
