use crate::modules::events::adapters::outbound::event_repository::EventRepository;
use crate::modules::events::application::event_service::EventService;
use crate::modules::tickets::adapters::outbound::ticket_repository::TicketRepository;
use crate::modules::tickets::application::ticket_service::TicketService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<EventService>,
    pub tickets: Arc<TicketService>,
}

impl AppState {
    pub fn new(
        event_repository: Arc<dyn EventRepository>,
        ticket_repository: Arc<dyn TicketRepository>,
    ) -> Self {
        Self {
            events: Arc::new(EventService::new(event_repository)),
            tickets: Arc::new(TicketService::new(ticket_repository)),
        }
    }
}
