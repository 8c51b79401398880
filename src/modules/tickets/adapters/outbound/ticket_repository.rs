use crate::modules::tickets::core::ticket::TicketEntity;
use crate::shared::infrastructure::repository::in_memory::InMemoryRepository;
use crate::shared::infrastructure::repository::{Repository, StoreError};
use async_trait::async_trait;

#[async_trait]
pub trait TicketRepository: Repository<TicketEntity> {
    async fn get_all_by_event_id(&self, event_id: i32) -> Result<Vec<TicketEntity>, StoreError> {
        self.get_all_where(&move |ticket: &TicketEntity| ticket.event_id == event_id)
            .await
    }
}

impl TicketRepository for InMemoryRepository<TicketEntity> {}
