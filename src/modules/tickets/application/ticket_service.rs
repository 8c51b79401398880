// Ticket use cases.
//
// Purpose
// - Orchestrate the ticket repository and the ticket mappers for the CRUD verbs and the by-event listing.
//
// Boundaries
// - Input validation belongs to the inbound adapters. Reads propagate store faults, writes report an `Outcome`.

use crate::modules::tickets::adapters::mappers::ticket_registration_to_ticket_entity::ticket_registration_to_ticket_entity;
use crate::modules::tickets::adapters::outbound::ticket_repository::TicketRepository;
use crate::modules::tickets::core::ticket::{Ticket, TicketEntity, TicketRegistration};
use crate::shared::core::outcome::Outcome;
use crate::shared::infrastructure::repository::{Repository, StoreError};
use std::sync::Arc;

pub struct TicketService {
    repository: Arc<dyn TicketRepository>,
}

impl TicketService {
    pub fn new(repository: Arc<dyn TicketRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_all(&self) -> Result<Vec<Ticket>, StoreError> {
        let entities = self.repository.get_all().await?;
        Ok(entities.into_iter().map(Ticket::from).collect())
    }

    pub async fn list_by_event_id(&self, event_id: i32) -> Result<Vec<Ticket>, StoreError> {
        let entities = self.repository.get_all_by_event_id(event_id).await?;
        Ok(entities.into_iter().map(Ticket::from).collect())
    }

    pub async fn get_by_id(&self, ticket_id: i32) -> Result<Option<Ticket>, StoreError> {
        Ok(self.find(ticket_id).await?.map(Ticket::from))
    }

    pub async fn create(&self, registration: Option<TicketRegistration>) -> Outcome {
        let Some(entity) = ticket_registration_to_ticket_entity(registration) else {
            return Outcome::InvalidInput;
        };
        match self.repository.add(entity).await {
            Ok(stored) => {
                tracing::debug!(ticket_id = stored.id, event_id = stored.event_id, "ticket created");
                Outcome::Applied
            }
            Err(error) => Outcome::Failed(error),
        }
    }

    /// Overwrites the caller fields of an existing ticket. An absent price keeps the stored one.
    pub async fn update(
        &self,
        ticket_id: i32,
        registration: TicketRegistration,
    ) -> Result<Outcome, StoreError> {
        let Some(mut target) = self.find(ticket_id).await? else {
            return Ok(Outcome::NotFound);
        };

        target.event_id = registration.event_id;
        target.holder_name = Some(registration.holder_name);
        target.holder_email = Some(registration.holder_email);
        target.price = registration.price.unwrap_or(target.price);

        Ok(self.repository.update(target).await.into())
    }

    pub async fn delete(&self, ticket_id: i32) -> Result<Outcome, StoreError> {
        let Some(target) = self.find(ticket_id).await? else {
            return Ok(Outcome::NotFound);
        };
        Ok(self.repository.remove(&target).await.into())
    }

    async fn find(&self, ticket_id: i32) -> Result<Option<TicketEntity>, StoreError> {
        self.repository
            .get(&move |ticket: &TicketEntity| ticket.id == ticket_id)
            .await
    }
}
