use crate::modules::events::adapters::mappers::event_registration_to_event_entity::event_registration_to_event_entity;
use crate::modules::events::adapters::outbound::event_repository::EventRepository;
use crate::modules::events::core::event::{Event, EventEntity, EventRegistration};
use crate::shared::core::outcome::Outcome;
use crate::shared::infrastructure::repository::{Repository, StoreError};
use std::sync::Arc;

pub struct EventService {
    repository: Arc<dyn EventRepository>,
}

impl EventService {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_all(&self) -> Result<Vec<Event>, StoreError> {
        let entities = self.repository.get_all().await?;
        Ok(entities.into_iter().map(Event::from).collect())
    }

    pub async fn get_by_id(&self, event_id: i32) -> Result<Option<Event>, StoreError> {
        Ok(self.find(event_id).await?.map(Event::from))
    }

    pub async fn create(&self, registration: Option<EventRegistration>) -> Outcome {
        let Some(entity) = event_registration_to_event_entity(registration) else {
            return Outcome::InvalidInput;
        };
        match self.repository.add(entity).await {
            Ok(stored) => {
                tracing::debug!(event_id = stored.id, "event created");
                Outcome::Applied
            }
            Err(error) => Outcome::Failed(error),
        }
    }

    /// Every caller field replaces the stored one.
    pub async fn update(
        &self,
        event_id: i32,
        registration: EventRegistration,
    ) -> Result<Outcome, StoreError> {
        let Some(mut target) = self.find(event_id).await? else {
            return Ok(Outcome::NotFound);
        };

        target.name = registration.name;
        target.description = registration.description;
        target.start_date = registration.start_date;
        target.end_date = registration.end_date;
        target.location = registration.location;
        target.ticket_price = registration.ticket_price;
        target.ticket_amount = registration.ticket_amount;

        Ok(self.repository.update(target).await.into())
    }

    pub async fn delete(&self, event_id: i32) -> Result<Outcome, StoreError> {
        let Some(target) = self.find(event_id).await? else {
            return Ok(Outcome::NotFound);
        };
        Ok(self.repository.remove(&target).await.into())
    }

    async fn find(&self, event_id: i32) -> Result<Option<EventEntity>, StoreError> {
        self.repository
            .get(&move |event: &EventEntity| event.id == event_id)
            .await
    }
}
