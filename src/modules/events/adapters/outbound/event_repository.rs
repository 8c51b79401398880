use crate::modules::events::core::event::EventEntity;
use crate::shared::infrastructure::repository::Repository;
use crate::shared::infrastructure::repository::in_memory::InMemoryRepository;

pub trait EventRepository: Repository<EventEntity> {}

impl EventRepository for InMemoryRepository<EventEntity> {}
