use crate::shared::infrastructure::repository::StoreError;

/// Result of a create, update or delete request.
///
/// The store fault behind `Failed` is kept so the boundary can decide how much of it to expose.
/// Callers that only care about success collapse the outcome with [`Outcome::is_applied`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    InvalidInput,
    NotFound,
    Failed(StoreError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

impl From<Result<(), StoreError>> for Outcome {
    fn from(result: Result<(), StoreError>) -> Self {
        match result {
            Ok(()) => Outcome::Applied,
            Err(error) => Outcome::Failed(error),
        }
    }
}

impl From<Outcome> for bool {
    fn from(outcome: Outcome) -> Self {
        outcome.is_applied()
    }
}
