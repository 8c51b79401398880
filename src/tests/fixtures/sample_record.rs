use crate::shared::infrastructure::repository::Entity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRecord {
    pub id: i32,
    pub name: String,
}

impl SampleRecord {
    pub fn named(name: &str) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
        }
    }
}

impl Entity for SampleRecord {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
