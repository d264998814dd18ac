use super::store::{parse_id, PersonStore, StoreError, UpdateOutcome};
use crate::models::{Person, PersonFields};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Process-local store with the same id and upsert semantics as the MongoDB
/// one. Used for tests and for running the HTTP layer without a database.
#[derive(Debug, Default)]
pub struct InMemoryPersonStore {
    people: RwLock<BTreeMap<ObjectId, Person>>,
}

impl InMemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.people.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.people.read().await.is_empty()
    }
}

#[async_trait]
impl PersonStore for InMemoryPersonStore {
    async fn insert(&self, fields: PersonFields) -> Result<String, StoreError> {
        let person = Person::new(ObjectId::new(), fields);
        let id = person.id;
        self.people.write().await.insert(id, person);
        Ok(id.to_hex())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Person>, StoreError> {
        let id = parse_id(id)?;
        Ok(self.people.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Person>, StoreError> {
        Ok(self.people.read().await.values().cloned().collect())
    }

    async fn update_by_id(
        &self,
        id: &str,
        fields: PersonFields,
    ) -> Result<UpdateOutcome, StoreError> {
        let id = parse_id(id)?;
        let mut people = self.people.write().await;

        match people.get_mut(&id) {
            Some(person) => {
                person.apply(fields);
                Ok(UpdateOutcome::Matched)
            }
            None => {
                people.insert(id, Person::new(id, fields));
                Ok(UpdateOutcome::Upserted)
            }
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64, StoreError> {
        let id = parse_id(id)?;
        Ok(self.people.write().await.remove(&id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
