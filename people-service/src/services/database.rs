use super::store::{parse_id, PersonStore, StoreError, UpdateOutcome};
use crate::models::{Person, PersonFields};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::UpdateOptions,
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

/// Person gateway over a single MongoDB collection, keyed by `_id`.
#[derive(Clone)]
pub struct MongoPersonStore {
    db: Database,
    people: Collection<Person>,
}

impl MongoPersonStore {
    pub fn new(db: &MongoDb, collection: &str) -> Self {
        Self {
            db: db.database().clone(),
            people: db.database().collection(collection),
        }
    }
}

#[async_trait]
impl PersonStore for MongoPersonStore {
    async fn insert(&self, fields: PersonFields) -> Result<String, StoreError> {
        let person = Person::new(ObjectId::new(), fields);
        self.people.insert_one(&person, None).await.map_err(|e| {
            tracing::error!(person_id = %person.id, "Failed to insert person: {}", e);
            StoreError::from(e)
        })?;
        Ok(person.id.to_hex())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Person>, StoreError> {
        let id = parse_id(id)?;
        let person = self.people.find_one(doc! { "_id": id }, None).await?;
        Ok(person)
    }

    async fn find_all(&self) -> Result<Vec<Person>, StoreError> {
        let mut cursor = self.people.find(doc! {}, None).await?;

        let mut people = Vec::new();
        while let Some(person) = cursor.try_next().await? {
            people.push(person);
        }
        Ok(people)
    }

    async fn update_by_id(
        &self,
        id: &str,
        fields: PersonFields,
    ) -> Result<UpdateOutcome, StoreError> {
        let id = parse_id(id)?;
        let options = UpdateOptions::builder().upsert(true).build();

        // The filter is on `_id`, so an upsert inherits the requested id.
        let result = self
            .people
            .update_one(
                doc! { "_id": id },
                doc! { "$set": fields.to_set_document() },
                options,
            )
            .await?;

        let outcome = if result.matched_count > 0 {
            UpdateOutcome::Matched
        } else if result.upserted_id.is_some() {
            UpdateOutcome::Upserted
        } else {
            UpdateOutcome::Unmatched
        };
        Ok(outcome)
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64, StoreError> {
        let id = parse_id(id)?;
        let result = self.people.delete_one(doc! { "_id": id }, None).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                StoreError::from(e)
            })?;
        Ok(())
    }
}
