use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// A stored person. `id` is assigned by the store on creation and never
/// changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone_number: String,
}

/// The caller-owned fields of a person. Updates replace all four at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonFields {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone_number: String,
}

impl Person {
    pub fn new(id: ObjectId, fields: PersonFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            address: fields.address,
            phone_number: fields.phone_number,
        }
    }

    pub fn apply(&mut self, fields: PersonFields) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.address = fields.address;
        self.phone_number = fields.phone_number;
    }
}

impl PersonFields {
    /// `$set` body for an update; `_id` is never part of it.
    pub fn to_set_document(&self) -> Document {
        doc! {
            "first_name": &self.first_name,
            "last_name": &self.last_name,
            "address": &self.address,
            "phone_number": &self.phone_number,
        }
    }
}
