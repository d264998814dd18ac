use crate::models::{Person, PersonFields};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /people` and `PUT /people/:id`.
///
/// Fields are optional at the serde level so that an absent or null field is
/// reported by validation. The body itself must still be a JSON object.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PersonRequest {
    #[validate(
        required(message = "first_name is required"),
        length(min = 1, message = "first_name is required")
    )]
    pub first_name: Option<String>,
    #[validate(
        required(message = "last_name is required"),
        length(min = 1, message = "last_name is required")
    )]
    pub last_name: Option<String>,
    #[validate(
        required(message = "address is required"),
        length(min = 1, message = "address is required")
    )]
    pub address: Option<String>,
    #[validate(
        required(message = "phone_number is required"),
        length(min = 1, message = "phone_number is required")
    )]
    pub phone_number: Option<String>,
}

/// Only meaningful after `validate()` has passed.
impl From<PersonRequest> for PersonFields {
    fn from(req: PersonRequest) -> Self {
        Self {
            first_name: req.first_name.unwrap_or_default(),
            last_name: req.last_name.unwrap_or_default(),
            address: req.address.unwrap_or_default(),
            phone_number: req.phone_number.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone_number: String,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: Some(person.id.to_hex()),
            first_name: person.first_name,
            last_name: person.last_name,
            address: person.address,
            phone_number: person.phone_number,
        }
    }
}

/// Receipt returned by `POST /people`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InsertReceipt {
    pub inserted_id: String,
}
