pub mod people;

pub use people::{InsertReceipt, PersonRequest, PersonResponse};
