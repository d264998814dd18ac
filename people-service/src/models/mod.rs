pub mod person;

pub use person::{Person, PersonFields};
