pub mod health;
pub mod people;

pub use health::{health_check, metrics_endpoint, readiness_check, root};
pub use people::{create_person, delete_person, get_all_people, get_person, update_person};
