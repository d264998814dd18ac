pub mod database;
pub mod deadline;
pub mod memory;
pub mod metrics;
pub mod store;

pub use database::{MongoDb, MongoPersonStore};
pub use deadline::Deadline;
pub use memory::InMemoryPersonStore;
pub use self::metrics::{get_metrics, init_metrics};
pub use store::{parse_id, PersonStore, StoreError, UpdateOutcome};
