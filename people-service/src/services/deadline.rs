use super::store::StoreError;
use std::future::Future;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};

/// A per-request time budget shared by every storage call the request makes.
///
/// The clock starts when the deadline is created, not when each call starts.
/// A call still running at expiry is dropped, which cancels it.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Self {
            expires_at: Instant::now() + budget,
            budget,
        }
    }

    pub async fn run<F, T>(&self, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        match timeout_at(self.expires_at, call).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout(self.budget)),
        }
    }
}
