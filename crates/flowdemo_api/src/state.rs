//! Shared application state handed to every handler.

use flowdemo_core::{
    seed_features, seed_users, Feature, FeatureService, MemoryStore, User, UserService,
};
use std::sync::Arc;
use std::time::Duration;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub users: UserService<MemoryStore<User>>,
    pub features: FeatureService<MemoryStore<Feature>>,
    /// Delay awaited before each store call; zero disables it.
    pub simulated_latency: Duration,
}

impl AppState {
    /// Builds state with the startup users and features.
    pub fn seeded(simulated_latency: Duration) -> Self {
        Self {
            users: UserService::new(MemoryStore::with_records("users", seed_users())),
            features: FeatureService::new(MemoryStore::with_records(
                "features",
                seed_features(),
            )),
            simulated_latency,
        }
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }

    /// Stands in for the round trip to an out-of-process data source.
    pub async fn simulate_latency(&self) {
        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }
    }
}
