//! Shared world state for task filtering BDD scenarios.

use std::sync::Arc;

use jotter::board::{
    adapters::memory::InMemorySnapshotStore,
    services::{FilterPreferences, LocalBoardService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Board service type used by the BDD world.
pub type TestBoard = LocalBoardService<InMemorySnapshotStore, DefaultClock>;

/// Scenario world for filtering behaviour tests.
pub struct FilteringWorld {
    pub store: Arc<InMemorySnapshotStore>,
    pub board: TestBoard,
    pub preferences: FilterPreferences<InMemorySnapshotStore>,
}

impl FilteringWorld {
    /// Creates a world with an empty board and pass-through preferences.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemorySnapshotStore::new());
        let board = LocalBoardService::new(Arc::clone(&store), Arc::new(DefaultClock));
        let preferences = FilterPreferences::new(Arc::clone(&store));

        Self {
            store,
            board,
            preferences,
        }
    }
}

impl Default for FilteringWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> FilteringWorld {
    FilteringWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
