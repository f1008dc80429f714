//! Shared world state for board transition BDD scenarios.

use std::sync::Arc;

use jotter::board::{
    adapters::memory::InMemorySnapshotStore,
    services::LocalBoardService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoard = LocalBoardService<InMemorySnapshotStore, DefaultClock>;

/// Scenario world for board transition behaviour tests.
pub struct BoardWorld {
    pub store: Arc<InMemorySnapshotStore>,
    pub board: TestBoard,
}

impl BoardWorld {
    /// Creates a world with an empty board over a fresh store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemorySnapshotStore::new());
        let board = LocalBoardService::new(Arc::clone(&store), Arc::new(DefaultClock));

        Self { store, board }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
