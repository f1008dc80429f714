//! Application services for the todo board.
//!
//! One service per persistence strategy of the source application, plus
//! durable filter preferences shared by both.

mod local;
mod preferences;
mod remote;

pub use local::{LocalBoardError, LocalBoardResult, LocalBoardService, TASKS_KEY};
pub use preferences::{
    COLORS_KEY, FilterPreferences, PreferencesError, PreferencesResult, SEARCH_KEY,
    STATUS_FILTER_KEY,
};
pub use remote::{RemoteBoardError, RemoteBoardResult, RemoteBoardService};
