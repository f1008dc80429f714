//! Given steps for board transition BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use jotter::board::services::LocalBoardService;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use std::sync::Arc;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) {
    world.board = LocalBoardService::new(Arc::clone(&world.store), Arc::new(DefaultClock));
}

#[given(r#"a task "{text}" on the board"#)]
fn task_on_board(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    let id = run_async(world.board.add_task(&text)).wrap_err("add task in scenario setup")?;
    if id.is_none() {
        return Err(eyre::eyre!("scenario setup text was rejected: {text:?}"));
    }
    Ok(())
}
