//! When steps for board transition BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use jotter::board::domain::{Task, TaskList};
use jotter::board::services::LocalBoardService;
use mockable::DefaultClock;
use rstest_bdd_macros::when;
use std::sync::Arc;

#[when(r#"the user adds a task "{text}""#)]
fn add_task(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    run_async(world.board.add_task(&text)).wrap_err("add task")?;
    Ok(())
}

#[when("the user toggles the last task")]
fn toggle_last_task(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let id = world
        .board
        .list()
        .tasks()
        .last()
        .map(Task::id)
        .ok_or_else(|| eyre::eyre!("no task on the board to toggle"))?;
    run_async(world.board.toggle_task(id)).wrap_err("toggle task")?;
    Ok(())
}

#[when("the user marks all tasks completed")]
fn mark_all_completed(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    run_async(world.board.mark_all_completed()).wrap_err("mark all completed")?;
    Ok(())
}

#[when("the user clears completed tasks")]
fn clear_completed(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    run_async(world.board.clear_completed()).wrap_err("clear completed")?;
    Ok(())
}

#[when("the board is reloaded from the store")]
fn reload_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.board = run_async(LocalBoardService::load(
        Arc::clone(&world.store),
        Arc::new(DefaultClock),
        TaskList::new(),
    ))
    .wrap_err("reload board from store")?;
    Ok(())
}
