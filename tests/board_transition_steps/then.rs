//! Then steps for board transition BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;

#[then("the board contains {count:usize} tasks")]
fn board_contains_tasks(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    if world.board.list().len() != count {
        return Err(eyre::eyre!(
            "expected {count} tasks, found {}",
            world.board.list().len()
        ));
    }
    Ok(())
}

#[then("the board contains 1 task")]
fn board_contains_one_task(world: &BoardWorld) -> Result<(), eyre::Report> {
    if world.board.list().len() != 1 {
        return Err(eyre::eyre!(
            "expected 1 task, found {}",
            world.board.list().len()
        ));
    }
    Ok(())
}

#[then(r#"the last task text is "{text}""#)]
fn last_task_text_is(world: &BoardWorld, text: String) -> Result<(), eyre::Report> {
    let task = world
        .board
        .list()
        .tasks()
        .last()
        .ok_or_else(|| eyre::eyre!("no task on the board"))?;
    if task.text().as_str() != text {
        return Err(eyre::eyre!(
            "expected text {text:?}, found {:?}",
            task.text().as_str()
        ));
    }
    Ok(())
}

#[then("the last task is active")]
fn last_task_is_active(world: &BoardWorld) -> Result<(), eyre::Report> {
    let task = world
        .board
        .list()
        .tasks()
        .last()
        .ok_or_else(|| eyre::eyre!("no task on the board"))?;
    if task.done() {
        return Err(eyre::eyre!("expected the last task to be active"));
    }
    Ok(())
}
