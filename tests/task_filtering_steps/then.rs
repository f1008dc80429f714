//! Then steps for task filtering BDD scenarios.

use super::world::FilteringWorld;
use rstest_bdd_macros::then;

#[then(r#"the visible tasks are exactly "{texts}""#)]
fn visible_tasks_are(world: &FilteringWorld, texts: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = texts.split(", ").collect();
    let view = world.board.view(world.preferences.criteria());
    let actual: Vec<&str> = view.tasks().iter().map(|task| task.text().as_str()).collect();

    if actual != expected {
        return Err(eyre::eyre!(
            "expected visible tasks {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then("the counts are total {total:usize}, active {active:usize}, completed {completed:usize}")]
fn counts_are(
    world: &FilteringWorld,
    total: usize,
    active: usize,
    completed: usize,
) -> Result<(), eyre::Report> {
    let counts = world.board.view(world.preferences.criteria()).counts();

    if counts.total != total || counts.active != active || counts.completed != completed {
        return Err(eyre::eyre!(
            "expected counts ({total}, {active}, {completed}), found ({}, {}, {})",
            counts.total,
            counts.active,
            counts.completed
        ));
    }
    Ok(())
}
