//! Given steps for task filtering BDD scenarios.

use super::world::{FilteringWorld, run_async};
use eyre::WrapErr;
use jotter::board::domain::TaskColor;
use rstest_bdd_macros::given;

/// Seeds the board used throughout the source application's examples:
/// "Learn React" is done and green, "Learn JS" is active and red.
#[given("a board with the sample tasks")]
fn sample_board(world: &mut FilteringWorld) -> Result<(), eyre::Report> {
    let react = run_async(world.board.add_task("Learn React"))
        .wrap_err("add first sample task")?
        .ok_or_else(|| eyre::eyre!("first sample task rejected"))?;
    let js = run_async(world.board.add_task("Learn JS"))
        .wrap_err("add second sample task")?
        .ok_or_else(|| eyre::eyre!("second sample task rejected"))?;

    run_async(world.board.toggle_task(react)).wrap_err("complete first sample task")?;
    run_async(world.board.recolor_task(react, Some(TaskColor::Green)))
        .wrap_err("color first sample task")?;
    run_async(world.board.recolor_task(js, Some(TaskColor::Red)))
        .wrap_err("color second sample task")?;
    Ok(())
}
