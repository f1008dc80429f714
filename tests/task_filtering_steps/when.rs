//! When steps for task filtering BDD scenarios.

use super::world::{FilteringWorld, run_async};
use eyre::WrapErr;
use jotter::board::domain::{StatusFilter, TaskColor};
use jotter::board::services::FilterPreferences;
use rstest_bdd_macros::when;
use std::sync::Arc;

#[when(r#"the status filter is set to "{status}""#)]
fn set_status_filter(world: &mut FilteringWorld, status: String) -> Result<(), eyre::Report> {
    let parsed = StatusFilter::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    run_async(world.preferences.set_status(parsed)).wrap_err("persist status filter")?;
    Ok(())
}

#[when(r#"the search text is set to "{search}""#)]
fn set_search_text(world: &mut FilteringWorld, search: String) -> Result<(), eyre::Report> {
    run_async(world.preferences.set_search(search)).wrap_err("persist search text")?;
    Ok(())
}

#[when(r#"the color filter "{color}" is toggled on"#)]
fn toggle_color_filter(world: &mut FilteringWorld, color: String) -> Result<(), eyre::Report> {
    let parsed = TaskColor::try_from(color.as_str())
        .map_err(|err| eyre::eyre!("invalid color in scenario: {err}"))?;
    let added = run_async(world.preferences.toggle_color(parsed)).wrap_err("toggle color")?;
    if !added {
        return Err(eyre::eyre!("color {color:?} was already enabled"));
    }
    Ok(())
}

#[when("the preferences are reloaded from the store")]
fn reload_preferences(world: &mut FilteringWorld) -> Result<(), eyre::Report> {
    world.preferences = run_async(FilterPreferences::load(Arc::clone(&world.store)))
        .wrap_err("reload preferences from store")?;
    Ok(())
}
