//! Given steps for issue intake BDD scenarios.

use super::world::{IntakeWorld, open_registry, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("a fresh issue registry")]
fn fresh_registry(world: &mut IntakeWorld) -> Result<(), eyre::Report> {
    world.repository = Some(open_registry().wrap_err("open registry")?);
    Ok(())
}

#[given(r#"a queue named "{name}""#)]
fn queue_named(world: &mut IntakeWorld, name: String) -> Result<(), eyre::Report> {
    run_async(world.repository()?.create_queue(&name)).wrap_err("create queue")?;
    Ok(())
}
