//! Built-in strategy engines.

mod first_free;
mod line_hunter;
mod random;

pub use first_free::FirstFree;
pub use line_hunter::LineHunter;
pub use random::RandomMover;

use crate::config::EngineKind;
use cops_robber_core::{Engine, EngineError, ScriptedEngine, Side};
use tracing::instrument;

/// Builds the engine selected by `kind` for `side`.
///
/// Random engines are seeded with `seed` for the cops and `seed + 1` for
/// the robber, so a seeded match is reproducible without both sides
/// drawing the same sequence.
#[instrument]
pub fn build_engine(
    kind: &EngineKind,
    side: Side,
    seed: Option<u64>,
) -> Result<Box<dyn Engine>, EngineError> {
    let engine: Box<dyn Engine> = match kind {
        EngineKind::FirstFree => Box::new(FirstFree),
        EngineKind::Random => {
            let seed = seed.map(|seed| match side {
                Side::Cops => seed,
                Side::Robber => seed.wrapping_add(1),
            });
            Box::new(RandomMover::new(seed))
        }
        EngineKind::LineHunter => Box::new(LineHunter::new(side)),
        EngineKind::Scripted { moves } => Box::new(ScriptedEngine::from_cells(moves.clone())),
    };
    Ok(engine)
}
