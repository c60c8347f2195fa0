//! Computer-vs-computer games printed as plain text.

use anyhow::{Result, bail};
use std::io::Write;
use tictactoe_core::{GameEvent, Mode, Outcome, RandomSource, Session, TracingObserver};
use tracing::{info, instrument};

/// Plays the selector against itself, writing each move and board to `out`.
///
/// Returns the final outcome.
#[instrument(skip_all)]
pub fn watch<R: RandomSource>(rng: R, out: &mut impl Write) -> Result<Outcome> {
    // Human-vs-human so the session never auto-replies; both sides are
    // driven explicitly through `computer_move`.
    let mut session = Session::new(Mode::HumanVsHuman, rng);
    session.subscribe(TracingObserver);

    info!("Watching computer vs computer");
    writeln!(out, "{}\n", session.state().board().display())?;

    for _ in 0..9 {
        for event in session.computer_move() {
            if let GameEvent::MovePlayed { player, coord, rule } = event {
                let why = rule.map(|r| format!(" ({r})")).unwrap_or_default();
                writeln!(out, "{player} plays {}{why}", coord.label())?;
                writeln!(out, "{}\n", session.state().board().display())?;
            }
        }

        if let Some(outcome) = session.state().outcome() {
            writeln!(out, "{outcome}")?;
            return Ok(outcome);
        }
    }

    bail!("Game did not finish after nine moves")
}
