use std::sync::Arc;

use log::debug;
use thiserror::Error;

use crate::RunOutcome;
use crate::game::{Clock, GameSession};
use crate::journal::{InputJournal, InputPayload, JOURNAL_FORMAT_VERSION};
use crate::types::{GameError, GenerationError};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error(
        "journal format version {found} is not supported (expected {expected})",
        expected = JOURNAL_FORMAT_VERSION
    )]
    UnsupportedVersion { found: u16 },

    #[error("journal header does not generate a map: {0}")]
    Generation(#[from] GenerationError),

    #[error("input #{seq} was rejected on replay: {source}")]
    RejectedInput {
        seq: u64,
        #[source]
        source: GameError,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_outcome: Option<RunOutcome>,
    pub final_snapshot_hash: u64,
    pub turn_count: u32,
    pub clear_count: u32,
    pub inputs_applied: usize,
}

/// Rebuilds the session from the journal header and re-applies every recorded input.
pub fn replay_session(
    journal: &InputJournal,
    clock: Arc<dyn Clock>,
) -> Result<GameSession, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedVersion { found: journal.format_version });
    }

    let mut session = GameSession::with_clock(journal.session_config(), clock)?;
    for record in &journal.inputs {
        match &record.payload {
            InputPayload::Move { direction } => {
                session.submit_move(*direction);
            }
            InputPayload::BulkMove { sequence } => {
                session.submit_bulk_moves(sequence);
            }
            InputPayload::PlaceTrap => {
                session.place_trap();
            }
            // Generation is a pure function of the stream position, so a failure
            // here repeats the one the live session saw.
            InputPayload::Restart => {
                if let Err(err) = session.restart() {
                    debug!("input #{} regenerated nothing: {err}", record.seq);
                }
            }
            InputPayload::SetDifficulty { difficulty } => {
                match session.set_difficulty(*difficulty) {
                    Ok(_) => {}
                    Err(GameError::Generation(err)) => {
                        debug!("input #{} regenerated nothing: {err}", record.seq);
                    }
                    Err(source) => {
                        return Err(ReplayError::RejectedInput { seq: record.seq, source });
                    }
                }
            }
        }
    }
    Ok(session)
}

pub fn replay_to_end(
    journal: &InputJournal,
    clock: Arc<dyn Clock>,
) -> Result<ReplayResult, ReplayError> {
    let session = replay_session(journal, clock)?;
    Ok(ReplayResult {
        final_outcome: session.outcome(),
        final_snapshot_hash: session.snapshot_hash(),
        turn_count: session.turn_count(),
        clear_count: session.clear_count(),
        inputs_applied: journal.inputs.len(),
    })
}
