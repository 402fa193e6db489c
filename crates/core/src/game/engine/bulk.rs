use super::*;

impl GameSession {
    /// Plays a string of `u`/`d`/`l`/`r` codes as consecutive moves.
    pub fn submit_bulk_moves(&mut self, sequence: &str) -> SessionView {
        self.record(InputPayload::BulkMove { sequence: sequence.to_string() });
        self.apply_bulk_moves(sequence);
        self.view()
    }

    /// Unknown codes are skipped. Stops at the first blocked move, or before
    /// the next recognised code once the session is terminal.
    pub(crate) fn apply_bulk_moves(&mut self, sequence: &str) -> BulkReport {
        let mut applied = 0;
        for direction in sequence.chars().filter_map(Direction::from_code) {
            match self.apply_move(direction) {
                MoveOutcome::Accepted => applied += 1,
                MoveOutcome::Blocked => {
                    return BulkReport { applied, stopped: Some(BulkStop::Blocked) };
                }
                MoveOutcome::Ignored => {
                    return BulkReport { applied, stopped: Some(BulkStop::Terminal) };
                }
            }
        }
        BulkReport { applied, stopped: None }
    }
}
