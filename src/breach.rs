//! Tracks where the opponent has breached our edge.
//!
//! The host calls the action-frame hook many times per turn; each frame may
//! carry breach events. Every breach scored *against us* is appended to a
//! chronological log that lives for the whole match, and the defense planner
//! re-derives a turret target from every logged breach on every turn.

use crate::config::*;
use crate::location::*;
use log::*;
use serde_json::Value;
use thiserror::Error;

/// Failures while reading an action-frame payload.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("malformed action frame: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("action frame carries no breach event list")]
    MissingBreachEvents,
}

/// Append-only log of cells where we were scored on.
#[derive(Clone, Debug, Default)]
pub struct BreachTracker {
    scored_on: Vec<Location>,
}

impl BreachTracker {
    pub fn new() -> BreachTracker {
        BreachTracker::default()
    }

    /// Record a breach if the breaching unit belonged to the opponent.
    /// Breaches by our own units (scoring on them) are not defense signals.
    pub fn record_breach(&mut self, location: Location, unit_owner: Player) {
        if unit_owner == Player::Opponent {
            debug!("scored on at [{}, {}]", location.x(), location.y());
            self.scored_on.push(location);
        }
    }

    /// All recorded breach cells, in chronological order.
    pub fn breaches(&self) -> &[Location] {
        &self.scored_on
    }

    /// Turret build target for every recorded breach: one row inward from
    /// the breach cell, so the turret does not block our own edge spawns.
    pub fn reactive_targets(&self) -> Vec<Location> {
        self.scored_on
            .iter()
            .filter_map(|location| location.offset(0, 1))
            .collect()
    }

    /// Extract breach events from a serialized action-frame payload.
    ///
    /// Malformed individual entries are skipped with a warning; a payload
    /// without a breach event list is an error the caller absorbs. Returns
    /// the number of breaches recorded from this frame.
    pub fn ingest_frame(&mut self, payload: &str) -> Result<usize, FrameError> {
        let frame: Value = serde_json::from_str(payload)?;
        let breaches = frame
            .get("events")
            .and_then(|events| events.get("breach"))
            .and_then(Value::as_array)
            .ok_or(FrameError::MissingBreachEvents)?;

        let before = self.scored_on.len();
        for entry in breaches {
            match parse_breach(entry) {
                Some((location, unit_owner)) => self.record_breach(location, unit_owner),
                None => warn!("skipping malformed breach event: {}", entry),
            }
        }
        Ok(self.scored_on.len() - before)
    }
}

/// One breach entry is an array; index 0 is the `[x, y]` cell and index 4 the
/// owner of the breaching unit (1 = us, 2 = opponent).
fn parse_breach(entry: &Value) -> Option<(Location, Player)> {
    let fields = entry.as_array()?;
    let location: Location = serde_json::from_value(fields.first()?.clone()).ok()?;
    let unit_owner = Player::from_owner(fields.get(4)?.as_u64()?)?;
    Some((location, unit_owner))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(x: u32, y: u32) -> Location {
        Location::from_coords(x, y)
    }

    fn frame(breaches: &str) -> String {
        format!(r#"{{"events": {{"breach": {}}}}}"#, breaches)
    }

    #[test]
    fn records_only_opponent_breaches_in_order() {
        let mut tracker = BreachTracker::new();
        // Two breaches against us, one of our own units scoring on them.
        let recorded = tracker
            .ingest_frame(&frame(
                r#"[
                    [[5, 13], 0, 3, "a", 2],
                    [[13, 27], 0, 3, "b", 1],
                    [[20, 13], 0, 4, "c", 2]
                ]"#,
            ))
            .unwrap();
        assert_eq!(recorded, 2);
        assert_eq!(tracker.breaches(), &[loc(5, 13), loc(20, 13)]);
    }

    #[test]
    fn reactive_targets_sit_one_row_inward() {
        let mut tracker = BreachTracker::new();
        tracker.record_breach(loc(5, 13), Player::Opponent);
        tracker.record_breach(loc(20, 13), Player::Opponent);
        tracker.record_breach(loc(3, 10), Player::Us);
        assert_eq!(tracker.reactive_targets(), vec![loc(5, 14), loc(20, 14)]);
    }

    #[test]
    fn malformed_entries_are_skipped_not_fatal() {
        let mut tracker = BreachTracker::new();
        let recorded = tracker
            .ingest_frame(&frame(
                r#"[
                    "not-an-array",
                    [[1, 2]],
                    [[99, 99], 0, 3, "a", 2],
                    [[6, 13], 0, 3, "b", 7],
                    [[7, 13], 0, 3, "c", 2]
                ]"#,
            ))
            .unwrap();
        assert_eq!(recorded, 1);
        assert_eq!(tracker.breaches(), &[loc(7, 13)]);
    }

    #[test]
    fn payload_without_breach_list_is_an_error() {
        let mut tracker = BreachTracker::new();
        assert!(matches!(
            tracker.ingest_frame(r#"{"turnInfo": [1, 0, 0]}"#),
            Err(FrameError::MissingBreachEvents)
        ));
        assert!(matches!(
            tracker.ingest_frame("not json"),
            Err(FrameError::Parse(_))
        ));
        assert!(tracker.breaches().is_empty());
    }
}
