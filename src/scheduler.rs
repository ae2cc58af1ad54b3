use crate::track::{NoteSpec, TrackDefinition};

/// Converts elapsed session time into due notes.
///
/// Keeps a cursor into the (pre-sorted) track: because specs are sorted
/// and the lead time is constant, due-ness is monotonic in `t`, so the
/// cursor only ever moves forward and every spec is emitted exactly once.
#[derive(Debug, Clone)]
pub struct NoteScheduler {
    specs: Vec<NoteSpec>,
    cursor: usize,
    lead_time: f64,
}

impl NoteScheduler {
    /// Build a scheduler over the track's specs.
    ///
    /// `lead_time` is the travel interval between a note's spawn and its
    /// target judgment time, derived from presentation speed/distance by
    /// the caller.
    pub fn new(track: &TrackDefinition, lead_time: f64) -> Self {
        Self {
            specs: track.notes.clone(),
            cursor: 0,
            lead_time,
        }
    }

    /// Pop every remaining spec whose spawn moment has arrived, in order.
    ///
    /// A spec is due once `target_time - lead_time <= t`. However large
    /// the elapsed step was, everything that became due during it is
    /// returned; no spec is ever skipped or re-emitted.
    pub fn advance_to(&mut self, t: f64) -> Vec<NoteSpec> {
        let start = self.cursor;
        while self.cursor < self.specs.len()
            && self.specs[self.cursor].target_time - self.lead_time <= t
        {
            self.cursor += 1;
        }
        self.specs[start..self.cursor].to_vec()
    }

    /// Whether every spec has been emitted.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.specs.len()
    }

    /// Number of specs not yet emitted.
    pub fn pending(&self) -> usize {
        self.specs.len() - self.cursor
    }
}
