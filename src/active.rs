use crate::track::NoteSpec;

/// A spawned note awaiting judgment.
///
/// Lives in the [`ActiveNoteSet`] from spawn until it is hit or its
/// deadline passes; each instance resolves exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteInstance {
    /// The scheduled judgment moment, copied from the spec.
    pub target_time: f64,
    /// Session time at which the note was spawned.
    pub spawn_time: f64,
    /// `target_time + good_window`; past this the note auto-misses.
    pub deadline: f64,
    /// Set when the note leaves the active set with a terminal verdict.
    pub resolved: bool,
}

/// The working set of spawned, not-yet-resolved notes.
///
/// Notes are pushed in spawn order (which is target-time order, since the
/// track is sorted), so the earliest note is always at the front.
#[derive(Debug, Clone, Default)]
pub struct ActiveNoteSet {
    notes: Vec<NoteInstance>,
}

impl ActiveNoteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a note for `spec` at session time `now`.
    pub fn spawn(&mut self, spec: NoteSpec, now: f64, good_window: f64) {
        self.notes.push(NoteInstance {
            target_time: spec.target_time,
            spawn_time: now,
            deadline: spec.target_time + good_window,
            resolved: false,
        });
    }

    /// Resolve every note whose deadline has passed as a Miss.
    ///
    /// Removed instances are returned, marked resolved, in target-time
    /// order, for the caller to feed into scoring.
    pub fn expire_to(&mut self, t: f64) -> Vec<NoteInstance> {
        let mut missed = Vec::new();
        self.notes.retain(|note| {
            if note.deadline <= t {
                let mut note = *note;
                note.resolved = true;
                missed.push(note);
                false
            } else {
                true
            }
        });
        missed
    }

    /// Index of the unresolved note nearest in time to `input_time`.
    ///
    /// Ties prefer the earlier target time; since notes are stored in
    /// spawn order, a strict comparison keeps the first candidate.
    pub fn nearest_index(&self, input_time: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, note) in self.notes.iter().enumerate() {
            let distance = (note.target_time - input_time).abs();
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Remove and return the note at `index`, marked resolved.
    pub fn resolve(&mut self, index: usize) -> NoteInstance {
        let mut note = self.notes.remove(index);
        note.resolved = true;
        note
    }

    pub fn get(&self, index: usize) -> Option<&NoteInstance> {
        self.notes.get(index)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }
}
