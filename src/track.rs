use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::TrackError;

/// A single note's timing within a track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteSpec {
    /// The second in the session at which this note should be judged.
    pub target_time: f64,
}

/// An ordered schedule of note timings.
///
/// The engine requires `target_time` to be non-decreasing across the
/// sequence. Loaders either call [`sort_notes`](Self::sort_notes) to
/// normalize authored data, or leave the track as-is and let
/// [`validate`](Self::validate) reject it at session start. An unsorted
/// track is a configuration error, not something the engine recovers
/// from mid-session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackDefinition {
    pub notes: Vec<NoteSpec>,
}

impl TrackDefinition {
    pub fn new(notes: Vec<NoteSpec>) -> Self {
        Self { notes }
    }

    /// Build a track from raw target times, in the given order.
    pub fn from_times(times: impl IntoIterator<Item = f64>) -> Self {
        Self {
            notes: times
                .into_iter()
                .map(|target_time| NoteSpec { target_time })
                .collect(),
        }
    }

    /// Parse a track from its JSON exchange format:
    /// `{"notes": [{"target_time": 0.5}, ...]}`.
    pub fn from_json(json: &str) -> Result<Self, TrackError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a track from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read track file: {}", path.display()))?;
        let track = Self::from_json(&json)
            .with_context(|| format!("failed to parse track file: {}", path.display()))?;
        Ok(track)
    }

    /// Check the track invariants: every time finite and non-negative,
    /// and the sequence non-decreasing.
    pub fn validate(&self) -> Result<(), TrackError> {
        let mut previous = 0.0_f64;
        for (index, note) in self.notes.iter().enumerate() {
            let time = note.target_time;
            if !time.is_finite() || time < 0.0 {
                return Err(TrackError::InvalidTime { index, time });
            }
            if index > 0 && time < previous {
                return Err(TrackError::NotSorted {
                    index,
                    time,
                    previous,
                });
            }
            previous = time;
        }
        Ok(())
    }

    /// Re-sort notes by target time in place.
    pub fn sort_notes(&mut self) {
        self.notes
            .sort_by(|a, b| a.target_time.total_cmp(&b.target_time));
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
