//! Timing engine for the shop rhythm minigame.
//!
//! A host drives one [`GameSession`] with `tick(dt)` once per frame and
//! `input(timestamp)` whenever the player acts. The session releases
//! notes from a pre-sorted [`TrackDefinition`] with a configurable lead
//! time, matches inputs against the active notes within tolerance
//! windows, tracks combo and score, and reports a final percentage
//! through a single-shot completion callback.
//!
//! The engine is presentation-agnostic: it operates on abstract
//! timestamps only. Rendering, audio playback, and persistence belong to
//! the host.

pub mod active;
pub mod error;
pub mod judge;
pub mod scheduler;
pub mod score;
pub mod session;
pub mod track;

pub use active::{ActiveNoteSet, NoteInstance};
pub use error::{SessionError, TrackError};
pub use judge::{Accuracy, HitJudge, JudgeConfig, JudgeConfigBuilder};
pub use scheduler::NoteScheduler;
pub use score::ScoreBoard;
pub use session::{GameSession, Phase, PlaySummary, Presentation};
pub use track::{NoteSpec, TrackDefinition};
