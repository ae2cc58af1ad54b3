use std::collections::VecDeque;
use std::fmt;

use log::{debug, info};

use crate::active::ActiveNoteSet;
use crate::error::SessionError;
use crate::judge::{Accuracy, HitJudge, JudgeConfig};
use crate::scheduler::NoteScheduler;
use crate::score::ScoreBoard;
use crate::track::TrackDefinition;

/// Liveness signal from the presentation collaborator (audio/visual
/// playback). The session keeps running while this reports `true`, even
/// after the last note has resolved.
pub trait Presentation {
    fn is_active(&self) -> bool;
}

impl<F: Fn() -> bool> Presentation for F {
    fn is_active(&self) -> bool {
        self()
    }
}

/// Session lifecycle phase.
///
/// `Ended` is transient: the session folds back to `Idle` within the
/// same `tick` call, after the completion callback has fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Active,
    Ended,
}

impl Phase {
    fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Active => "Active",
            Self::Ended => "Ended",
        }
    }
}

type CompletionCallback = Box<dyn FnOnce(f64)>;

/// Final outcome of a completed run, kept queryable after the
/// completion callback has fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaySummary {
    pub score: u32,
    pub max_combo: u32,
    pub perfect_count: u32,
    pub good_count: u32,
    pub miss_count: u32,
    pub total_notes: u32,
    pub percentage: f64,
}

impl fmt::Display for PlaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% (score {}, max combo {}, {}/{}/{} of {} notes)",
            self.percentage,
            self.score,
            self.max_combo,
            self.perfect_count,
            self.good_count,
            self.miss_count,
            self.total_notes,
        )
    }
}

/// Tick-driven rhythm session.
///
/// The host owns one `GameSession` and drives it with [`tick`](Self::tick)
/// once per frame and [`input`](Self::input) whenever the player acts.
/// Inputs are queued and applied at the next tick boundary, after expiry
/// and spawning, so a run is reproducible from its `(dt, inputs)`
/// sequence alone. On completion the callback passed to
/// [`start`](Self::start) fires exactly once with the final percentage.
#[derive(Default)]
pub struct GameSession {
    phase: Phase,
    elapsed: f64,
    scheduler: Option<NoteScheduler>,
    active: ActiveNoteSet,
    judge: HitJudge,
    score: ScoreBoard,
    total_notes: u32,
    pending_inputs: VecDeque<f64>,
    on_complete: Option<CompletionCallback>,
    last_summary: Option<PlaySummary>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a run over `track`.
    ///
    /// Legal only from `Idle`. Validates the track and config, resets
    /// every counter, and moves to `Active`. `on_complete` fires exactly
    /// once with the final score percentage, unless the run is aborted.
    pub fn start(
        &mut self,
        track: &TrackDefinition,
        config: JudgeConfig,
        on_complete: impl FnOnce(f64) + 'static,
    ) -> Result<(), SessionError> {
        if self.phase != Phase::Idle {
            return Err(self.invalid_state("start"));
        }

        track.validate()?;
        config
            .validate()
            .map_err(|reason| SessionError::InvalidConfig { reason })?;

        self.elapsed = 0.0;
        self.scheduler = Some(NoteScheduler::new(track, config.lead_time));
        self.active.clear();
        self.judge = HitJudge::new(config);
        self.score.reset();
        self.total_notes = track.len() as u32;
        self.pending_inputs.clear();
        self.on_complete = Some(Box::new(on_complete));
        self.last_summary = None;
        self.phase = Phase::Active;

        info!("session started: {} notes", self.total_notes);
        Ok(())
    }

    /// Advance the session clock by `dt` seconds.
    ///
    /// Within one call, in fixed order: overdue notes miss, newly due
    /// notes spawn, queued inputs are judged in arrival order, and the
    /// end condition is checked against the presentation signal.
    pub fn tick(&mut self, dt: f64, presentation: &impl Presentation) -> Result<(), SessionError> {
        if self.phase != Phase::Active {
            return Err(self.invalid_state("tick"));
        }
        if !dt.is_finite() || dt < 0.0 {
            return Err(SessionError::InvalidTimestamp { value: dt });
        }

        self.elapsed += dt;
        let now = self.elapsed;

        // 1. Overdue notes miss first, so one note can never be both
        //    auto-missed and hit within the same tick.
        for note in self.active.expire_to(now) {
            debug!(
                "missed note at {:.3}s (deadline {:.3})",
                note.target_time, note.deadline
            );
            self.score.apply(Accuracy::Miss);
        }

        // 2. Spawn everything that became due during this step.
        let good_window = self.judge.config().good_window;
        if let Some(scheduler) = self.scheduler.as_mut() {
            for spec in scheduler.advance_to(now) {
                debug!("spawned note targeting {:.3}s", spec.target_time);
                self.active.spawn(spec, now, good_window);
            }
        }

        // 3. Judge queued inputs in arrival order.
        while let Some(timestamp) = self.pending_inputs.pop_front() {
            if let Some((note, accuracy)) = self.judge.judge(&mut self.active, timestamp) {
                debug!(
                    "{:?} on note at {:.3}s (input {:.3}s)",
                    accuracy, note.target_time, timestamp
                );
                self.score.apply(accuracy);
            } else {
                debug!("input at {:.3}s hit nothing", timestamp);
            }
        }

        // 4. End once the schedule is drained, nothing is active, and
        //    the presentation has stopped.
        let exhausted = self.scheduler.as_ref().is_none_or(|s| s.is_exhausted());
        if exhausted && self.active.is_empty() && !presentation.is_active() {
            self.phase = Phase::Ended;
            self.finish();
        }

        Ok(())
    }

    /// Queue a player input at the given session-time coordinate.
    ///
    /// Judged at the next `tick` boundary, after expiry and spawning for
    /// that tick, in arrival order.
    pub fn input(&mut self, timestamp: f64) -> Result<(), SessionError> {
        if self.phase != Phase::Active {
            return Err(self.invalid_state("input"));
        }
        if !timestamp.is_finite() || timestamp < 0.0 {
            return Err(SessionError::InvalidTimestamp { value: timestamp });
        }

        self.pending_inputs.push_back(timestamp);
        Ok(())
    }

    /// Cancel the run without invoking the completion callback.
    pub fn abort(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Active {
            return Err(self.invalid_state("abort"));
        }

        info!("session aborted at {:.3}s", self.elapsed);
        self.scheduler = None;
        self.active.clear();
        self.pending_inputs.clear();
        self.score.reset();
        self.on_complete = None;
        self.elapsed = 0.0;
        self.phase = Phase::Idle;
        Ok(())
    }

    fn finish(&mut self) {
        let percentage = self.score.percentage(self.total_notes);
        let summary = PlaySummary {
            score: self.score.score,
            max_combo: self.score.max_combo,
            perfect_count: self.score.perfect_count,
            good_count: self.score.good_count,
            miss_count: self.score.miss_count,
            total_notes: self.total_notes,
            percentage,
        };
        info!("session complete: {}", summary);

        self.last_summary = Some(summary);
        self.scheduler = None;
        self.phase = Phase::Idle;

        // The callback is taken out before it runs, so it can fire at
        // most once per session.
        if let Some(on_complete) = self.on_complete.take() {
            on_complete(percentage);
        }
    }

    fn invalid_state(&self, operation: &'static str) -> SessionError {
        SessionError::InvalidState {
            operation,
            phase: self.phase.name(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Session time in seconds since `start`.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Live scoring state of the current run.
    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    /// Notes currently eligible for judging.
    pub fn active_notes(&self) -> usize {
        self.active.len()
    }

    /// Outcome of the most recently completed run, if any.
    pub fn last_summary(&self) -> Option<&PlaySummary> {
        self.last_summary.as_ref()
    }
}
