use crate::active::{ActiveNoteSet, NoteInstance};

/// Terminal verdict for a single note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accuracy {
    Perfect,
    Good,
    Miss,
}

impl Accuracy {
    /// Score contribution of this verdict.
    pub fn score_value(self) -> u32 {
        match self {
            Self::Perfect => 100,
            Self::Good => 50,
            Self::Miss => 0,
        }
    }

    /// Whether this verdict resets the combo.
    pub fn breaks_combo(self) -> bool {
        matches!(self, Self::Miss)
    }
}

/// Timing configuration for a session.
///
/// `lead_time` is the note travel interval before the judgment point,
/// derived from presentation speed/distance by the host. The tolerance
/// windows classify an input's offset from a note's target time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JudgeConfig {
    pub lead_time: f64,
    pub perfect_window: f64,
    pub good_window: f64,
}

impl JudgeConfig {
    /// Default windows of the shop minigame: 80ms perfect, 150ms good.
    pub fn normal() -> Self {
        Self {
            lead_time: 1.0,
            perfect_window: 0.08,
            good_window: 0.15,
        }
    }

    pub fn builder() -> JudgeConfigBuilder {
        JudgeConfigBuilder::default()
    }

    /// Check that every constant is finite and non-negative and that
    /// `perfect_window < good_window`.
    pub fn validate(&self) -> Result<(), &'static str> {
        for value in [self.lead_time, self.perfect_window, self.good_window] {
            if !value.is_finite() || value < 0.0 {
                return Err("timing constants must be finite and non-negative");
            }
        }
        if self.perfect_window >= self.good_window {
            return Err("perfect_window must be smaller than good_window");
        }
        Ok(())
    }
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self::normal()
    }
}

#[derive(Debug, Default)]
pub struct JudgeConfigBuilder {
    lead_time: Option<f64>,
    perfect_window: Option<f64>,
    good_window: Option<f64>,
}

impl JudgeConfigBuilder {
    pub fn lead_time(mut self, seconds: f64) -> Self {
        self.lead_time = Some(seconds);
        self
    }

    pub fn perfect_window(mut self, seconds: f64) -> Self {
        self.perfect_window = Some(seconds);
        self
    }

    pub fn good_window(mut self, seconds: f64) -> Self {
        self.good_window = Some(seconds);
        self
    }

    pub fn build(self) -> JudgeConfig {
        let default = JudgeConfig::normal();
        JudgeConfig {
            lead_time: self.lead_time.unwrap_or(default.lead_time),
            perfect_window: self.perfect_window.unwrap_or(default.perfect_window),
            good_window: self.good_window.unwrap_or(default.good_window),
        }
    }
}

/// Resolves one input timestamp against the active set.
#[derive(Debug, Clone)]
pub struct HitJudge {
    config: JudgeConfig,
}

impl Default for HitJudge {
    fn default() -> Self {
        Self::new(JudgeConfig::normal())
    }
}

impl HitJudge {
    pub fn new(config: JudgeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JudgeConfig {
        &self.config
    }

    /// Judge a single input against the active set.
    ///
    /// Selects the note nearest in time to `input_time` (ties prefer the
    /// earlier note) and classifies the offset. An offset outside the
    /// good window yields no verdict and consumes nothing: the selected
    /// note stays active for a later input or its own deadline. An empty
    /// active set also yields no verdict.
    pub fn judge(
        &self,
        active: &mut ActiveNoteSet,
        input_time: f64,
    ) -> Option<(NoteInstance, Accuracy)> {
        let index = active.nearest_index(input_time)?;
        let note = active.get(index)?;
        let offset = (note.target_time - input_time).abs();

        let accuracy = if offset <= self.config.perfect_window {
            Accuracy::Perfect
        } else if offset <= self.config.good_window {
            Accuracy::Good
        } else {
            return None;
        };

        Some((active.resolve(index), accuracy))
    }
}
