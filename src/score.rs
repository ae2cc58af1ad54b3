use crate::judge::Accuracy;

/// Combo and score state updated by verdicts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub score: u32,
    pub combo: u32,
    pub max_combo: u32,
    pub perfect_count: u32,
    pub good_count: u32,
    pub miss_count: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, accuracy: Accuracy) {
        self.score += accuracy.score_value();

        match accuracy {
            Accuracy::Perfect => {
                self.perfect_count += 1;
                self.combo += 1;
            }
            Accuracy::Good => {
                self.good_count += 1;
                self.combo += 1;
            }
            Accuracy::Miss => {
                self.miss_count += 1;
                self.combo = 0;
            }
        }

        self.max_combo = self.max_combo.max(self.combo);
    }

    /// Total verdicts recorded so far.
    pub fn resolved_notes(&self) -> u32 {
        self.perfect_count + self.good_count + self.miss_count
    }

    /// Score as a percentage of the maximum for `total_notes`.
    ///
    /// A zero-note track is a trivially complete run: 100.0 by
    /// convention, since the natural formula divides by zero.
    pub fn percentage(&self, total_notes: u32) -> f64 {
        if total_notes == 0 {
            return 100.0;
        }
        let max_score = total_notes as f64 * 100.0;
        (self.score as f64 / max_score) * 100.0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_scores_100_and_extends_combo() {
        let mut board = ScoreBoard::new();
        board.apply(Accuracy::Perfect);

        assert_eq!(board.score, 100);
        assert_eq!(board.combo, 1);
        assert_eq!(board.max_combo, 1);
        assert_eq!(board.perfect_count, 1);
    }

    #[test]
    fn good_scores_50_and_extends_combo() {
        let mut board = ScoreBoard::new();
        board.apply(Accuracy::Good);

        assert_eq!(board.score, 50);
        assert_eq!(board.combo, 1);
        assert_eq!(board.good_count, 1);
    }

    #[test]
    fn miss_resets_combo_but_keeps_score() {
        let mut board = ScoreBoard::new();
        board.apply(Accuracy::Perfect);
        board.apply(Accuracy::Good);
        board.apply(Accuracy::Miss);

        assert_eq!(board.score, 150);
        assert_eq!(board.combo, 0);
        assert_eq!(board.max_combo, 2);
        assert_eq!(board.miss_count, 1);
    }

    #[test]
    fn max_combo_survives_later_misses() {
        let mut board = ScoreBoard::new();
        for _ in 0..5 {
            board.apply(Accuracy::Perfect);
        }
        board.apply(Accuracy::Miss);
        for _ in 0..3 {
            board.apply(Accuracy::Good);
        }

        assert_eq!(board.max_combo, 5);
        assert_eq!(board.combo, 3);
    }

    #[test]
    fn percentage_of_full_run() {
        let mut board = ScoreBoard::new();
        board.apply(Accuracy::Perfect);
        board.apply(Accuracy::Good);
        board.apply(Accuracy::Miss);

        // 150 / 300 = 50%.
        assert_eq!(board.percentage(3), 50.0);
    }

    #[test]
    fn percentage_of_empty_track_is_complete() {
        let board = ScoreBoard::new();
        assert_eq!(board.percentage(0), 100.0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut board = ScoreBoard::new();
        board.apply(Accuracy::Perfect);
        board.apply(Accuracy::Miss);
        board.reset();

        assert_eq!(board, ScoreBoard::default());
    }
}
