use std::fmt;

use crate::model::ids::QuizId;

/// Experience granted per correctly answered question.
///
/// Shared by the attempt result screen and the progress ledger.
pub const XP_PER_CORRECT_ANSWER: u64 = 50;

/// Experience needed to climb one level.
pub const XP_PER_LEVEL: u64 = 1000;

/// Experience earned for a raw quiz score.
#[must_use]
pub fn xp_for_score(score: u32) -> u64 {
    u64::from(score).saturating_mul(XP_PER_CORRECT_ANSWER)
}

/// Level for a total amount of experience: one level per 1000 XP, starting at 1.
#[must_use]
pub fn level_for_xp(xp: u64) -> u32 {
    u32::try_from(xp / XP_PER_LEVEL)
        .unwrap_or(u32::MAX - 1)
        .saturating_add(1)
}

//
// ─── RANK ──────────────────────────────────────────────────────────────────────
//

/// Player rank, derived from level through a saturating lookup table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Quantum,
    Observer,
    Explorer,
    Master,
    Supernova,
}

impl Rank {
    /// Ordered rank table; level 1 maps to the first entry.
    pub const TABLE: [Rank; 5] = [
        Rank::Quantum,
        Rank::Observer,
        Rank::Explorer,
        Rank::Master,
        Rank::Supernova,
    ];

    /// Rank for a level. Levels past the table keep the highest rank.
    #[must_use]
    pub fn for_level(level: u32) -> Self {
        let index = usize::try_from(level.saturating_sub(1)).unwrap_or(usize::MAX);
        Self::TABLE[index.min(Self::TABLE.len() - 1)]
    }

    /// Display label, as persisted in the snapshot.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Rank::Quantum => "Квант",
            Rank::Observer => "Наблюдатель",
            Rank::Explorer => "Исследователь",
            Rank::Master => "Магистр",
            Rank::Supernova => "Сверхновая",
        }
    }
}

impl Default for Rank {
    fn default() -> Self {
        Self::TABLE[0]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

/// Cumulative player progress: experience, level, rank and quiz history.
///
/// Level and rank are cached copies derived from `xp`; they are never set
/// independently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    xp: u64,
    level: u32,
    rank: Rank,
    completed_quizzes: Vec<QuizId>,
}

impl Progress {
    /// Fresh progress for a first launch.
    #[must_use]
    pub fn new() -> Self {
        Self::from_persisted(0, Vec::new())
    }

    /// Rehydrate progress from persisted values.
    ///
    /// Level and rank are recomputed from `xp` so a stale snapshot cannot
    /// disagree with its own experience.
    #[must_use]
    pub fn from_persisted(xp: u64, completed_quizzes: Vec<QuizId>) -> Self {
        let level = level_for_xp(xp);
        Self {
            xp,
            level,
            rank: Rank::for_level(level),
            completed_quizzes,
        }
    }

    /// Apply a finished attempt: grant experience, recompute level and rank,
    /// and append the quiz to the history.
    ///
    /// Repeated completions of the same quiz are not deduplicated.
    ///
    /// Returns the experience gained.
    pub fn record_completion(&mut self, score: u32, quiz_id: QuizId) -> u64 {
        let gained = xp_for_score(score);
        self.xp = self.xp.saturating_add(gained);
        self.level = level_for_xp(self.xp);
        self.rank = Rank::for_level(self.level);
        self.completed_quizzes.push(quiz_id);
        gained
    }

    #[must_use]
    pub fn xp(&self) -> u64 {
        self.xp
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub fn completed_quizzes(&self) -> &[QuizId] {
        &self.completed_quizzes
    }

    /// How many times `quiz_id` has been completed.
    #[must_use]
    pub fn completions(&self, quiz_id: &QuizId) -> usize {
        self.completed_quizzes
            .iter()
            .filter(|done| *done == quiz_id)
            .count()
    }

    /// Experience accumulated inside the current level.
    #[must_use]
    pub fn xp_into_level(&self) -> u64 {
        self.xp % XP_PER_LEVEL
    }

    /// Experience still needed to reach the next level.
    #[must_use]
    pub fn xp_to_next_level(&self) -> u64 {
        XP_PER_LEVEL - self.xp_into_level()
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_progress_is_first_rank_level_one() {
        let progress = Progress::default();
        assert_eq!(progress.xp(), 0);
        assert_eq!(progress.level(), 1);
        assert_eq!(progress.rank(), Rank::Quantum);
        assert_eq!(progress.rank().label(), "Квант");
        assert!(progress.completed_quizzes().is_empty());
    }

    #[test]
    fn level_buckets_are_one_thousand_xp() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(999), 1);
        assert_eq!(level_for_xp(1000), 2);
        assert_eq!(level_for_xp(4500), 5);
    }

    #[test]
    fn rank_saturates_past_table() {
        assert_eq!(Rank::for_level(1), Rank::Quantum);
        assert_eq!(Rank::for_level(2), Rank::Observer);
        assert_eq!(Rank::for_level(5), Rank::Supernova);
        assert_eq!(Rank::for_level(10), Rank::Supernova);
        assert_eq!(Rank::for_level(u32::MAX), Rank::Supernova);
    }

    #[test]
    fn rank_level_zero_maps_to_first_rank() {
        assert_eq!(Rank::for_level(0), Rank::Quantum);
    }

    #[test]
    fn xp_gain_is_multiple_of_fifty() {
        assert_eq!(xp_for_score(0), 0);
        assert_eq!(xp_for_score(1), 50);
        assert_eq!(xp_for_score(7), 350);
    }

    #[test]
    fn record_completion_updates_xp_level_rank() {
        let mut progress = Progress::from_persisted(950, Vec::new());
        let gained = progress.record_completion(2, QuizId::new("math-base"));
        assert_eq!(gained, 100);
        assert_eq!(progress.xp(), 1050);
        assert_eq!(progress.level(), 2);
        assert_eq!(progress.rank(), Rank::Observer);
        assert_eq!(progress.completed_quizzes(), &[QuizId::new("math-base")]);
    }

    #[test]
    fn record_completion_keeps_duplicates() {
        let mut progress = Progress::new();
        let quiz = QuizId::new("ai-intro");
        progress.record_completion(2, quiz.clone());
        progress.record_completion(2, quiz.clone());
        assert_eq!(progress.xp(), 200);
        assert_eq!(progress.completions(&quiz), 2);
        assert_eq!(progress.completed_quizzes(), &[quiz.clone(), quiz]);
    }

    #[test]
    fn from_persisted_recomputes_level_and_rank() {
        let progress = Progress::from_persisted(4500, vec![QuizId::new("a")]);
        assert_eq!(progress.level(), 5);
        assert_eq!(progress.rank(), Rank::Supernova);
        assert_eq!(progress.completions(&QuizId::new("a")), 1);
        assert_eq!(progress.completions(&QuizId::new("b")), 0);
    }

    #[test]
    fn xp_to_next_level() {
        let progress = Progress::from_persisted(1250, Vec::new());
        assert_eq!(progress.xp_into_level(), 250);
        assert_eq!(progress.xp_to_next_level(), 750);
    }
}
