use quantum_core::model::{Progress, XP_PER_LEVEL};

/// Numbers shown in the level badge and the home XP card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub xp: u64,
    pub level: u32,
    pub rank: &'static str,
    pub completed: usize,
    /// Percent of the current level already earned, 0..=100.
    pub level_percent: u32,
    pub xp_to_next: u64,
}

#[must_use]
pub fn map_progress(progress: &Progress) -> ProgressVm {
    let into_level = progress.xp_into_level();
    let level_percent = u32::try_from(into_level * 100 / XP_PER_LEVEL).unwrap_or(100);
    ProgressVm {
        xp: progress.xp(),
        level: progress.level(),
        rank: progress.rank().label(),
        completed: progress.completed_quizzes().len(),
        level_percent,
        xp_to_next: progress.xp_to_next_level(),
    }
}
