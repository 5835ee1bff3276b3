use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorStats {
    seed_elections: usize,
    trials: usize,
    eliminations: usize,
    growth_events: usize,
    last_growth_trial: Option<usize>,
}

impl EstimatorStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a full-population election run during the seed phase
    pub fn bump_seed_elections(&mut self) {
        self.seed_elections += 1
    }

    /// Record a random-subset trial of the main loop
    pub fn bump_trials(&mut self) {
        self.trials += 1
    }

    /// Record the elimination rounds of one IRV election
    pub fn bump_eliminations(&mut self, rounds: usize) {
        self.eliminations += rounds
    }

    /// Record that trial `trial` produced a winner outside the current set
    pub fn record_growth(&mut self, trial: usize) {
        self.growth_events += 1;
        self.last_growth_trial = Some(trial);
    }

    pub fn get_seed_elections(&self) -> usize {
        self.seed_elections
    }

    pub fn get_trials(&self) -> usize {
        self.trials
    }

    pub fn get_eliminations(&self) -> usize {
        self.eliminations
    }

    pub fn get_growth_events(&self) -> usize {
        self.growth_events
    }

    pub fn get_last_growth_trial(&self) -> Option<usize> {
        self.last_growth_trial
    }

    /// Sums the counters of two runs. The last growth trial is the later of the two.
    pub fn merge(&self, other: &Self) -> Self {
        EstimatorStats {
            seed_elections: self.seed_elections + other.seed_elections,
            trials: self.trials + other.trials,
            eliminations: self.eliminations + other.eliminations,
            growth_events: self.growth_events + other.growth_events,
            last_growth_trial: self.last_growth_trial.max(other.last_growth_trial),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_initialized_to_zero() {
        let stats = EstimatorStats::new();
        assert_eq!(stats.get_seed_elections(), 0);
        assert_eq!(stats.get_trials(), 0);
        assert_eq!(stats.get_eliminations(), 0);
        assert_eq!(stats.get_growth_events(), 0);
        assert_eq!(stats.get_last_growth_trial(), None);
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(EstimatorStats::default(), EstimatorStats::new());
    }

    #[test]
    fn test_bump_trials_multiple_times() {
        let mut stats = EstimatorStats::new();
        stats.bump_trials();
        stats.bump_trials();
        stats.bump_trials();
        assert_eq!(stats.get_trials(), 3);
        assert_eq!(stats.get_seed_elections(), 0);
    }

    #[test]
    fn test_bump_eliminations_accumulates() {
        let mut stats = EstimatorStats::new();
        stats.bump_eliminations(5);
        stats.bump_eliminations(0);
        stats.bump_eliminations(3);
        assert_eq!(stats.get_eliminations(), 8);
    }

    #[test]
    fn test_record_growth_tracks_latest_trial() {
        let mut stats = EstimatorStats::new();
        stats.record_growth(4);
        stats.record_growth(17);
        assert_eq!(stats.get_growth_events(), 2);
        assert_eq!(stats.get_last_growth_trial(), Some(17));
    }

    #[test]
    fn test_merge_sums_counters() {
        let mut first = EstimatorStats::new();
        first.bump_seed_elections();
        first.bump_trials();
        first.bump_eliminations(10);
        first.record_growth(0);

        let mut second = EstimatorStats::new();
        second.bump_trials();
        second.bump_trials();
        second.bump_eliminations(2);

        let merged = first.merge(&second);
        assert_eq!(merged.get_seed_elections(), 1);
        assert_eq!(merged.get_trials(), 3);
        assert_eq!(merged.get_eliminations(), 12);
        assert_eq!(merged.get_growth_events(), 1);
        assert_eq!(merged.get_last_growth_trial(), Some(0));
    }

    #[test]
    fn test_serializes_to_json() {
        let mut stats = EstimatorStats::new();
        stats.bump_trials();
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["trials"], 1);
        assert_eq!(json["last_growth_trial"], serde_json::Value::Null);
    }
}
