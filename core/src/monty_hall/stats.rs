use alloc::format;
use alloc::string::String;
use serde::{Deserialize, Serialize};

use super::Decision;

/// Session-wide counters. They only ever grow until the owning engine is
/// dropped.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    games_played: u32,
    switch_attempts: u32,
    switch_wins: u32,
    stay_attempts: u32,
    stay_wins: u32,
}

impl SessionStats {
    pub const fn games_played(&self) -> u32 {
        self.games_played
    }

    pub const fn switch_attempts(&self) -> u32 {
        self.switch_attempts
    }

    pub const fn switch_wins(&self) -> u32 {
        self.switch_wins
    }

    pub const fn stay_attempts(&self) -> u32 {
        self.stay_attempts
    }

    pub const fn stay_wins(&self) -> u32 {
        self.stay_wins
    }

    /// Fraction of switch rounds won, `0.0` before any switch.
    pub fn switch_win_rate(&self) -> f64 {
        win_rate(self.switch_wins, self.switch_attempts)
    }

    /// Fraction of stay rounds won, `0.0` before any stay.
    pub fn stay_win_rate(&self) -> f64 {
        win_rate(self.stay_wins, self.stay_attempts)
    }

    pub(super) fn record(&mut self, decision: Decision, won: bool) {
        self.games_played = self.games_played.saturating_add(1);
        let (attempts, wins) = match decision {
            Decision::Switch => (&mut self.switch_attempts, &mut self.switch_wins),
            Decision::Stay => (&mut self.stay_attempts, &mut self.stay_wins),
        };
        *attempts = attempts.saturating_add(1);
        if won {
            *wins = wins.saturating_add(1);
        }
    }
}

fn win_rate(wins: u32, attempts: u32) -> f64 {
    if attempts == 0 {
        0.0
    } else {
        f64::from(wins) / f64::from(attempts)
    }
}

/// Formats a rate as a percentage with one decimal, e.g. `0.6667` -> `"66.7"`.
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}", rate * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_are_zero_without_attempts() {
        let stats = SessionStats::default();

        assert_eq!(stats.switch_win_rate(), 0.0);
        assert_eq!(stats.stay_win_rate(), 0.0);
        assert_eq!(format_percent(stats.stay_win_rate()), "0.0");
    }

    #[test]
    fn record_splits_counters_by_decision() {
        let mut stats = SessionStats::default();
        stats.record(Decision::Switch, true);
        stats.record(Decision::Switch, true);
        stats.record(Decision::Switch, false);
        stats.record(Decision::Stay, false);

        assert_eq!(stats.games_played(), 4);
        assert_eq!(stats.switch_attempts(), 3);
        assert_eq!(stats.switch_wins(), 2);
        assert_eq!(stats.stay_attempts(), 1);
        assert_eq!(stats.stay_wins(), 0);
        assert_eq!(format_percent(stats.switch_win_rate()), "66.7");
    }

    #[test]
    fn counters_saturate() {
        let mut stats = SessionStats {
            games_played: u32::MAX,
            switch_attempts: u32::MAX,
            switch_wins: u32::MAX,
            ..Default::default()
        };
        stats.record(Decision::Switch, true);

        assert_eq!(stats.games_played(), u32::MAX);
        assert_eq!(stats.switch_wins(), u32::MAX);
    }
}
