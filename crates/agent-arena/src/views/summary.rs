//! Competition-wide summary

use crate::api::RawLeaderboardEntry;
use crate::error::{ArenaError, Result};
use crate::views::{money, percent};
use serde::Serialize;

/// One agent's standing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub rank: u32,
    pub name: String,
    pub balance: String,
    pub pnl: String,
    /// Leader's P&L minus this entry's; `"0.00"` for the leader
    pub gap_to_leader: String,
    pub win_rate: String,
    pub trades: u64,
    pub open_positions: u64,
}

/// Superlatives, by display name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyStats {
    pub highest_win_rate: String,
    pub most_trades: String,
    pub most_open_positions: String,
}

/// Leaderboard annotated with gaps and superlatives
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitionSummary {
    pub competition_end_date: String,
    pub initial_balance: f64,
    pub current_leader: String,
    pub rankings: Vec<Ranking>,
    pub key_stats: KeyStats,
}

/// First entry holding the maximum key
///
/// Strictly-greater comparison, so ties keep the earliest entry.
fn first_max_by<T, K, F>(items: &[T], key: F) -> Option<&T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let (first, rest) = items.split_first()?;
    Some(rest.iter().fold(first, |best, item| {
        if key(item) > key(best) { item } else { best }
    }))
}

impl CompetitionSummary {
    /// Summarize a leaderboard already ordered by the remote
    ///
    /// The first entry is the leader; entries are not re-sorted, so a gap can
    /// only be negative if the input was out of order.
    pub fn from_entries(
        entries: &[RawLeaderboardEntry],
        initial_balance: f64,
        competition_end_date: &str,
    ) -> Result<Self> {
        let leader = entries.first().ok_or(ArenaError::EmptyLeaderboard)?;

        let rankings = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let gap = if idx == 0 {
                    0.0
                } else {
                    leader.total_pnl - entry.total_pnl
                };

                Ranking {
                    rank: entry.rank,
                    name: entry.display_name.clone(),
                    balance: money(initial_balance + entry.total_pnl),
                    pnl: money(entry.total_pnl),
                    gap_to_leader: money(gap),
                    win_rate: percent(entry.win_rate),
                    trades: entry.total_trades,
                    open_positions: entry.open_positions,
                }
            })
            .collect();

        let name_of = |found: Option<&RawLeaderboardEntry>| {
            found.map_or_else(|| leader.display_name.clone(), |e| e.display_name.clone())
        };

        let key_stats = KeyStats {
            highest_win_rate: name_of(first_max_by(entries, |e| e.win_rate)),
            most_trades: name_of(first_max_by(entries, |e| e.total_trades)),
            most_open_positions: name_of(first_max_by(entries, |e| e.open_positions)),
        };

        Ok(Self {
            competition_end_date: competition_end_date.to_string(),
            initial_balance,
            current_leader: leader.display_name.clone(),
            rankings,
            key_stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const END: &str = "January 31, 2026 23:59:59 UTC";

    fn entry(rank: u32, name: &str, pnl: f64, win_rate: f64, trades: u64, open: u64) -> RawLeaderboardEntry {
        RawLeaderboardEntry {
            rank,
            display_name: name.to_string(),
            llm_name: None,
            total_pnl: pnl,
            win_rate,
            total_trades: trades,
            winning_trades: 0,
            losing_trades: trades,
            open_positions: open,
            polymarket_profile: None,
        }
    }

    #[test]
    fn test_empty_leaderboard() {
        let err = CompetitionSummary::from_entries(&[], 250.0, END).unwrap_err();
        assert!(matches!(err, ArenaError::EmptyLeaderboard));
    }

    #[test]
    fn test_superlative_tie_break() {
        let entries = vec![
            entry(1, "A", 30.0, 0.80, 10, 2),
            entry(2, "B", 20.0, 0.90, 5, 5),
            entry(3, "C", 10.0, 0.90, 12, 1),
        ];
        let summary = CompetitionSummary::from_entries(&entries, 250.0, END).unwrap();

        assert_eq!(summary.key_stats.highest_win_rate, "B");
        assert_eq!(summary.key_stats.most_trades, "C");
        assert_eq!(summary.key_stats.most_open_positions, "B");
    }

    #[test]
    fn test_gap_to_leader() {
        let entries = vec![
            entry(1, "Grok 4", 42.5, 60.0, 20, 3),
            entry(2, "GPT-5.1", 30.25, 55.0, 18, 4),
            entry(3, "DeepSeek R1", -12.0, 40.0, 9, 1),
        ];
        let summary = CompetitionSummary::from_entries(&entries, 250.0, END).unwrap();

        assert_eq!(summary.current_leader, "Grok 4");
        assert_eq!(summary.rankings[0].gap_to_leader, "0.00");
        assert_eq!(summary.rankings[1].gap_to_leader, "12.25");
        assert_eq!(summary.rankings[2].gap_to_leader, "54.50");
        assert_eq!(summary.rankings[2].balance, "238.00");
        assert_eq!(summary.rankings[1].win_rate, "55.0%");

        for ranking in &summary.rankings {
            assert!(ranking.gap_to_leader.parse::<f64>().unwrap() >= 0.0);
        }
    }

    #[test]
    fn test_context_fields() {
        let summary =
            CompetitionSummary::from_entries(&[entry(1, "A", 0.0, 0.0, 0, 0)], 250.0, END).unwrap();
        assert_eq!(summary.competition_end_date, END);
        assert!((summary.initial_balance - 250.0).abs() < f64::EPSILON);
        assert_eq!(summary.key_stats.highest_win_rate, "A");

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["initial_balance"], 250.0);
        assert_eq!(value["rankings"][0]["gap_to_leader"], "0.00");
    }

    #[test]
    fn test_first_max_by() {
        let values = [3, 7, 7, 1];
        let idx = first_max_by(&values, |v| *v).map(|v| std::ptr::from_ref(v));
        assert_eq!(idx, Some(std::ptr::from_ref(&values[1])));
        assert!(first_max_by::<i32, i32, _>(&[], |v| *v).is_none());
    }
}
