//! Leaderboard view

use crate::api::RawLeaderboardEntry;
use crate::views::{money, percent};
use serde::Serialize;
use tracing::warn;

/// One formatted leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub name: String,
    pub llm_name: Option<String>,
    /// Initial balance plus total P&L
    pub balance: String,
    pub total_pnl: String,
    pub win_rate: String,
    pub total_trades: u64,
    pub winning_trades: u64,
    pub losing_trades: u64,
    pub open_positions: u64,
    pub polymarket_profile: Option<String>,
}

impl LeaderboardRow {
    fn from_entry(entry: &RawLeaderboardEntry, initial_balance: f64) -> Self {
        if entry.winning_trades + entry.losing_trades != entry.total_trades {
            warn!(
                agent = %entry.display_name,
                total = entry.total_trades,
                winning = entry.winning_trades,
                losing = entry.losing_trades,
                "Trade counts do not add up"
            );
        }

        Self {
            rank: entry.rank,
            name: entry.display_name.clone(),
            llm_name: entry.llm_name.clone(),
            balance: money(initial_balance + entry.total_pnl),
            total_pnl: money(entry.total_pnl),
            win_rate: percent(entry.win_rate),
            total_trades: entry.total_trades,
            winning_trades: entry.winning_trades,
            losing_trades: entry.losing_trades,
            open_positions: entry.open_positions,
            polymarket_profile: entry.polymarket_profile.clone(),
        }
    }
}

/// The leaderboard in the order the remote ranked it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardView {
    pub leaderboard: Vec<LeaderboardRow>,
}

impl LeaderboardView {
    /// Format raw entries; order is preserved, never re-sorted
    pub fn from_entries(entries: &[RawLeaderboardEntry], initial_balance: f64) -> Self {
        Self {
            leaderboard: entries
                .iter()
                .map(|e| LeaderboardRow::from_entry(e, initial_balance))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rank: u32, name: &str, pnl: f64) -> RawLeaderboardEntry {
        RawLeaderboardEntry {
            rank,
            display_name: name.to_string(),
            llm_name: Some(format!("{name}-llm")),
            total_pnl: pnl,
            win_rate: 62.5,
            total_trades: 8,
            winning_trades: 5,
            losing_trades: 3,
            open_positions: 4,
            polymarket_profile: Some(format!("https://polymarket.com/@{name}")),
        }
    }

    #[test]
    fn test_row_formatting() {
        let view = LeaderboardView::from_entries(&[entry(1, "Grok 4", 12.3456)], 250.0);
        let row = &view.leaderboard[0];

        assert_eq!(row.rank, 1);
        assert_eq!(row.name, "Grok 4");
        assert_eq!(row.balance, "262.35");
        assert_eq!(row.total_pnl, "12.35");
        assert_eq!(row.win_rate, "62.5%");
        assert_eq!(row.total_trades, 8);
        assert_eq!(row.open_positions, 4);
    }

    #[test]
    fn test_midpoint_values_round_up() {
        let mut raw = entry(3, "Gemini 3 Pro", 0.125);
        raw.win_rate = 6.25;
        let view = LeaderboardView::from_entries(&[raw], 250.0);
        let row = &view.leaderboard[0];

        assert_eq!(row.total_pnl, "0.13");
        assert_eq!(row.balance, "250.13");
        assert_eq!(row.win_rate, "6.3%");
    }

    #[test]
    fn test_negative_pnl_balance() {
        let view = LeaderboardView::from_entries(&[entry(5, "DeepSeek R1", -40.0)], 250.0);
        assert_eq!(view.leaderboard[0].balance, "210.00");
        assert_eq!(view.leaderboard[0].total_pnl, "-40.00");
    }

    #[test]
    fn test_order_is_preserved() {
        // Deliberately out of rank order: the view must not re-sort
        let entries = vec![entry(2, "B", 5.0), entry(1, "A", 10.0)];
        let view = LeaderboardView::from_entries(&entries, 250.0);
        let names: Vec<_> = view.leaderboard.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_serialized_shape() {
        let view = LeaderboardView::from_entries(&[entry(1, "A", 0.0)], 250.0);
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["leaderboard"][0]["balance"], "250.00");
        assert_eq!(value["leaderboard"][0]["llm_name"], "A-llm");
    }
}
