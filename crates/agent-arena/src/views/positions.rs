//! Single-agent and all-agent position views

use crate::agent::AgentId;
use crate::api::RawPosition;
use crate::views::{AgentMap, money, pnl, rounded};
use serde::Serialize;
use tracing::warn;

/// Tolerance before a position's P&L is reported as inconsistent
const PNL_DRIFT_TOLERANCE: f64 = 0.01;

/// One formatted open position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionRow {
    pub market_title: String,
    pub outcome: String,
    pub entry_price: Option<f64>,
    pub current_price: Option<f64>,
    pub shares: String,
    pub amount_invested: String,
    pub current_value: String,
    pub unrealized_pnl: String,
    pub opened_at: Option<String>,
}

impl From<&RawPosition> for PositionRow {
    fn from(p: &RawPosition) -> Self {
        Self {
            market_title: p.market_title.clone(),
            outcome: p.outcome.clone(),
            entry_price: p.entry_price,
            current_price: p.current_price,
            shares: money(p.shares),
            amount_invested: money(p.amount_invested),
            current_value: money(p.current_value),
            unrealized_pnl: pnl(p.unrealized_pnl),
            opened_at: p.opened_at.clone(),
        }
    }
}

/// Compact position record used when listing every agent at once
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionBrief {
    pub market_title: String,
    pub outcome: String,
    pub amount_invested: String,
    pub unrealized_pnl: String,
}

impl From<&RawPosition> for PositionBrief {
    fn from(p: &RawPosition) -> Self {
        Self {
            market_title: p.market_title.clone(),
            outcome: p.outcome.clone(),
            amount_invested: money(p.amount_invested),
            unrealized_pnl: pnl(p.unrealized_pnl),
        }
    }
}

/// Sum of invested amounts and unrealized P&L, as the rows display them
///
/// Each term is rounded to its displayed precision first, so the totals agree
/// with the sum of the listed rows.
fn totals(positions: &[RawPosition]) -> (f64, f64) {
    positions.iter().fold((0.0, 0.0), |(invested, unrealized), p| {
        (
            invested + rounded(p.amount_invested, 2),
            unrealized + rounded(p.unrealized_pnl, 4),
        )
    })
}

fn check_consistency(agent: AgentId, positions: &[RawPosition]) {
    for p in positions {
        let drift = p.pnl_drift();
        if drift.abs() > PNL_DRIFT_TOLERANCE {
            warn!(
                %agent,
                market = %p.market_title,
                drift,
                "Unrealized P&L differs from current value minus amount invested"
            );
        }
    }
}

/// Every open position of one agent, with totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentPositions {
    pub agent: AgentId,
    pub position_count: usize,
    pub total_invested: String,
    pub total_unrealized_pnl: String,
    pub positions: Vec<PositionRow>,
}

impl AgentPositions {
    pub fn new(agent: AgentId, positions: &[RawPosition]) -> Self {
        check_consistency(agent, positions);
        let (invested, unrealized) = totals(positions);

        Self {
            agent,
            position_count: positions.len(),
            total_invested: money(invested),
            total_unrealized_pnl: pnl(unrealized),
            positions: positions.iter().map(PositionRow::from).collect(),
        }
    }
}

/// One agent's entry in the all-positions view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentPositionSummary {
    pub position_count: usize,
    pub total_invested: String,
    pub total_unrealized_pnl: String,
    pub positions: Vec<PositionBrief>,
}

impl AgentPositionSummary {
    pub fn new(agent: AgentId, positions: &[RawPosition]) -> Self {
        check_consistency(agent, positions);
        let (invested, unrealized) = totals(positions);

        Self {
            position_count: positions.len(),
            total_invested: money(invested),
            total_unrealized_pnl: pnl(unrealized),
            positions: positions.iter().map(PositionBrief::from).collect(),
        }
    }
}

/// Positions of every configured agent, keyed by agent identifier
pub type AllPositions = AgentMap<AgentPositionSummary>;

#[cfg(test)]
mod tests {
    use super::*;

    fn position(title: &str, invested: f64, value: f64) -> RawPosition {
        RawPosition {
            market_title: title.to_string(),
            outcome: "Yes".to_string(),
            entry_price: Some(0.4),
            current_price: Some(0.45),
            shares: 25.0,
            amount_invested: invested,
            current_value: value,
            unrealized_pnl: value - invested,
            opened_at: Some("2025-12-02T08:30:00Z".to_string()),
        }
    }

    #[test]
    fn test_empty_positions() {
        let view = AgentPositions::new(AgentId::Grok4, &[]);
        assert_eq!(view.position_count, 0);
        assert_eq!(view.total_invested, "0.00");
        assert_eq!(view.total_unrealized_pnl, "0.0000");
        assert!(view.positions.is_empty());
    }

    #[test]
    fn test_totals_match_rows() {
        let positions = vec![
            position("A", 10.0, 11.25),
            position("B", 5.555, 4.0),
            position("C", 2.5, 2.5),
        ];
        let view = AgentPositions::new(AgentId::Gpt51, &positions);

        assert_eq!(view.position_count, 3);
        let invested: f64 = view
            .positions
            .iter()
            .map(|r| r.amount_invested.parse::<f64>().unwrap())
            .sum();
        let unrealized: f64 = view
            .positions
            .iter()
            .map(|r| r.unrealized_pnl.parse::<f64>().unwrap())
            .sum();
        assert_eq!(view.total_invested, money(invested));
        assert_eq!(view.total_unrealized_pnl, pnl(unrealized));
    }

    #[test]
    fn test_midpoint_amounts_round_up_in_rows_and_totals() {
        let positions = vec![position("A", 0.125, 0.125), position("B", 0.375, 0.375)];
        let view = AgentPositions::new(AgentId::Grok4, &positions);

        assert_eq!(view.positions[0].amount_invested, "0.13");
        assert_eq!(view.positions[1].amount_invested, "0.38");
        assert_eq!(view.total_invested, "0.51");
    }

    #[test]
    fn test_row_precision() {
        let row = PositionRow::from(&position("A", 10.0, 10.123_456));
        assert_eq!(row.amount_invested, "10.00");
        assert_eq!(row.current_value, "10.12");
        assert_eq!(row.unrealized_pnl, "0.1235");
        assert_eq!(row.shares, "25.00");
        assert_eq!(row.entry_price, Some(0.4));
    }

    #[test]
    fn test_summary_uses_brief_rows() {
        let summary = AgentPositionSummary::new(AgentId::DeepseekR1, &[position("A", 3.0, 4.0)]);
        assert_eq!(summary.position_count, 1);
        assert_eq!(summary.total_invested, "3.00");
        assert_eq!(summary.total_unrealized_pnl, "1.0000");

        let value = serde_json::to_value(&summary.positions[0]).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "market_title": "A",
                "outcome": "Yes",
                "amount_invested": "3.00",
                "unrealized_pnl": "1.0000"
            })
        );
    }
}
