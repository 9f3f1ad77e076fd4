//! The arena data aggregator
//!
//! A pure read-through layer: each call fetches fresh data from the
//! [`ArenaSource`], validates it and folds it into a view. Multi-agent calls
//! fetch concurrently and fail as a whole if any single fetch fails.
//! Dropping a returned future cancels every fetch it started.

use crate::agent::AgentId;
use crate::api::payload::{envelope_array, parse_leaderboard, parse_positions};
use crate::api::{ArenaClient, ArenaSource, LEADERBOARD_ENDPOINT, RawLeaderboardEntry, RawPosition};
use crate::config::ArenaConfig;
use crate::error::Result;
use crate::prediction::PredictionSnapshot;
use crate::views::{
    AgentPositionSummary, AgentPositions, AllPositions, ComparisonResult, CompetitionSummary,
    LeaderboardView,
};
use futures::future::try_join_all;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

/// Computes leaderboard, position, comparison and summary views
#[derive(Clone)]
pub struct ArenaAggregator {
    source: Arc<dyn ArenaSource>,
    config: Arc<ArenaConfig>,
}

impl ArenaAggregator {
    /// Aggregator backed by the HTTP client
    pub fn new(config: Arc<ArenaConfig>) -> Result<Self> {
        config.validate()?;
        let client = ArenaClient::new(Arc::clone(&config))?;
        Ok(Self::with_source(Arc::new(client), config))
    }

    /// Aggregator reading from any source
    pub fn with_source(source: Arc<dyn ArenaSource>, config: Arc<ArenaConfig>) -> Self {
        Self { source, config }
    }

    /// Configuration in use
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Raw leaderboard entries, as ranked by the remote
    pub async fn leaderboard(&self) -> Result<Vec<RawLeaderboardEntry>> {
        let payload = self.source.fetch(LEADERBOARD_ENDPOINT).await?;
        parse_leaderboard(payload, LEADERBOARD_ENDPOINT)
    }

    /// Raw open positions of one agent
    pub async fn positions(&self, agent: AgentId) -> Result<Vec<RawPosition>> {
        let endpoint = agent.positions_endpoint();
        let payload = self.source.fetch(&endpoint).await?;
        parse_positions(payload, &endpoint)
    }

    /// Formatted leaderboard
    #[instrument(skip(self))]
    pub async fn leaderboard_view(&self) -> Result<LeaderboardView> {
        let entries = self.leaderboard().await?;
        info!(entries = entries.len(), "Leaderboard fetched");
        Ok(LeaderboardView::from_entries(&entries, self.config.initial_balance))
    }

    /// Positions and totals of one agent
    ///
    /// The identifier is validated before any request is made.
    #[instrument(skip(self))]
    pub async fn agent_positions(&self, agent: &str) -> Result<AgentPositions> {
        let agent = self.config.parse_agent(agent)?;
        let positions = self.positions(agent).await?;
        info!(%agent, positions = positions.len(), "Agent positions fetched");
        Ok(AgentPositions::new(agent, &positions))
    }

    /// Positions of every configured agent
    ///
    /// All agents are fetched concurrently; one failure fails the call.
    #[instrument(skip(self))]
    pub async fn all_positions(&self) -> Result<AllPositions> {
        let fetched = self.positions_of_all().await?;
        info!(agents = fetched.len(), "All positions fetched");

        Ok(fetched
            .iter()
            .map(|(agent, positions)| (*agent, AgentPositionSummary::new(*agent, positions)))
            .collect())
    }

    /// Compare two agents' positions market by market
    ///
    /// Both identifiers are validated before any request. The same agent may
    /// be given twice, in which case every position is common.
    #[instrument(skip(self))]
    pub async fn compare_positions(&self, agent1: &str, agent2: &str) -> Result<ComparisonResult> {
        let first = self.config.parse_agent(agent1)?;
        let second = self.config.parse_agent(agent2)?;

        let (positions1, positions2) =
            tokio::try_join!(self.positions(first), self.positions(second))?;

        let result = ComparisonResult::compare(agent1, &positions1, agent2, &positions2);
        info!(
            opposite = result.opposite.len(),
            common = result.common.len(),
            agent1_only = result.agent1_only.len(),
            agent2_only = result.agent2_only.len(),
            "Positions compared"
        );
        Ok(result)
    }

    /// Leaderboard with gaps to the leader and superlatives
    #[instrument(skip(self))]
    pub async fn competition_summary(&self) -> Result<CompetitionSummary> {
        let entries = self.leaderboard().await?;
        CompetitionSummary::from_entries(
            &entries,
            self.config.initial_balance,
            &self.config.competition_end_date,
        )
    }

    /// Leaderboard and every agent's positions, untouched, in one join
    ///
    /// This is the document a prediction prompt is built from.
    #[instrument(skip(self))]
    pub async fn prediction_snapshot(&self) -> Result<PredictionSnapshot> {
        let leaderboard = async {
            let payload = self.source.fetch(LEADERBOARD_ENDPOINT).await?;
            envelope_array(payload, LEADERBOARD_ENDPOINT, "leaderboard")
        };

        let positions = try_join_all(self.config.agents.iter().map(|&agent| async move {
            let endpoint = agent.positions_endpoint();
            let payload = self.source.fetch(&endpoint).await?;
            Ok::<_, crate::ArenaError>((agent, envelope_array(payload, &endpoint, "positions")?))
        }));

        let (leaderboard, positions): (Vec<Value>, Vec<(AgentId, Vec<Value>)>) =
            tokio::try_join!(leaderboard, positions)?;
        info!(
            entries = leaderboard.len(),
            agents = positions.len(),
            "Prediction snapshot fetched"
        );

        Ok(PredictionSnapshot::new(leaderboard, positions.into_iter().collect()))
    }

    async fn positions_of_all(&self) -> Result<Vec<(AgentId, Vec<RawPosition>)>> {
        try_join_all(self.config.agents.iter().map(|&agent| async move {
            Ok::<_, crate::ArenaError>((agent, self.positions(agent).await?))
        }))
        .await
    }
}
