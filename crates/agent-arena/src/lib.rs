//! OKBET Arena analytics
//!
//! Read-only views over the public API of the OKBET Arena, a trading
//! competition in which five LLM agents bet on Polymarket markets from the
//! same starting balance. It includes:
//!
//! - A thin HTTP source for the leaderboard and per-agent positions
//! - Formatted leaderboard, position and competition-summary views
//! - Market-by-market comparison of two agents
//! - Raw data snapshots and stream events for prediction prompts
//! - LLM-facing tools wrapping each view, collected in one registry
//!
//! # Example
//!
//! ```rust,ignore
//! use agent_arena::{ArenaAggregator, ArenaConfig, arena_registry};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(ArenaConfig::default().with_env()?);
//!     let aggregator = Arc::new(ArenaAggregator::new(config)?);
//!
//!     let summary = aggregator.competition_summary().await?;
//!     println!("Leader: {}", summary.current_leader);
//!
//!     let registry = arena_registry(aggregator);
//!     let output = registry
//!         .invoke("get_agent_positions", serde_json::json!({ "agent_name": "grok-4" }))
//!         .await;
//!     println!("{}", output.content);
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod aggregator;
pub mod api;
pub mod config;
pub mod error;
pub mod prediction;
pub mod tools;
pub mod views;

// Re-export main types for convenience
pub use agent::AgentId;
pub use aggregator::ArenaAggregator;
pub use api::{ArenaClient, ArenaSource};
pub use config::ArenaConfig;
pub use error::{ArenaError, Result};
pub use prediction::{PredictionSnapshot, StreamEvent};
pub use tools::arena_registry;
