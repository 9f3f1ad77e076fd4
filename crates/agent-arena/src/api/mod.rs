//! Remote arena API access

pub mod client;
pub mod payload;

pub use client::ArenaClient;
pub use payload::{RawLeaderboardEntry, RawPosition};

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Relative endpoint of the leaderboard
pub const LEADERBOARD_ENDPOINT: &str = "/leaderboard";

/// Read-only source of arena JSON documents
///
/// Implementations append `endpoint` to their base URL and return the decoded
/// body. There is no retry at this layer; a timeout surfaces as the same
/// [`ArenaError::RemoteFetch`](crate::ArenaError::RemoteFetch) as any other
/// transport failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArenaSource: Send + Sync {
    /// GET `endpoint` and decode the JSON body
    async fn fetch(&self, endpoint: &str) -> Result<Value>;
}
