use reqwest::{Proxy, StatusCode};

use crate::errors::Result;
use crate::models::JoinRequest;

/// The two session calls needed to stand in for a legacy join
#[async_trait::async_trait]
pub trait SessionService: Send + Sync {
    /// Resolve a username to its profile id, `None` if no such player exists
    async fn resolve_id(&self, username: &str, proxy: Option<&Proxy>) -> Result<Option<String>>;

    /// Post a join request and report the status the session service answered with
    async fn join_server(&self, request: &JoinRequest, proxy: Option<&Proxy>) -> Result<StatusCode>;
}
