use std::sync::Arc;

use of_api::{JoinRequest, SessionService};
use reqwest::{Proxy, StatusCode};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::errors::Result;
use crate::request::{LegacyJoinRequest, is_legacy_join};
use crate::response::{JoinOutcome, LegacyResponse};

/// What happened to an intercepted request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interception {
    /// Not a legacy join; let the request go out unchanged
    NotApplicable,
    /// Answered locally with a synthesized legacy body
    Handled(LegacyResponse),
}

/// Answers legacy `joinserver.jsp` calls using the modern session service
#[derive(Clone)]
pub struct LegacyAuthTranslator {
    service: Arc<dyn SessionService>,
}

impl LegacyAuthTranslator {
    pub fn new(service: Arc<dyn SessionService>) -> Self {
        Self { service }
    }

    /// Handle `url` if it is a legacy join, otherwise decline
    #[instrument(skip(self, url, proxy), fields(path = url.path()))]
    pub async fn intercept(&self, url: &Url, proxy: Option<&Proxy>) -> Result<Interception> {
        if !is_legacy_join(url) {
            return Ok(Interception::NotApplicable);
        }

        debug!("Intercepted legacy join request");
        let request = LegacyJoinRequest::from_url(url)?;
        let outcome = self.join(&request, proxy).await?;

        Ok(Interception::Handled(outcome.into()))
    }

    /// Perform the modern equivalent of a legacy join
    #[instrument(skip(self, request, proxy), fields(user = %request.user))]
    pub async fn join(&self, request: &LegacyJoinRequest, proxy: Option<&Proxy>) -> Result<JoinOutcome> {
        let access_token = request.access_token()?;

        let Some(profile_id) = self.service.resolve_id(&request.user, proxy).await? else {
            warn!("No profile found for legacy join");
            return Ok(JoinOutcome::UnknownUser(request.user.clone()));
        };

        let join = JoinRequest {
            access_token: access_token.to_string(),
            selected_profile: profile_id,
            server_id: request.server_id.clone(),
        };

        let status = self.service.join_server(&join, proxy).await?;
        if status == StatusCode::NO_CONTENT {
            debug!("Session service accepted join");
            Ok(JoinOutcome::Accepted)
        } else {
            warn!(%status, "Session service rejected join");
            Ok(JoinOutcome::Rejected)
        }
    }
}
