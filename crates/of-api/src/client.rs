use base64::{Engine, prelude::BASE64_STANDARD};
use reqwest::{Client, Proxy, StatusCode};
use tracing::{debug, instrument};

use crate::config::{ApiServers, OnlineFixConfig};
use crate::errors::{ApiError, Result};
use crate::models::*;
use crate::service::SessionService;

/// Client for the Mojang account and session APIs
#[derive(Debug, Clone)]
pub struct MojangApi {
    config: OnlineFixConfig,
    http: Client,
}

impl MojangApi {
    /// Create a new API client
    pub fn new(config: OnlineFixConfig) -> Result<Self> {
        let http = Self::builder(&config).build()?;
        Ok(Self { config, http })
    }

    pub fn servers(&self) -> &ApiServers {
        &self.config.servers
    }

    fn builder(config: &OnlineFixConfig) -> reqwest::ClientBuilder {
        Client::builder().user_agent(config.user_agent.as_deref().unwrap_or("onlinefix"))
    }

    /// HTTP client routed through `proxy`, or the shared client when none is given
    fn http_for(&self, proxy: Option<&Proxy>) -> Result<Client> {
        match proxy {
            Some(proxy) => Ok(Self::builder(&self.config).proxy(proxy.clone()).build()?),
            None => Ok(self.http.clone()),
        }
    }

    /// Look up the profile id of `username`
    ///
    /// Returns `None` when the account service knows no such player.
    #[instrument(skip(self, proxy))]
    pub async fn resolve_id(&self, username: &str, proxy: Option<&Proxy>) -> Result<Option<String>> {
        let url = format!("{}/profiles/minecraft", self.config.servers.account);

        debug!("Resolving profile id");
        let response = self
            .http_for(proxy)?
            .post(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&[username])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }

        let profiles: Vec<ProfileLookup> = serde_json::from_slice(&response.bytes().await?)?;
        Ok(profiles.into_iter().next().map(|p| p.id))
    }

    /// Announce a server join to the session service, returning its status
    ///
    /// The response body is discarded; callers decide what the status means.
    #[instrument(skip(self, request, proxy), fields(profile = %request.selected_profile))]
    pub async fn join_server(&self, request: &JoinRequest, proxy: Option<&Proxy>) -> Result<StatusCode> {
        let url = format!("{}/session/minecraft/join", self.config.servers.session);

        debug!("Joining server through session service");
        let response = self
            .http_for(proxy)?
            .post(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(request)
            .send()
            .await?;

        Ok(response.status())
    }

    /// Fetch the texture map of `player`
    ///
    /// Returns `None` when the profile carries no `textures` property.
    #[instrument(skip(self))]
    pub async fn get_textures(&self, player: &str) -> Result<Option<TextureMap>> {
        let url = format!("{}/session/minecraft/profile/{}", self.config.servers.session, player);

        debug!("Fetching session profile");
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }

        let profile: ProfileResponse = serde_json::from_slice(&response.bytes().await?)?;
        let Some(property) = profile.properties.into_iter().find(|p| p.name == "textures") else {
            debug!("Profile has no textures property");
            return Ok(None);
        };

        let decoded = BASE64_STANDARD.decode(property.value.as_bytes())?;
        let payload: TexturesPayload = serde_json::from_slice(&decoded)?;
        Ok(Some(payload.textures))
    }

    /// Fetch a single texture of `player`
    #[instrument(skip(self))]
    pub async fn get_texture(&self, player: &str, kind: TextureKind) -> Result<Option<Texture>> {
        let Some(textures) = self.get_textures(player).await? else {
            return Ok(None);
        };

        textures
            .get(kind.as_str())
            .map(|entry| Texture::from_entry(kind, entry))
            .transpose()
    }
}

#[async_trait::async_trait]
impl SessionService for MojangApi {
    async fn resolve_id(&self, username: &str, proxy: Option<&Proxy>) -> Result<Option<String>> {
        MojangApi::resolve_id(self, username, proxy).await
    }

    async fn join_server(&self, request: &JoinRequest, proxy: Option<&Proxy>) -> Result<StatusCode> {
        MojangApi::join_server(self, request, proxy).await
    }
}
