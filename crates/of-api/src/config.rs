/// Default API origins used when no override is configured
pub mod defaults {
    pub const AUTH: &str = "https://authserver.mojang.com";
    pub const ACCOUNT: &str = "https://api.mojang.com";
    pub const SESSION: &str = "https://sessionserver.mojang.com";
    pub const SERVICES: &str = "https://api.minecraftservices.com";
}

/// Override keys, one per API origin
pub mod keys {
    pub const AUTH: &str = "minecraft.api.auth.host";
    pub const ACCOUNT: &str = "minecraft.api.account.host";
    pub const SESSION: &str = "minecraft.api.session.host";
    pub const SERVICES: &str = "minecraft.api.services.host";
}

/// Base URLs of the four Mojang API services
///
/// Each value is used verbatim when building endpoint URLs, so an override
/// should not carry a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiServers {
    pub auth: String,
    pub account: String,
    pub session: String,
    pub services: String,
}

impl ApiServers {
    /// Resolve every base URL through `lookup`, falling back to the defaults
    ///
    /// `lookup` receives the override key (e.g. `minecraft.api.session.host`).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &str, fallback: &str| lookup(key).unwrap_or_else(|| fallback.to_string());

        Self {
            auth: resolve(keys::AUTH, defaults::AUTH),
            account: resolve(keys::ACCOUNT, defaults::ACCOUNT),
            session: resolve(keys::SESSION, defaults::SESSION),
            services: resolve(keys::SERVICES, defaults::SERVICES),
        }
    }

    /// Resolve overrides from the process environment
    ///
    /// `minecraft.api.session.host` is read from `MINECRAFT_API_SESSION_HOST`,
    /// and likewise for the other keys.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(env_var_name(key)).ok())
    }

    /// Point every service at an authlib-injector compatible server
    pub fn authlib_injector(api_root: &str) -> Self {
        let root = api_root.trim_end_matches('/');
        Self {
            auth: format!("{root}/authserver"),
            account: format!("{root}/api"),
            session: format!("{root}/sessionserver"),
            services: format!("{root}/minecraftservices"),
        }
    }
}

impl Default for ApiServers {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Environment variable holding the override for `key`
pub fn env_var_name(key: &str) -> String {
    key.replace('.', "_").to_uppercase()
}

/// Configuration for [`MojangApi`](crate::MojangApi)
#[derive(Debug, Clone)]
pub struct OnlineFixConfig {
    /// API base URLs
    pub servers: ApiServers,

    /// Custom user agent (optional)
    pub user_agent: Option<String>,
}

impl OnlineFixConfig {
    /// Configuration reading server overrides from the environment
    pub fn from_env() -> Self {
        Self {
            servers: ApiServers::from_env(),
            ..Self::default()
        }
    }
}

impl Default for OnlineFixConfig {
    fn default() -> Self {
        Self {
            servers: ApiServers::default(),
            user_agent: Some("onlinefix".to_string()),
        }
    }
}
