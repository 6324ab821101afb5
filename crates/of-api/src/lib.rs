//! Client for the Mojang account and session APIs
//!
//! Provides the pieces needed to emulate the legacy join flow against the
//! modern backend:
//!
//! 1. Username to profile id resolution (`POST /profiles/minecraft`)
//! 2. Session join (`POST /session/minecraft/join`)
//! 3. Skin and cape lookup from the session profile
//!
//! # Example
//!
//! ```no_run
//! use of_api::{MojangApi, OnlineFixConfig, TextureKind};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let api = MojangApi::new(OnlineFixConfig::from_env())?;
//!
//!     if let Some(id) = api.resolve_id("Notch", None).await? {
//!         if let Some(skin) = api.get_texture(&id, TextureKind::Skin).await? {
//!             println!("{} (slim: {})", skin.url, skin.slim);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Server overrides
//!
//! Every base URL can be redirected with an environment variable
//! (`MINECRAFT_API_SESSION_HOST` and friends), or all at once to an
//! authlib-injector server with [`ApiServers::authlib_injector`].

pub mod client;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod models;
pub mod service;

// Re-export main types
pub use client::MojangApi;
pub use config::{ApiServers, OnlineFixConfig};
pub use discovery::discover_api_location;
pub use errors::{ApiError, Result};
pub use models::{JoinRequest, Texture, TextureKind, TextureMap};
pub use service::SessionService;
