//! Legacy `joinserver.jsp` emulation
//!
//! Old clients announce a server join with a GET to
//! `http://www.minecraft.net/game/joinserver.jsp?user=..&serverId=..&sessionId=token:<accessToken>:<uuid>`
//! and read a plain text body back. That service is gone, so the request is
//! answered locally:
//!
//! 1. Match the legacy URL, decline anything else
//! 2. Parse `user`, `serverId` and `sessionId` from the raw query
//! 3. Resolve `user` to a profile id
//! 4. Post the join to the session service
//! 5. Reply with `OK`, `Bad login` or `Couldn't find UUID of <user>`
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use of_api::{MojangApi, OnlineFixConfig};
//! use of_legacy::{Interception, LegacyAuthTranslator};
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let api = MojangApi::new(OnlineFixConfig::from_env())?;
//!     let translator = LegacyAuthTranslator::new(Arc::new(api));
//!
//!     let url = Url::parse(
//!         "http://www.minecraft.net/game/joinserver.jsp?user=Steve&serverId=-5e7a&sessionId=token:abc:def",
//!     )?;
//!     match translator.intercept(&url, None).await? {
//!         Interception::Handled(response) => println!("{}", response.text()),
//!         Interception::NotApplicable => println!("passing through"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod request;
pub mod response;
pub mod translator;

pub use errors::{LegacyError, Result};
pub use request::LegacyJoinRequest;
pub use response::{JoinOutcome, LegacyResponse};
pub use translator::{Interception, LegacyAuthTranslator};
