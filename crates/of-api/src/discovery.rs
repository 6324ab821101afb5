use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::errors::Result;

/// Header an authlib-injector server uses to advertise its API root
pub const API_LOCATION_HEADER: &str = "X-Authlib-Injector-API-Location";

/// Find the authlib-injector API root behind `url`
///
/// The server may answer with an `X-Authlib-Injector-API-Location` header,
/// absolute or relative to `url`. Without it, `url` itself is the root.
#[instrument(skip(http))]
pub async fn discover_api_location(http: &Client, url: &Url) -> Result<Url> {
    let response = http.get(url.clone()).send().await?;

    let Some(location) = response.headers().get(API_LOCATION_HEADER) else {
        debug!("{} header not found", API_LOCATION_HEADER);
        return Ok(url.clone());
    };

    let location = location.to_str().map_err(|e| {
        crate::errors::ApiError::InvalidResponse(format!("{API_LOCATION_HEADER} is not valid text: {e}"))
    })?;

    let resolved = url.join(location)?;
    debug!(%resolved, "Resolved authlib-injector API location");
    Ok(resolved)
}
