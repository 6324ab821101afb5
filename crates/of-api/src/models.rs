use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;

/// Session join request (`POST /session/minecraft/join`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub access_token: String,
    /// Profile UUID without dashes
    pub selected_profile: String,
    pub server_id: String,
}

/// Entry of the bulk username lookup (`POST /profiles/minecraft`)
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProfileLookup {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Session server profile (`GET /session/minecraft/profile/<uuid>`)
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub properties: Vec<ProfileProperty>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileProperty {
    pub name: String,
    /// Base64 encoded JSON for the `textures` property
    pub value: String,
    #[serde(default)]
    pub signature: Option<String>,
}

/// Decoded value of the `textures` profile property
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TexturesPayload {
    #[serde(default)]
    pub timestamp: Option<u64>,
    #[serde(default)]
    pub profile_id: Option<String>,
    #[serde(default)]
    pub profile_name: Option<String>,
    pub textures: TextureMap,
}

/// Raw wire texture records keyed by kind (`SKIN`, `CAPE`, ...)
///
/// Entries stay undecoded JSON; [`Texture::from_entry`] decodes the one kind
/// a caller asks for, so a malformed sibling entry does not affect it.
pub type TextureMap = HashMap<String, serde_json::Value>;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RawTexture {
    pub url: String,
    #[serde(default)]
    pub metadata: Option<TextureMetadata>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TextureMetadata {
    /// Arm model; only the string `"slim"` is meaningful
    #[serde(default)]
    pub model: Option<serde_json::Value>,
}

/// Kind of player texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Skin,
    Cape,
    Elytra,
}

impl TextureKind {
    /// Key used for this kind in a [`TextureMap`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skin => "SKIN",
            Self::Cape => "CAPE",
            Self::Elytra => "ELYTRA",
        }
    }
}

/// A resolved player texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pub url: Url,
    /// Whether a skin uses the slim (Alex) arm model; always false for other kinds
    pub slim: bool,
}

impl Texture {
    /// Decode a texture from its entry in a [`TextureMap`]
    pub fn from_entry(kind: TextureKind, entry: &serde_json::Value) -> crate::Result<Self> {
        let raw = RawTexture::deserialize(entry)?;
        Self::from_raw(kind, &raw)
    }

    /// Build a texture from its raw record, reading the skin model only for skins
    pub fn from_raw(kind: TextureKind, raw: &RawTexture) -> crate::Result<Self> {
        let url = Url::parse(&raw.url)?;
        let slim = kind == TextureKind::Skin
            && raw
                .metadata
                .as_ref()
                .and_then(|m| m.model.as_ref())
                .is_some_and(|model| model == "slim");

        Ok(Self { url, slim })
    }
}
