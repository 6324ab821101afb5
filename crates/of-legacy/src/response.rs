use std::io::Cursor;

/// Body returned when the session service accepted the join
pub const OK: &str = "OK";
/// Body returned for every other join status
pub const BAD_LOGIN: &str = "Bad login";

/// Result of a translated join, as the legacy server would have phrased it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    Accepted,
    Rejected,
    UnknownUser(String),
}

impl JoinOutcome {
    /// Legacy body text for this outcome
    pub fn body(&self) -> String {
        match self {
            Self::Accepted => OK.to_string(),
            Self::Rejected => BAD_LOGIN.to_string(),
            Self::UnknownUser(user) => format!("Couldn't find UUID of {user}"),
        }
    }
}

/// In-memory stand-in for the legacy server's response body
///
/// Carries only body bytes: the legacy client never looks at headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyResponse {
    body: Vec<u8>,
}

impl LegacyResponse {
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text (always valid UTF-8)
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap_or_default()
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Readable stream over the body, like a connection's input stream
    pub fn into_reader(self) -> Cursor<Vec<u8>> {
        Cursor::new(self.body)
    }
}

impl From<JoinOutcome> for LegacyResponse {
    fn from(outcome: JoinOutcome) -> Self {
        Self {
            body: outcome.body().into_bytes(),
        }
    }
}
