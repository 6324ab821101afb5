use std::collections::HashMap;

use url::Url;

use crate::errors::{LegacyError, Result};

/// Host of the retired legacy login service
pub const LEGACY_HOST: &str = "www.minecraft.net";
/// Path of the legacy join endpoint
pub const JOIN_PATH: &str = "/game/joinserver.jsp";

/// Whether `url` addresses the legacy join endpoint
///
/// The host is compared after URL parsing has lowercased it; the path is
/// compared exactly.
pub fn is_legacy_join(url: &Url) -> bool {
    url.host_str() == Some(LEGACY_HOST) && url.path() == JOIN_PATH
}

/// Split a raw query string into its `key=value` pairs
///
/// Values are not percent-decoded. Entries that do not split into exactly a
/// key and a value are dropped. Trailing empty segments do not count, so
/// `key=` is dropped while `=value` is kept under an empty key.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter_map(|entry| {
            let mut parts: Vec<&str> = entry.split('=').collect();
            while parts.last().is_some_and(|p| p.is_empty()) {
                parts.pop();
            }

            match parts.as_slice() {
                [key, value] => Some((key.to_string(), value.to_string())),
                _ => None,
            }
        })
        .collect()
}

/// Parameters of a legacy `joinserver.jsp` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyJoinRequest {
    pub user: String,
    pub server_id: String,
    /// Compound token: `token:<accessToken>:<playerUuid>`
    pub session_id: String,
}

impl LegacyJoinRequest {
    /// Read the join parameters from the query of `url`
    pub fn from_url(url: &Url) -> Result<Self> {
        Self::from_query(url.query().unwrap_or_default())
    }

    pub fn from_query(query: &str) -> Result<Self> {
        let mut params = parse_query(query);
        let mut take = |key: &'static str| params.remove(key).ok_or(LegacyError::MissingParameter(key));

        Ok(Self {
            user: take("user")?,
            server_id: take("serverId")?,
            session_id: take("sessionId")?,
        })
    }

    /// Access token carried in the middle of `sessionId`
    pub fn access_token(&self) -> Result<&str> {
        let segments: Vec<&str> = self.session_id.split(':').collect();
        match segments.as_slice() {
            [_, token, _, ..] => Ok(*token),
            _ => Err(LegacyError::MalformedSessionId),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_join_url_matches() {
        let url = Url::parse("http://www.minecraft.net/game/joinserver.jsp?user=Steve").unwrap();
        assert!(is_legacy_join(&url));
    }

    #[test]
    fn test_host_match_ignores_case() {
        let url = Url::parse("http://WWW.Minecraft.NET/game/joinserver.jsp?user=Steve").unwrap();
        assert!(is_legacy_join(&url));

        let url = Url::parse("http://www.minecraft.net/GAME/joinserver.jsp?user=Steve").unwrap();
        assert!(!is_legacy_join(&url));
    }

    #[test]
    fn test_other_urls_do_not_match() {
        for candidate in [
            "http://minecraft.net/game/joinserver.jsp?user=Steve",
            "http://www.minecraft.net/game/checkserver.jsp?user=Steve",
            "http://www.minecraft.net/game/joinserver.jsp/extra",
            "https://sessionserver.mojang.com/game/joinserver.jsp",
        ] {
            let url = Url::parse(candidate).unwrap();
            assert!(!is_legacy_join(&url), "{candidate} should not match");
        }
    }

    #[test]
    fn test_parse_query_drops_malformed_entries() {
        let params = parse_query("a=1&b&c=2=3");
        assert_eq!(params, HashMap::from([("a".to_string(), "1".to_string())]));
    }

    #[test]
    fn test_parse_query_trailing_empty_value() {
        let params = parse_query("a=&=b&&c=d");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get(""), Some(&"b".to_string()));
        assert_eq!(params.get("c"), Some(&"d".to_string()));
        assert!(!params.contains_key("a"));
    }

    #[test]
    fn test_parse_query_keeps_raw_values() {
        let params = parse_query("user=A%20B&serverId=-1f");
        assert_eq!(params["user"], "A%20B");
        assert_eq!(params["serverId"], "-1f");
    }

    #[test]
    fn test_from_query_all_present() {
        let request =
            LegacyJoinRequest::from_query("user=Steve&serverId=abc&sessionId=token:ABC123:uuid-value").unwrap();

        assert_eq!(request.user, "Steve");
        assert_eq!(request.server_id, "abc");
        assert_eq!(request.session_id, "token:ABC123:uuid-value");
    }

    #[test]
    fn test_from_query_missing_parameter() {
        let cases = [
            ("serverId=abc&sessionId=token:a:b", "user"),
            ("user=Steve&sessionId=token:a:b", "serverId"),
            ("user=Steve&serverId=abc", "sessionId"),
            ("user=Steve&serverId=abc&sessionId=", "sessionId"),
        ];

        for (query, missing) in cases {
            match LegacyJoinRequest::from_query(query) {
                Err(LegacyError::MissingParameter(name)) => assert_eq!(name, missing),
                other => panic!("unexpected result for {query}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_url_without_query() {
        let url = Url::parse("http://www.minecraft.net/game/joinserver.jsp").unwrap();
        assert!(matches!(
            LegacyJoinRequest::from_url(&url),
            Err(LegacyError::MissingParameter("user"))
        ));
    }

    #[test]
    fn test_access_token_is_middle_segment() {
        let request = LegacyJoinRequest {
            user: "Steve".to_string(),
            server_id: "abc".to_string(),
            session_id: "token:ABC123:uuid-value".to_string(),
        };
        assert_eq!(request.access_token().unwrap(), "ABC123");
    }

    #[test]
    fn test_access_token_requires_compound_form() {
        for session_id in ["ABC123", "token:ABC123"] {
            let request = LegacyJoinRequest {
                user: "Steve".to_string(),
                server_id: "abc".to_string(),
                session_id: session_id.to_string(),
            };
            assert!(matches!(request.access_token(), Err(LegacyError::MalformedSessionId)));
        }
    }
}
