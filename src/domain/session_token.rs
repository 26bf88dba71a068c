//! Random session tokens carried in the session cookie.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of random bytes in a token. Tokens are hex encoded, so twice this many chars.
const TOKEN_BYTES: usize = 32;

/// An unguessable secret that maps a browser session to a user.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generates a fresh token from the thread-local CSPRNG.
    pub fn generate() -> Self {
        let bytes: [u8; TOKEN_BYTES] = rand::random();
        Self(hex::encode(bytes))
    }

    /// Returns the hex-encoded token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep secrets out of logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken({}…)", &self.0[..8])
    }
}

/// Error returned when a string is not a well-formed session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSessionTokenError;

impl fmt::Display for ParseSessionTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid session token: expected {} lowercase hex characters",
            TOKEN_BYTES * 2
        )
    }
}

impl std::error::Error for ParseSessionTokenError {}

impl FromStr for SessionToken {
    type Err = ParseSessionTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let well_formed = s.len() == TOKEN_BYTES * 2
            && s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if well_formed {
            Ok(Self(s.to_string()))
        } else {
            Err(ParseSessionTokenError)
        }
    }
}

impl Serialize for SessionToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SessionToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_parse_back() {
        let token = SessionToken::generate();
        assert_eq!(token.as_str().len(), 64);
        let parsed: SessionToken = token.as_str().parse().unwrap();
        assert_eq!(parsed, token);
    }

    #[test]
    fn generated_tokens_are_unique() {
        assert_ne!(SessionToken::generate(), SessionToken::generate());
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!("".parse::<SessionToken>().is_err());
        assert!("abc".parse::<SessionToken>().is_err());
        assert!("G".repeat(64).parse::<SessionToken>().is_err());
        assert!("A".repeat(64).parse::<SessionToken>().is_err());
    }

    #[test]
    fn deserialize_rejects_malformed_token() {
        let token = SessionToken::generate();
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(serde_json::from_str::<SessionToken>(&json).unwrap(), token);
        assert!(serde_json::from_str::<SessionToken>("\"nope\"").is_err());
    }

    #[test]
    fn debug_does_not_leak_full_token() {
        let token = SessionToken::generate();
        let debug = format!("{:?}", token);
        assert!(!debug.contains(token.as_str()));
        assert!(debug.starts_with("SessionToken("));
    }
}
