use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use smol_str::SmolStr;
use thiserror::Error;

pub const MAX_USERNAME_LEN: usize = 20;

/// A username accepted by the input field: ASCII letters, digits, `-` and
/// `_`, at most [`MAX_USERNAME_LEN`] long.
///
/// The hasher and the search accept any string; this is only for callers
/// that want to reject what the field would reject.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UserName(SmolStr);

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("username is empty")]
    Empty,
    #[error("username is {len} characters long, at most {max} allowed")]
    TooLong { len: usize, max: usize },
    #[error("only alphanumeric characters, dashes (-), and underscores (_) are allowed")]
    InvalidCharacters,
}

impl UserName {
    pub fn parse(username: impl AsRef<str>) -> Result<Self, UserNameError> {
        let username = username.as_ref();
        check(username)?;
        Ok(Self(SmolStr::new(username)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn check(username: &str) -> Result<(), UserNameError> {
    if username.is_empty() {
        return Err(UserNameError::Empty);
    }
    if !USERNAME_RE.is_match(username) {
        return Err(UserNameError::InvalidCharacters);
    }
    // pattern is ASCII-only, so bytes == characters here
    if username.len() > MAX_USERNAME_LEN {
        return Err(UserNameError::TooLong {
            len: username.len(),
            max: MAX_USERNAME_LEN,
        });
    }
    Ok(())
}

impl FromStr for UserName {
    type Err = UserNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<SmolStr> for UserName {
    type Error = UserNameError;

    fn try_from(value: SmolStr) -> Result<Self, Self::Error> {
        check(value.as_str())?;
        Ok(Self(value))
    }
}

impl<'de> Deserialize<'de> for UserName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = SmolStr::deserialize(deserializer)?;
        UserName::try_from(value).map_err(serde::de::Error::custom)
    }
}

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("valid username regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_roundtrip() {
        let username = UserName::parse("user_01").expect("valid username");
        assert_eq!(username.as_str(), "user_01");
        assert_eq!(username.to_string(), "user_01");
        assert!(UserName::parse("-_-").is_ok());
        assert!(UserName::parse("a".repeat(20)).is_ok());
    }

    #[test]
    fn rejects_invalid_usernames() {
        assert_eq!(UserName::parse(""), Err(UserNameError::Empty));
        assert_eq!(
            UserName::parse("a".repeat(21)),
            Err(UserNameError::TooLong { len: 21, max: 20 })
        );
        for bad in ["has space", "dot.ted", "héllo", "@user"] {
            assert_eq!(UserName::parse(bad), Err(UserNameError::InvalidCharacters), "{bad}");
        }
    }

    #[test]
    fn deserialize_validates() {
        let ok: UserName = serde_json::from_str("\"Someone\"").expect("valid");
        assert_eq!(ok.as_str(), "Someone");
        assert!(serde_json::from_str::<UserName>("\"no way\"").is_err());
    }
}
