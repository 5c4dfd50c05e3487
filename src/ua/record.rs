use super::{BrowserName, Classification, Device, Engine, OperatingSystem, Platform, classify};
use crate::error::InvalidInput;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    convert::Infallible,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
    sync::{Arc, OnceLock},
};

/// A user-agent string together with its (lazily resolved) [`Classification`].
///
/// The source string is stored with leading and trailing whitespace trimmed.
/// Two [`ParsedUserAgent`]s are equal if and only if their trimmed source
/// strings are equal; the derived attributes never take part in equality.
///
/// Attributes are resolved on first access and cached for the lifetime
/// of this value (and its clones made after that first access).
#[derive(Clone)]
pub struct ParsedUserAgent {
    source: Arc<str>,
    classification: OnceLock<Classification>,
}

impl ParsedUserAgent {
    /// Create a new [`ParsedUserAgent`] from a user-agent string.
    ///
    /// Never fails: empty or unrecognised strings resolve to
    /// `Unknown` attributes and absent versions.
    pub fn new(ua: impl Into<Arc<str>>) -> Self {
        let ua = ua.into();
        let trimmed = ua.trim();
        let source = if trimmed.len() == ua.len() {
            ua
        } else {
            Arc::from(trimmed)
        };
        Self {
            source,
            classification: OnceLock::new(),
        }
    }

    /// Create a new [`ParsedUserAgent`] from raw bytes,
    /// failing with [`InvalidInput`] if they are not valid UTF-8.
    pub fn try_from_bytes(ua: &[u8]) -> Result<Self, InvalidInput> {
        let ua = std::str::from_utf8(ua).map_err(InvalidInput::from_std)?;
        Ok(Self::new(ua))
    }

    /// Create a new [`ParsedUserAgent`] from an optional user-agent
    /// (e.g. a header that may be missing), failing with [`InvalidInput`]
    /// if there is none.
    ///
    /// An empty string is valid input, only absence is rejected.
    pub fn try_from_option<S: Into<Arc<str>>>(ua: Option<S>) -> Result<Self, InvalidInput> {
        match ua {
            Some(ua) => Ok(Self::new(ua)),
            None => Err(InvalidInput::from_display("no user-agent given")),
        }
    }

    /// Returns the trimmed user-agent string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns all resolved attributes of this user agent.
    #[must_use]
    pub fn classification(&self) -> &Classification {
        self.classification.get_or_init(|| classify(&self.source))
    }

    /// Returns the [`BrowserName`] of this user agent.
    #[must_use]
    pub fn name(&self) -> &BrowserName {
        &self.classification().name
    }

    /// Returns the browser version of this user agent, if known.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.classification().version.as_deref()
    }

    /// Returns the rendering [`Engine`] of this user agent.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.classification().engine
    }

    /// Returns the rendering engine version of this user agent, if known.
    #[must_use]
    pub fn engine_version(&self) -> Option<&str> {
        self.classification().engine_version.as_deref()
    }

    /// Returns the [`OperatingSystem`] of this user agent.
    #[must_use]
    pub fn operating_system(&self) -> &OperatingSystem {
        &self.classification().operating_system
    }

    /// Returns the [`Platform`] of this user agent.
    #[must_use]
    pub fn platform(&self) -> &Platform {
        &self.classification().platform
    }

    /// Returns the [`Device`] class of this user agent,
    /// derived from its [`Platform`].
    #[must_use]
    pub fn device(&self) -> &Device {
        &self.classification().device
    }

    /// Returns a one-line summary of the resolved attributes,
    /// meant for logs and debugging. The format is not stable.
    #[must_use]
    pub fn debug_description(&self) -> String {
        format!("{self:?}")
    }
}

impl fmt::Debug for ParsedUserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let classification = self.classification();
        write!(
            f,
            "ParsedUserAgent({} version: {:?} engine: \"{}:{}\" os: \"{}\")",
            classification.name,
            classification.version.as_deref(),
            classification.engine,
            classification.engine_version.as_deref().unwrap_or_default(),
            classification.operating_system,
        )
    }
}

impl fmt::Display for ParsedUserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl PartialEq for ParsedUserAgent {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for ParsedUserAgent {}

impl Hash for ParsedUserAgent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl AsRef<str> for ParsedUserAgent {
    fn as_ref(&self) -> &str {
        &self.source
    }
}

impl FromStr for ParsedUserAgent {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for ParsedUserAgent {
    fn from(ua: &str) -> Self {
        Self::new(ua)
    }
}

impl From<String> for ParsedUserAgent {
    fn from(ua: String) -> Self {
        Self::new(ua)
    }
}

impl TryFrom<&[u8]> for ParsedUserAgent {
    type Error = InvalidInput;

    fn try_from(ua: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_bytes(ua)
    }
}

impl Serialize for ParsedUserAgent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for ParsedUserAgent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Ok(Self::new(&*s))
    }
}
