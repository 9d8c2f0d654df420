use crate::domain::qualifier::{Qualifier, BARE_TIER};
use crate::error::TagParseError;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// `v?MAJOR.MINOR.PATCH[-QUALIFIER]`, ASCII digits only, one qualifier segment
const TAG_PATTERN: &str = r"^v?([0-9]+)\.([0-9]+)\.([0-9]+)(?:-([A-Z0-9]+))?$";

fn tag_regex() -> &'static Regex {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    TAG_RE.get_or_init(|| Regex::new(TAG_PATTERN).expect("tag pattern is a valid regex"))
}

/// Version tag: numeric triple plus an optional release-stage qualifier
///
/// Ordering is total: numeric triple first, then qualifier precedence
/// (`SNAPSHOT < ALPHA < BETA < RCn < RELEASE < bare < HFn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub qualifier: Option<Qualifier>,
}

impl Version {
    /// Create a bare version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            qualifier: None,
        }
    }

    pub fn with_qualifier(self, qualifier: Qualifier) -> Self {
        Version {
            qualifier: Some(qualifier),
            ..self
        }
    }

    /// Parse a tag such as `v1.2.3` or `1.2.3-RC1`
    ///
    /// The optional leading `v` is not kept. Anything that does not have the
    /// overall shape is [`TagParseError::MalformedTag`]; a well-shaped
    /// qualifier outside the allowed set is [`TagParseError::UnknownQualifier`].
    pub fn parse(tag: &str) -> Result<Self, TagParseError> {
        let captures = tag_regex()
            .captures(tag)
            .ok_or_else(|| TagParseError::malformed(tag))?;

        let number = |index: usize| -> Result<u32, TagParseError> {
            captures[index]
                .parse::<u32>()
                .map_err(|_| TagParseError::malformed(tag))
        };
        let major = number(1)?;
        let minor = number(2)?;
        let patch = number(3)?;

        let qualifier = match captures.get(4) {
            Some(segment) => Some(
                Qualifier::parse(segment.as_str())
                    .ok_or_else(|| TagParseError::unknown_qualifier(tag, segment.as_str()))?,
            ),
            None => None,
        };

        Ok(Version {
            major,
            minor,
            patch,
            qualifier,
        })
    }

    /// Numeric triple `(major, minor, patch)`
    pub fn numbers(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch)
    }

    /// True when both versions share the numeric triple, whatever the qualifiers
    pub fn same_numbers(&self, other: &Version) -> bool {
        self.numbers() == other.numbers()
    }

    /// `(tier, iteration)` key ranking versions that share a numeric triple
    fn qualifier_rank(&self) -> (u8, u8) {
        match &self.qualifier {
            None => (BARE_TIER, 0),
            Some(q) => (q.tier(), q.iteration().map_or(0, |n| n.get())),
        }
    }

    /// Canonical tag form with the `v` prefix, e.g. `v1.0.0-RC1`
    pub fn tag_name(&self) -> String {
        format!("v{}", self)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numbers()
            .cmp(&other.numbers())
            .then_with(|| self.qualifier_rank().cmp(&other.qualifier_rank()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(qualifier) = &self.qualifier {
            write!(f, "-{}", qualifier)?;
        }
        Ok(())
    }
}
