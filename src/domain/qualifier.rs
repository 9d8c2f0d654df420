//! Release-stage qualifiers for version tags
//!
//! The set is closed: SNAPSHOT, ALPHA, BETA, RC<n>, RELEASE and HF<n>, where
//! `n` is in `1..=99`. Literals are upper-case only.

use std::fmt;

/// Numeric suffix of an `RC` or `HF` qualifier, always within `1..=99`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iteration(u8);

impl Iteration {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 99;

    /// Returns `None` when `n` is outside `1..=99`
    pub fn new(n: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&n).then_some(Iteration(n))
    }

    /// Parse one or two ASCII digits into an iteration
    ///
    /// `"0"`, `"00"`, three or more digits and empty input are rejected.
    pub fn parse(digits: &str) -> Option<Self> {
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse::<u8>().ok().and_then(Iteration::new)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Iteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Qualifier attached to a version with `-`
///
/// A bare version (no qualifier) is modelled as `Option::None` on
/// [`crate::domain::Version`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Qualifier {
    Snapshot,
    Alpha,
    Beta,
    ReleaseCandidate(Iteration),
    Release,
    Hotfix(Iteration),
}

/// Precedence tier of a bare version, between `Release` and `Hotfix`
pub(crate) const BARE_TIER: u8 = 5;

impl Qualifier {
    pub fn release_candidate(n: u8) -> Option<Self> {
        Iteration::new(n).map(Qualifier::ReleaseCandidate)
    }

    pub fn hotfix(n: u8) -> Option<Self> {
        Iteration::new(n).map(Qualifier::Hotfix)
    }

    /// Parse a qualifier segment (the text after the `-`)
    ///
    /// Returns `None` for anything outside the closed set; the caller decides
    /// how to report it.
    pub fn parse(segment: &str) -> Option<Self> {
        match segment {
            "SNAPSHOT" => Some(Qualifier::Snapshot),
            "ALPHA" => Some(Qualifier::Alpha),
            "BETA" => Some(Qualifier::Beta),
            "RELEASE" => Some(Qualifier::Release),
            _ => {
                if let Some(digits) = segment.strip_prefix("RC") {
                    Iteration::parse(digits).map(Qualifier::ReleaseCandidate)
                } else if let Some(digits) = segment.strip_prefix("HF") {
                    Iteration::parse(digits).map(Qualifier::Hotfix)
                } else {
                    None
                }
            }
        }
    }

    /// Precedence tier, lowest first
    ///
    /// `Snapshot < Alpha < Beta < RC < Release < (bare) < Hotfix`; the bare
    /// tier is [`BARE_TIER`].
    pub fn tier(&self) -> u8 {
        match self {
            Qualifier::Snapshot => 0,
            Qualifier::Alpha => 1,
            Qualifier::Beta => 2,
            Qualifier::ReleaseCandidate(_) => 3,
            Qualifier::Release => 4,
            Qualifier::Hotfix(_) => 6,
        }
    }

    /// Numeric suffix for `RC`/`HF`, `None` for the plain literals
    pub fn iteration(&self) -> Option<Iteration> {
        match self {
            Qualifier::ReleaseCandidate(n) | Qualifier::Hotfix(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qualifier::Snapshot => write!(f, "SNAPSHOT"),
            Qualifier::Alpha => write!(f, "ALPHA"),
            Qualifier::Beta => write!(f, "BETA"),
            Qualifier::ReleaseCandidate(n) => write!(f, "RC{}", n),
            Qualifier::Release => write!(f, "RELEASE"),
            Qualifier::Hotfix(n) => write!(f, "HF{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_bounds() {
        assert!(Iteration::new(0).is_none());
        assert_eq!(Iteration::new(1).map(Iteration::get), Some(1));
        assert_eq!(Iteration::new(99).map(Iteration::get), Some(99));
        assert!(Iteration::new(100).is_none());
    }

    #[test]
    fn test_iteration_parse_digits() {
        assert_eq!(Iteration::parse("7").map(Iteration::get), Some(7));
        assert_eq!(Iteration::parse("10").map(Iteration::get), Some(10));
        assert_eq!(Iteration::parse("01").map(Iteration::get), Some(1));
        assert!(Iteration::parse("").is_none());
        assert!(Iteration::parse("0").is_none());
        assert!(Iteration::parse("00").is_none());
        assert!(Iteration::parse("001").is_none());
        assert!(Iteration::parse("100").is_none());
        assert!(Iteration::parse("+1").is_none());
    }

    #[test]
    fn test_qualifier_parse_literals() {
        assert_eq!(Qualifier::parse("SNAPSHOT"), Some(Qualifier::Snapshot));
        assert_eq!(Qualifier::parse("ALPHA"), Some(Qualifier::Alpha));
        assert_eq!(Qualifier::parse("BETA"), Some(Qualifier::Beta));
        assert_eq!(Qualifier::parse("RELEASE"), Some(Qualifier::Release));
    }

    #[test]
    fn test_qualifier_parse_numbered() {
        assert_eq!(Qualifier::parse("RC1"), Qualifier::release_candidate(1));
        assert_eq!(Qualifier::parse("RC99"), Qualifier::release_candidate(99));
        assert_eq!(Qualifier::parse("HF10"), Qualifier::hotfix(10));
    }

    #[test]
    fn test_qualifier_parse_rejects_outside_set() {
        for segment in [
            "RC", "RC0", "RC00", "RC100", "HF", "HF0", "HF000", "SNAPSHOT1", "ALPHA1", "BETA2",
            "RELEASE1", "snapshot", "Rc1", "UNKNOWN",
        ] {
            assert_eq!(Qualifier::parse(segment), None, "{} should not parse", segment);
        }
    }

    #[test]
    fn test_qualifier_tiers_ascend() {
        let ordered = [
            Qualifier::Snapshot,
            Qualifier::Alpha,
            Qualifier::Beta,
            Qualifier::ReleaseCandidate(Iteration(1)),
            Qualifier::Release,
        ];
        for pair in ordered.windows(2) {
            assert!(pair[0].tier() < pair[1].tier());
        }
        assert!(Qualifier::Release.tier() < BARE_TIER);
        assert!(BARE_TIER < Qualifier::Hotfix(Iteration(1)).tier());
    }

    #[test]
    fn test_qualifier_display() {
        assert_eq!(Qualifier::Snapshot.to_string(), "SNAPSHOT");
        assert_eq!(Qualifier::ReleaseCandidate(Iteration(2)).to_string(), "RC2");
        assert_eq!(Qualifier::Hotfix(Iteration(12)).to_string(), "HF12");
    }

    #[test]
    fn test_qualifier_iteration() {
        assert_eq!(Qualifier::Beta.iteration(), None);
        assert_eq!(
            Qualifier::hotfix(3).and_then(|q| q.iteration()),
            Iteration::new(3)
        );
    }
}
