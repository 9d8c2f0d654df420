//! Increment validation - is a candidate tag a legal next step?
//!
//! A numeric bump always wins regardless of qualifiers. Within the same
//! numeric triple the candidate must rank strictly higher under the
//! [`Version`] order, and an identical version is reported separately as a
//! duplicate.

use crate::domain::Version;
use std::cmp::Ordering;
use std::fmt;

/// Why a candidate was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Candidate's numeric triple is lower than the previous one
    NumericRegression,
    /// Same numeric triple, candidate's qualifier does not rank higher
    QualifierRegression,
    /// Candidate is exactly the previous version
    DuplicateTag,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NumericRegression => {
                write!(f, "version number is lower than the latest tag")
            }
            Rejection::QualifierRegression => {
                write!(f, "qualifier does not advance past the latest tag")
            }
            Rejection::DuplicateTag => write!(f, "tag already exists in repository"),
        }
    }
}

/// Outcome of a single increment check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected(reason) => Some(*reason),
        }
    }
}

/// Decide whether `candidate` may follow `previous`
///
/// With no previous version any candidate is accepted.
pub fn validate(previous: Option<&Version>, candidate: &Version) -> Verdict {
    let Some(previous) = previous else {
        return Verdict::Accepted;
    };

    match candidate.numbers().cmp(&previous.numbers()) {
        Ordering::Greater => Verdict::Accepted,
        Ordering::Less => Verdict::Rejected(Rejection::NumericRegression),
        Ordering::Equal => match candidate.cmp(previous) {
            Ordering::Greater => Verdict::Accepted,
            Ordering::Equal => Verdict::Rejected(Rejection::DuplicateTag),
            Ordering::Less => Verdict::Rejected(Rejection::QualifierRegression),
        },
    }
}

/// First illegal step found while walking an ordered sequence of tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceBreak {
    /// Index of the offending version in the input slice
    pub index: usize,
    pub previous: Version,
    pub candidate: Version,
    pub reason: Rejection,
}

/// Check every consecutive pair of `versions` with [`validate`]
///
/// Empty and single-element sequences are trivially valid.
pub fn validate_sequence(versions: &[Version]) -> Result<(), SequenceBreak> {
    versions
        .windows(2)
        .enumerate()
        .try_for_each(|(i, pair)| match validate(Some(&pair[0]), &pair[1]) {
            Verdict::Accepted => Ok(()),
            Verdict::Rejected(reason) => Err(SequenceBreak {
                index: i + 1,
                previous: pair[0],
                candidate: pair[1],
                reason,
            }),
        })
}
