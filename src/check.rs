//! Tag check workflow
//!
//! Ties the pure domain rules to a [`TagSource`]: parse the candidate, read
//! the existing tags, pick the baseline version and run the increment check.
//! Kept free of CLI concerns so it can be driven programmatically.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::boundary::BoundaryWarning;
use crate::domain::{validate, Rejection, Verdict, Version};
use crate::error::Result;
use crate::git::TagSource;

/// Which existing version a candidate is compared against
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Baseline {
    /// Highest version in the repository
    #[default]
    Latest,
    /// Highest version in the candidate's `major.minor` series, falling back
    /// to its `major` series, then to the highest overall (allows backports)
    Series,
}

impl Baseline {
    /// Pick the baseline for `candidate` out of `existing`
    pub fn select(self, existing: &[Version], candidate: &Version) -> Option<Version> {
        let latest = existing.iter().max().copied();
        match self {
            Baseline::Latest => latest,
            Baseline::Series => existing
                .iter()
                .filter(|v| (v.major, v.minor) == (candidate.major, candidate.minor))
                .max()
                .or_else(|| {
                    existing
                        .iter()
                        .filter(|v| v.major == candidate.major)
                        .max()
                })
                .copied()
                .or(latest),
        }
    }
}

/// Input for one tag check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRequest {
    /// Candidate tag text, as the user supplied it
    pub tag: String,

    /// Only verify that the tag exists
    pub should_exist: bool,

    pub baseline: Baseline,
}

impl CheckRequest {
    pub fn new(tag: impl Into<String>) -> Self {
        CheckRequest {
            tag: tag.into(),
            should_exist: false,
            baseline: Baseline::default(),
        }
    }
}

/// What the check decided
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// Candidate is a legal new tag
    Accepted {
        candidate: Version,
        previous: Option<Version>,
    },
    /// Candidate would not be a legal step after `previous`
    Rejected {
        candidate: Version,
        previous: Version,
        reason: Rejection,
    },
    /// Existence check passed
    Present { tag: String },
    /// Existence check failed
    Missing { tag: String },
}

/// Outcome plus any warnings collected on the way
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub outcome: CheckOutcome,
    pub warnings: Vec<BoundaryWarning>,
}

impl CheckReport {
    /// True when the tag may be used as requested
    pub fn passed(&self) -> bool {
        matches!(
            self.outcome,
            CheckOutcome::Accepted { .. } | CheckOutcome::Present { .. }
        )
    }
}

/// Run a tag check against `source`
///
/// An unparsable candidate and repository failures are errors; everything
/// else is reported through [`CheckReport`].
pub fn run_check<S: TagSource + ?Sized>(source: &S, request: &CheckRequest) -> Result<CheckReport> {
    let candidate = Version::parse(&request.tag)?;
    debug!(tag = %request.tag, version = %candidate, "parsed candidate tag");

    let mut warnings = Vec::new();

    if request.should_exist {
        let tag = request.tag.clone();
        // Exact name first; otherwise any tag naming the same version counts
        let present = source.tag_exists(&request.tag)?
            || existing_versions(source, &mut warnings)?.contains(&candidate);
        let outcome = if present {
            CheckOutcome::Present { tag }
        } else {
            CheckOutcome::Missing { tag }
        };
        return Ok(CheckReport { outcome, warnings });
    }

    let existing = existing_versions(source, &mut warnings)?;

    if let Some(duplicate) = existing.iter().find(|v| **v == candidate) {
        info!(version = %candidate, "tag already exists in repository");
        return Ok(CheckReport {
            outcome: CheckOutcome::Rejected {
                candidate,
                previous: *duplicate,
                reason: Rejection::DuplicateTag,
            },
            warnings,
        });
    }

    let Some(previous) = request.baseline.select(&existing, &candidate) else {
        warnings.push(BoundaryWarning::NoExistingVersions);
        return Ok(CheckReport {
            outcome: CheckOutcome::Accepted {
                candidate,
                previous: None,
            },
            warnings,
        });
    };

    let outcome = match validate(Some(&previous), &candidate) {
        Verdict::Accepted => CheckOutcome::Accepted {
            candidate,
            previous: Some(previous),
        },
        Verdict::Rejected(reason) => CheckOutcome::Rejected {
            candidate,
            previous,
            reason,
        },
    };
    debug!(?outcome, "increment check finished");

    Ok(CheckReport { outcome, warnings })
}

/// Parse every tag in `source`, skipping (and warning about) the ones that
/// are not version tags
fn existing_versions<S: TagSource + ?Sized>(
    source: &S,
    warnings: &mut Vec<BoundaryWarning>,
) -> Result<Vec<Version>> {
    let tags = source.fetch_tags()?;
    let mut versions = Vec::with_capacity(tags.len());

    for tag in tags {
        match Version::parse(&tag) {
            Ok(version) => versions.push(version),
            Err(e) => {
                warn!(tag = %tag, "skipping non-version tag");
                warnings.push(BoundaryWarning::UnparsableTag {
                    tag,
                    reason: e.to_string(),
                });
            }
        }
    }

    debug!(count = versions.len(), "collected existing versions");
    Ok(versions)
}
