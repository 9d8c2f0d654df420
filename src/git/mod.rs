//! Tag source abstraction layer
//!
//! The checker only needs two things from a repository: the names of all
//! existing tags and whether a given tag exists. [`TagSource`] captures that,
//! with two implementations:
//!
//! - [repository::Git2TagSource]: reads tags from a local repository via `git2`
//! - [mock::MockTagSource]: in-memory tag list for tests
//!
//! ```rust
//! # use version_tag_check::git::TagSource;
//! # fn example<S: TagSource>(source: &S) -> Result<(), Box<dyn std::error::Error>> {
//! let tags = source.fetch_tags()?;
//! if source.tag_exists("v1.0.0")? {
//!     println!("v1.0.0 is one of {} tags", tags.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockTagSource;
pub use repository::Git2TagSource;

use crate::error::Result;

/// Read-only access to the tags of a repository
///
/// Implementors must be `Send + Sync` so a source can be shared across
/// threads. Underlying failures are mapped to
/// [crate::error::VersionTagError].
pub trait TagSource: Send + Sync {
    /// Names of every tag in the repository, in no particular order
    ///
    /// Tags that are not version tags are returned too; filtering is the
    /// caller's job.
    fn fetch_tags(&self) -> Result<Vec<String>>;

    /// Whether a tag with exactly this name exists
    ///
    /// # Example
    /// ```rust
    /// # use version_tag_check::git::TagSource;
    /// # fn example<S: TagSource>(source: &S) -> Result<(), Box<dyn std::error::Error>> {
    /// match source.tag_exists("v1.0.0")? {
    ///     true => println!("Tag v1.0.0 exists"),
    ///     false => println!("Tag v1.0.0 does not exist"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn tag_exists(&self, tag: &str) -> Result<bool>;
}
