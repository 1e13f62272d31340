//! Prune rule documents for Release Packager.
//!
//! A rule document names, per target, which paths survive pruning:
//!
//! ```json
//! {
//!   "project": [ { "include": ["src", "index.php"] }, { "execute": ["docs"] } ],
//!   "vendor": {
//!     "vendor-org/package-name": { "include": ["src"] }
//!   }
//! }
//! ```
//!
//! Documents are loaded once per run by [`RuleLoader`] and handed to the
//! pipeline as an immutable [`RuleSet`].

pub mod error;
pub mod loader;
pub mod schema;
pub mod tag;

pub use error::{Error, Result};
pub use loader::RuleLoader;
pub use schema::{Rule, RuleSet};
pub use tag::{ROLLING_TAG, ReleaseTag};
