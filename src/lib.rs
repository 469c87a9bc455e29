//! Cached front-end for the Snowball stemming algorithms.
//!
//! Resolve an algorithm by name or ISO 639 code, then stem words through a
//! bounded memoization cache:
//!
//! ```
//! use stemcache::Stemmer;
//!
//! let mut stemmer = Stemmer::new("en").unwrap();
//! assert_eq!(stemmer.stem("running"), "run");
//! ```

#[macro_use]
extern crate failure;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod cache;
pub mod error;
pub mod registry;
pub mod stemmer;

pub use crate::error::StemError;
pub use crate::stemmer::{Stemmer, Word};

/// Sorted canonical names of the available algorithms. Aliases are left
/// out; see [`registry::AlgorithmRegistry::names`] to include them.
pub fn algorithms() -> Vec<&'static str> {
    registry::global().names(false)
}

/// Version of the stemming interface this crate is compatible with, as a
/// fixed string. The crate's own version is in `Cargo.toml`.
pub fn version() -> &'static str {
    "1.3.0"
}
