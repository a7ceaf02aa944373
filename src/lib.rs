//! Tolerant parsing and ordering for loosely formatted version strings
//! such as `"iOS 14.2"`, `"v2.1"` or `"chrome-3.10.2"`.
//!
//! Parsing never fails: unparseable input yields the zero version `0.0.0`,
//! which is indistinguishable from a literal `"0.0.0"` by value. See
//! [`Version::parse`] for details.

pub use version::Version;

pub mod version;
