//! Tolerant version string parsing and comparison utilities.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt::{Display, Formatter, Result};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use regex::Regex;


/// Splits any input into leading non-digit text, a numeric core running from
/// the first ASCII digit through the last one, and trailing non-digit text.
/// `(?s)` keeps the decomposition total over inputs containing newlines.
const VERSION_PATTERN: &str =
    r"(?s)^(?P<prefix>[^0-9]*)(?P<core>[0-9](?:.*[0-9])?)?(?P<suffix>[^0-9]*)$";
lazy_static::lazy_static! {
    static ref VERSION_REGEX: Regex = Regex::new(VERSION_PATTERN).unwrap();
}

/// Separators stripped from the ends of a captured prefix or suffix.
const BOUNDARY_CHARS: &[char] = &[' ', '-', '.', ','];

/// Version number extracted from a loosely formatted string
/// such as `"iOS 14.2"`, `"v2.1"` or `"chrome-3.10.2"`.
///
/// Equality, ordering and hashing consider only the numeric
/// `(major, minor, patch)` triple; `prefix` and `suffix` are kept for the
/// caller but never compared.
#[derive(Debug, Clone, Default)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub prefix: String,
    pub suffix: String,
}

impl Version {
    /// Parses a version number from a loosely formatted string.
    ///
    /// Text before the first digit becomes the prefix, text after the last
    /// digit becomes the suffix, and the rest is read as up to three
    /// dot-separated numeric components. Missing minor and patch components
    /// default to 0.
    ///
    /// This function never fails: if the input cannot be parsed, the zero
    /// version (`0.0.0` with empty prefix and suffix) is returned instead of
    /// an error. A caller therefore cannot tell a parse failure apart from a
    /// literal `"0.0.0"` by value alone. That ambiguity is intentional.
    pub fn parse(s: &str) -> Self {
        let captures = match VERSION_REGEX.captures(s) {
            Some(captures) => captures,
            None => return Self::default(),
        };
        let core = match captures.name("core") {
            Some(core) => core.as_str(),
            None => {
                if !s.is_empty() {
                    log::debug!("no numeric component in version string {:?}", s);
                }
                return Self::default();
            }
        };

        let mut version = Self::default();
        for (position, segment) in core.split('.').enumerate() {
            let number = match parse_segment(segment) {
                Some(number) => number,
                // All-or-nothing: a bad segment anywhere invalidates the
                // whole parse, prefix and suffix included.
                None => {
                    log::debug!("unparseable version string {:?}", s);
                    return Self::default();
                }
            };
            match position {
                0 => version.major = number,
                1 => version.minor = number,
                2 => version.patch = number,
                _ => {}
            }
        }

        version.prefix = captures["prefix"].trim_matches(BOUNDARY_CHARS).to_string();
        version.suffix = captures["suffix"].trim_matches(BOUNDARY_CHARS).to_string();
        version
    }

    /// Version string with major and minor components only.
    pub fn short_string(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    /// Returns true if both versions have the same numeric components.
    pub fn equal(&self, other: &Self) -> bool {
        self == other
    }

    /// Returns true if version is higher than the compared one.
    pub fn higher_than(&self, other: &Self) -> bool {
        self > other
    }

    /// Returns true if version is lower than the compared one.
    pub fn lower_than(&self, other: &Self) -> bool {
        self < other
    }

    /// Returns true if version is equal to or higher than the compared one.
    pub fn equal_or_higher_than(&self, other: &Self) -> bool {
        self >= other
    }

    /// Returns true if version is equal to or lower than the compared one.
    pub fn equal_or_lower_than(&self, other: &Self) -> bool {
        self <= other
    }

    /// Same as [`equal`](Self::equal), accepts a version string.
    pub fn equal_str(&self, other: &str) -> bool {
        self.equal(&Self::parse(other))
    }

    /// Same as [`higher_than`](Self::higher_than), accepts a version string.
    /// An unparseable string compares as the zero version.
    pub fn higher_than_str(&self, other: &str) -> bool {
        self.higher_than(&Self::parse(other))
    }

    /// Same as [`lower_than`](Self::lower_than), accepts a version string.
    /// An unparseable string compares as the zero version.
    pub fn lower_than_str(&self, other: &str) -> bool {
        self.lower_than(&Self::parse(other))
    }

    /// Same as [`equal_or_higher_than`](Self::equal_or_higher_than),
    /// accepts a version string.
    pub fn equal_or_higher_than_str(&self, other: &str) -> bool {
        self.equal_or_higher_than(&Self::parse(other))
    }

    /// Same as [`equal_or_lower_than`](Self::equal_or_lower_than),
    /// accepts a version string.
    pub fn equal_or_lower_than_str(&self, other: &str) -> bool {
        self.equal_or_lower_than(&Self::parse(other))
    }

    const fn triple(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch)
    }
}

/// Rejects empty segments (as produced by consecutive dots) and anything
/// but ASCII digits, then reads the segment as a base-10 integer.
fn parse_segment(segment: &str) -> Option<u32> {
    if segment.is_empty() || segment.bytes().any(|byte| !byte.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.triple() == other.triple()
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.triple().cmp(&other.triple())
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.triple().hash(state)
    }
}
