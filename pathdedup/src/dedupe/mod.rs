//! Order-preserving deduplication of delimiter-separated path lists.
//!
//! A PATH-like value is split on its delimiter, each entry has its trailing
//! `/` and `\` characters stripped, and only the first occurrence of every
//! entry is kept. The comparison is exact: no case folding, no existence
//! checks, no further normalization.
//!
//! # Examples
//!
//! ```
//! use pathdedup::dedupe::dedupe_path_list;
//!
//! let input = r"C:\a\;C:\b;C:\a;C:\b\";
//! assert_eq!(dedupe_path_list(input, ';'), r"C:\a;C:\b");
//!
//! assert_eq!(dedupe_path_list("", ':'), "");
//! ```

use std::collections::HashSet;
use std::fmt;

/// Delimiter used by the host platform for PATH-like variables.
#[cfg(windows)]
pub const PLATFORM_DELIMITER: char = ';';

/// Delimiter used by the host platform for PATH-like variables.
#[cfg(not(windows))]
pub const PLATFORM_DELIMITER: char = ':';

/// Characters stripped from the end of every entry.
pub const TRAILING_SEPARATORS: [char; 2] = ['/', '\\'];

/// Strip all trailing `/` and `\` characters from an entry.
///
/// An entry made only of separators trims to the empty string.
///
/// ```
/// use pathdedup::dedupe::trim_trailing_separators;
///
/// assert_eq!(trim_trailing_separators(r"C:\tools\\"), r"C:\tools");
/// assert_eq!(trim_trailing_separators("/usr/bin/"), "/usr/bin");
/// assert_eq!(trim_trailing_separators("/"), "");
/// ```
#[must_use]
pub fn trim_trailing_separators(entry: &str) -> &str {
    entry.trim_end_matches(&TRAILING_SEPARATORS[..])
}

/// An ordered list of path entries together with the delimiter joining them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathList {
    entries: Vec<String>,
    delimiter: char,
}

impl PathList {
    /// Split `input` on `delimiter`.
    ///
    /// The empty string yields a single empty entry, so parsing and joining
    /// round-trips exactly.
    #[must_use]
    pub fn parse(input: &str, delimiter: char) -> Self {
        Self {
            entries: input.split(delimiter).map(str::to_owned).collect(),
            delimiter,
        }
    }

    /// Trim trailing separators from every entry and drop all but the
    /// first occurrence of each trimmed entry.
    #[must_use]
    pub fn dedupe(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.entries.len());
        let entries = self
            .entries
            .iter()
            .map(|entry| trim_trailing_separators(entry))
            .filter(|entry| seen.insert(*entry))
            .map(str::to_owned)
            .collect();

        Self {
            entries,
            delimiter: self.delimiter,
        }
    }

    /// The entries in order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the list holds no entries.
    ///
    /// A list parsed from a string always holds at least one (possibly
    /// empty) entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The delimiter this list was split on.
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Rejoin the entries with the delimiter.
    #[must_use]
    pub fn join(&self) -> String {
        let mut buf = [0u8; 4];
        self.entries.join(self.delimiter.encode_utf8(&mut buf))
    }
}

impl fmt::Display for PathList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

/// Deduplicate a delimiter-separated path list, keeping first occurrences.
#[must_use]
pub fn dedupe_path_list(input: &str, delimiter: char) -> String {
    PathList::parse(input, delimiter).dedupe().join()
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
