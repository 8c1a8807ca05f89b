//! Registration group and registrant range lookup
//!
//! The table maps an EAN prefix (`978`, `979`) to its registration groups, and
//! each group to the registrant ranges valid inside it. It is built once from a
//! flat list of [`GroupSpec`] entries plus a list of [`AliasSpec`] entries and
//! never changes afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use thiserror::Error;

use crate::range_data::{ALIASES, GROUPS};

/// Prefix assumed for 10-digit ISBNs.
pub const LEGACY_PREFIX: &str = "978";

/// Digits a registration group candidate may never consume
/// (registrant, publication, check digit).
const GROUP_RESERVED: usize = 3;

/// Digits a registrant candidate may never consume (publication, check digit).
const REGISTRANT_RESERVED: usize = 2;

lazy_static! {
    static ref STANDARD: RangeTable = RangeTable::from_specs(GROUPS, ALIASES)
        .expect("embedded ISBN range data is valid");
}

/// One registration group as it appears in the flat range list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSpec<'a> {
    pub prefix: &'a str,
    pub group: &'a str,
    /// `lower, upper` pairs, ordered by increasing width
    pub bounds: &'a [&'a str],
}

/// A registration group that reuses another group's ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasSpec<'a> {
    pub prefix: &'a str,
    pub alias: &'a str,
    pub target: &'a str,
}

impl<'a> AliasSpec<'a> {
    pub const fn new(prefix: &'a str, alias: &'a str, target: &'a str) -> Self {
        Self {
            prefix,
            alias,
            target,
        }
    }
}

/// Inclusive registrant range. Both bounds have the same width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrantRange {
    lower: String,
    upper: String,
}

impl RegistrantRange {
    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn upper(&self) -> &str {
        &self.upper
    }

    /// Width of the registrant codes this range covers
    pub fn width(&self) -> usize {
        self.lower.len()
    }

    /// Same-width, byte-wise containment check.
    pub fn contains(&self, candidate: &str) -> bool {
        candidate.len() == self.width()
            && candidate >= self.lower.as_str()
            && candidate <= self.upper.as_str()
    }
}

/// Errors raised while building a [`RangeTable`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeTableError {
    #[error("group {prefix}-{group} has an odd number of bounds")]
    UnpairedBound { prefix: String, group: String },

    #[error("group {prefix}-{group}: bounds {lower}..{upper} differ in width")]
    WidthMismatch {
        prefix: String,
        group: String,
        lower: String,
        upper: String,
    },

    #[error("group {prefix}-{group}: bound {bound:?} is not a digit string")]
    InvalidBound {
        prefix: String,
        group: String,
        bound: String,
    },

    #[error("group {prefix}-{group}: lower bound {lower} exceeds upper bound {upper}")]
    InvertedRange {
        prefix: String,
        group: String,
        lower: String,
        upper: String,
    },

    #[error("group {prefix}-{group} is defined twice")]
    DuplicateGroup { prefix: String, group: String },

    #[error("alias {prefix}-{alias} points at unknown group {target}")]
    UnknownAliasTarget {
        prefix: String,
        alias: String,
        target: String,
    },
}

type Ranges = Arc<[RegistrantRange]>;

/// Immutable prefix → group → registrant ranges mapping
#[derive(Debug, Clone, Default)]
pub struct RangeTable {
    prefixes: HashMap<String, HashMap<String, Ranges>>,
}

impl RangeTable {
    /// The table built from the embedded range data.
    pub fn standard() -> &'static RangeTable {
        &STANDARD
    }

    /// Build a table from group definitions and aliases.
    ///
    /// Aliases are applied in order and share the target's ranges, so an alias
    /// may refer to a group introduced by an earlier alias.
    pub fn from_specs(
        groups: &[GroupSpec<'_>],
        aliases: &[AliasSpec<'_>],
    ) -> Result<Self, RangeTableError> {
        let mut prefixes: HashMap<String, HashMap<String, Ranges>> = HashMap::new();

        for spec in groups {
            let ranges = build_ranges(spec)?;
            let entry = prefixes.entry(spec.prefix.to_string()).or_default();
            if entry.contains_key(spec.group) {
                return Err(RangeTableError::DuplicateGroup {
                    prefix: spec.prefix.to_string(),
                    group: spec.group.to_string(),
                });
            }
            entry.insert(spec.group.to_string(), ranges);
        }

        for alias in aliases {
            let shared = prefixes
                .get(alias.prefix)
                .and_then(|groups| groups.get(alias.target))
                .cloned()
                .ok_or_else(|| RangeTableError::UnknownAliasTarget {
                    prefix: alias.prefix.to_string(),
                    alias: alias.alias.to_string(),
                    target: alias.target.to_string(),
                })?;
            prefixes
                .entry(alias.prefix.to_string())
                .or_default()
                .insert(alias.alias.to_string(), shared);
        }

        Ok(Self { prefixes })
    }

    /// Whether `prefix` is a known EAN prefix
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains_key(prefix)
    }

    /// Known EAN prefixes, sorted
    pub fn prefixes(&self) -> Vec<&str> {
        let mut prefixes: Vec<&str> = self.prefixes.keys().map(String::as_str).collect();
        prefixes.sort_unstable();
        prefixes
    }

    /// Registration groups under `prefix`, sorted
    pub fn groups(&self, prefix: &str) -> Vec<&str> {
        let mut groups: Vec<&str> = self
            .prefixes
            .get(prefix)
            .map(|groups| groups.keys().map(String::as_str).collect())
            .unwrap_or_default();
        groups.sort_unstable();
        groups
    }

    /// Registrant ranges for one group
    pub fn ranges(&self, prefix: &str, group: &str) -> Option<&[RegistrantRange]> {
        self.prefixes
            .get(prefix)
            .and_then(|groups| groups.get(group))
            .map(|ranges| &ranges[..])
    }

    /// Whether two groups point at the same shared range list
    pub fn shares_ranges(&self, prefix: &str, a: &str, b: &str) -> bool {
        let Some(groups) = self.prefixes.get(prefix) else {
            return false;
        };
        match (groups.get(a), groups.get(b)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Find the registration group at the start of `digits`.
    ///
    /// `digits` are the ISBN digits following the prefix. Candidates grow one
    /// digit at a time and never reach into the last three digits; the first
    /// candidate present in the table wins.
    pub fn lookup_group<'d>(
        &self,
        prefix: &str,
        digits: &'d str,
    ) -> Option<(&'d str, &[RegistrantRange])> {
        let groups = self.prefixes.get(prefix)?;
        let limit = digits.len().checked_sub(GROUP_RESERVED)?;

        (1..=limit).find_map(|len| {
            let candidate = digits.get(..len)?;
            groups
                .get(candidate)
                .map(|ranges| (candidate, &ranges[..]))
        })
    }

    /// Find the registrant code at the start of `digits`.
    ///
    /// `digits` are the ISBN digits following the group code. Candidates grow
    /// one digit at a time and never reach into the last two digits. For each
    /// candidate, ranges are scanned in order up to the candidate's width and
    /// the first same-width range containing it wins.
    pub fn lookup_registrant<'d>(
        &self,
        prefix: &str,
        group: &str,
        digits: &'d str,
    ) -> Option<&'d str> {
        let ranges = self.ranges(prefix, group)?;
        match_registrant(ranges, digits)
    }
}

pub(crate) fn match_registrant<'d>(ranges: &[RegistrantRange], digits: &'d str) -> Option<&'d str> {
    let limit = digits.len().checked_sub(REGISTRANT_RESERVED)?;

    (1..=limit).find_map(|len| {
        let candidate = digits.get(..len)?;
        ranges
            .iter()
            .take_while(|range| range.width() <= len)
            .any(|range| range.contains(candidate))
            .then_some(candidate)
    })
}

fn build_ranges(spec: &GroupSpec<'_>) -> Result<Ranges, RangeTableError> {
    if spec.bounds.len() % 2 != 0 {
        return Err(RangeTableError::UnpairedBound {
            prefix: spec.prefix.to_string(),
            group: spec.group.to_string(),
        });
    }

    let mut ranges = Vec::with_capacity(spec.bounds.len() / 2);
    for pair in spec.bounds.chunks_exact(2) {
        let (lower, upper) = (pair[0], pair[1]);

        if let Some(bound) = [lower, upper]
            .into_iter()
            .find(|b| b.is_empty() || !b.bytes().all(|c| c.is_ascii_digit()))
        {
            return Err(RangeTableError::InvalidBound {
                prefix: spec.prefix.to_string(),
                group: spec.group.to_string(),
                bound: bound.to_string(),
            });
        }
        if lower.len() != upper.len() {
            return Err(RangeTableError::WidthMismatch {
                prefix: spec.prefix.to_string(),
                group: spec.group.to_string(),
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }
        if lower > upper {
            return Err(RangeTableError::InvertedRange {
                prefix: spec.prefix.to_string(),
                group: spec.group.to_string(),
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }

        ranges.push(RegistrantRange {
            lower: lower.to_string(),
            upper: upper.to_string(),
        });
    }

    // Lookup stops scanning at the first range wider than the candidate.
    ranges.sort_by_key(RegistrantRange::width);

    Ok(ranges.into())
}
