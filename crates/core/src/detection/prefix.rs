use super::builtin::BUILTIN_PREFIXES;
use scriptlens_utils::errors::PrefixTableError;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static BUILTIN_TABLE: LazyLock<PrefixTable> = LazyLock::new(|| {
    let ranges = BUILTIN_PREFIXES
        .iter()
        .map(|&(start, end, label)| PrefixRange::new(start, end, label))
        .collect();
    PrefixTable::new(ranges).unwrap_or_else(|e| {
        tracing::error!("builtin prefix table rejected, prefix matching disabled: {}", e);
        PrefixTable::default()
    })
});

/// A closed range of 32-bit prefixes tagged with a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRange {
    /// First prefix in the range.
    pub start: u32,
    /// Last prefix in the range (inclusive).
    pub end: u32,
    /// Label reported for scripts in the range.
    pub label: String,
}

impl PrefixRange {
    /// Creates the range `start..=end`; ordering is checked when the range joins a table.
    pub fn new(start: u32, end: u32, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Returns `true` if `start <= value <= end`.
    pub const fn contains(&self, value: u32) -> bool {
        self.start <= value && value <= self.end
    }
}

/// A sorted table of disjoint prefix ranges.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrefixTable {
    ranges: Vec<PrefixRange>,
}

impl PrefixTable {
    /// Builds a table, rejecting inverted, unsorted or overlapping ranges.
    pub fn new(ranges: Vec<PrefixRange>) -> Result<Self, PrefixTableError> {
        validate(&ranges)?;
        Ok(Self { ranges })
    }

    /// Builds a table after sorting `ranges` by start.
    pub fn from_unsorted(mut ranges: Vec<PrefixRange>) -> Result<Self, PrefixTableError> {
        ranges.sort_by_key(|r| (r.start, r.end));
        Self::new(ranges)
    }

    /// The compiled-in table, built and validated once on first use.
    ///
    /// Should the compiled-in data ever fail validation, an error is logged and the table is
    /// empty rather than unordered.
    pub fn builtin() -> &'static Self {
        &BUILTIN_TABLE
    }

    /// Returns the range containing `value`, if any.
    pub fn lookup(&self, value: u32) -> Option<&PrefixRange> {
        // Ranges are sorted and disjoint, so their ends are sorted too.
        let idx = self.ranges.partition_point(|r| r.end < value);
        self.ranges.get(idx).filter(|r| r.start <= value)
    }

    /// Re-checks the table invariants.
    pub fn validate(&self) -> Result<(), PrefixTableError> {
        validate(&self.ranges)
    }

    /// The ranges in ascending order.
    pub fn ranges(&self) -> &[PrefixRange] {
        &self.ranges
    }

    /// Number of ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns `true` if the table has no ranges.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

fn validate(ranges: &[PrefixRange]) -> Result<(), PrefixTableError> {
    for (index, range) in ranges.iter().enumerate() {
        if range.start > range.end {
            return Err(PrefixTableError::Inverted {
                index,
                start: range.start,
                end: range.end,
            });
        }
        let Some(prev) = index.checked_sub(1).map(|i| &ranges[i]) else {
            continue;
        };
        if range.start < prev.start {
            return Err(PrefixTableError::Unsorted { index });
        }
        if range.start <= prev.end {
            return Err(PrefixTableError::Overlap {
                index,
                at: range.start,
            });
        }
    }
    Ok(())
}
