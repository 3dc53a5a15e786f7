//! Running author/year statistics over scanned volume records.
//!
//! [`StatsAccumulator`] is created per search, folded once per scanned
//! record, and consumed by [`StatsAccumulator::finish`] into a
//! [`StatsSummary`].

use std::collections::HashMap;

use serde::Serialize;

use crate::volume::VolumeRecord;

/// Parse the leading four-digit year of a free-form publication date.
///
/// Returns `None` unless the string starts with four ASCII digits.
///
/// ```
/// use shelfstat_core::stats::parse_leading_year;
/// assert_eq!(parse_leading_year("2020-05-01"), Some(2020));
/// assert_eq!(parse_leading_year("circa 1990"), None);
/// ```
pub fn parse_leading_year(date: &str) -> Option<i32> {
    let prefix = date.as_bytes().get(..4)?;
    if !prefix.iter().all(u8::is_ascii_digit) {
        return None;
    }
    prefix
        .iter()
        .try_fold(0i32, |acc, digit| Some(acc * 10 + i32::from(digit - b'0')))
}

/// Finalized statistics for one search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    #[serde(rename = "mostCommonAuthor")]
    pub most_common_author: Option<String>,
    #[serde(rename = "earliestPublicationYear")]
    pub earliest_year: Option<i32>,
    #[serde(rename = "latestPublicationYear")]
    pub latest_year: Option<i32>,
    #[serde(skip)]
    pub records_scanned: u32,
}

/// Incremental author-frequency and year-range reduction.
#[derive(Debug, Default)]
pub struct StatsAccumulator {
    author_counts: HashMap<String, u32>,
    /// Author that first reached the current maximum count.
    leader: Option<(String, u32)>,
    earliest_year: Option<i32>,
    latest_year: Option<i32>,
    records_scanned: u32,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a whole batch and count it towards the scanned total.
    pub fn fold_batch(&mut self, batch: &[VolumeRecord]) {
        for record in batch {
            self.fold_record(record);
        }
        self.records_scanned = self
            .records_scanned
            .saturating_add(u32::try_from(batch.len()).unwrap_or(u32::MAX));
    }

    /// Fold a single record's authors and publication year.
    pub fn fold_record(&mut self, record: &VolumeRecord) {
        for author in &record.authors {
            self.count_author(author);
        }

        if let Some(year) = record.published_date.as_deref().and_then(parse_leading_year) {
            self.earliest_year = Some(self.earliest_year.map_or(year, |y| y.min(year)));
            self.latest_year = Some(self.latest_year.map_or(year, |y| y.max(year)));
        }
    }

    fn count_author(&mut self, author: &str) {
        let count = self.author_counts.entry(author.to_string()).or_insert(0);
        *count += 1;
        let count = *count;

        // Strictly greater: an equal count never displaces the leader.
        let leads = self.leader.as_ref().map_or(true, |(_, best)| count > *best);
        if leads {
            self.leader = Some((author.to_string(), count));
        }
    }

    /// Records folded through [`Self::fold_batch`] so far.
    pub fn records_scanned(&self) -> u32 {
        self.records_scanned
    }

    /// Occurrences recorded for `author`.
    pub fn author_count(&self, author: &str) -> u32 {
        self.author_counts.get(author).copied().unwrap_or(0)
    }

    pub fn finish(self) -> StatsSummary {
        StatsSummary {
            most_common_author: self.leader.map(|(author, _)| author),
            earliest_year: self.earliest_year,
            latest_year: self.latest_year,
            records_scanned: self.records_scanned,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
