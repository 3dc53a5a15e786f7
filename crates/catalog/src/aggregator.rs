//! Chunked statistics scan over the first matches of a query.
//!
//! [`collect_stats`] walks the scan window (`min(total, STATS_CAP)`) in
//! `CHUNK_SIZE` steps, strictly one fetch at a time, and folds each batch
//! into a [`StatsAccumulator`]. A chunk whose fetch fails contributes
//! nothing; the scan moves on to the next offset.

use shelfstat_core::search::{scan_window, CHUNK_SIZE};
use shelfstat_core::stats::{StatsAccumulator, StatsSummary};
use shelfstat_core::volume::VolumeRecord;

use crate::source::VolumeSource;

// ---------------------------------------------------------------------------
// Chunk plumbing
// ---------------------------------------------------------------------------

/// Result of fetching one statistics chunk.
#[derive(Debug)]
pub enum ChunkOutcome {
    Records(Vec<VolumeRecord>),
    /// Upstream status or transport failure; treated as contributing nothing.
    Failed,
}

/// Yields the start offset of each chunk inside the scan window.
#[derive(Debug, Clone)]
pub struct ChunkCursor {
    next_offset: u32,
    window: u32,
}

impl ChunkCursor {
    pub fn new(window: u32) -> Self {
        Self {
            next_offset: 0,
            window,
        }
    }
}

impl Iterator for ChunkCursor {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.next_offset >= self.window {
            return None;
        }
        let offset = self.next_offset;
        self.next_offset = self.next_offset.saturating_add(CHUNK_SIZE);
        Some(offset)
    }
}

/// Why the scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStop {
    /// Scanned count reached the window.
    CapReached,
    /// A batch came back with no records.
    Exhausted,
    /// A batch came back smaller than `CHUNK_SIZE`.
    ShortBatch,
    /// Every offset in the window was requested (only reachable when some
    /// chunks failed, or when the window is empty).
    WindowSpent,
}

/// Finalized statistics plus scan bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsReport {
    pub summary: StatsSummary,
    pub chunks_requested: u32,
    pub chunks_failed: u32,
    pub stop: ScanStop,
}

// ---------------------------------------------------------------------------
// Scan
// ---------------------------------------------------------------------------

async fn fetch_chunk<S>(source: &S, query: &str, offset: u32) -> ChunkOutcome
where
    S: VolumeSource + ?Sized,
{
    match source.fetch_volumes(query, CHUNK_SIZE, offset).await {
        Ok(page) => ChunkOutcome::Records(page.items),
        Err(e) => {
            tracing::warn!(offset, error = %e, "Statistics chunk failed, skipping");
            ChunkOutcome::Failed
        }
    }
}

/// Scan up to `min(total_items, STATS_CAP)` records of `query` and reduce
/// them to author/year statistics.
///
/// Never fails: chunk errors are absorbed and reflected only in
/// [`StatsReport::chunks_failed`].
pub async fn collect_stats<S>(source: &S, query: &str, total_items: u32) -> StatsReport
where
    S: VolumeSource + ?Sized,
{
    let to_scan = scan_window(total_items);
    let mut acc = StatsAccumulator::new();
    let mut chunks_requested = 0;
    let mut chunks_failed = 0;
    let mut stop = ScanStop::WindowSpent;

    for offset in ChunkCursor::new(to_scan) {
        chunks_requested += 1;

        let batch = match fetch_chunk(source, query, offset).await {
            ChunkOutcome::Records(batch) => batch,
            ChunkOutcome::Failed => {
                chunks_failed += 1;
                continue;
            }
        };

        acc.fold_batch(&batch);

        if acc.records_scanned() >= to_scan {
            stop = ScanStop::CapReached;
            break;
        }
        if batch.is_empty() {
            stop = ScanStop::Exhausted;
            break;
        }
        if batch.len() < CHUNK_SIZE as usize {
            stop = ScanStop::ShortBatch;
            break;
        }
    }

    let summary = acc.finish();
    tracing::debug!(
        to_scan,
        records_scanned = summary.records_scanned,
        chunks_requested,
        chunks_failed,
        stop = ?stop,
        "Statistics scan finished",
    );

    StatsReport {
        summary,
        chunks_requested,
        chunks_failed,
        stop,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
