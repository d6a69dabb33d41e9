//! # Scan Walker
//!
//! Turns one scan of the selected instrument into its rows.

use log::debug;

use super::error::{ExtractError, InScope, Scope};
use super::mapping;
use super::stats::ExtractionStats;
use crate::rows::{Row, RowSink, ScanKey};
use crate::source::{InstrumentContext, RawSource};

/// Emit every row of scan `scan`.
///
/// Five rows are unconditional. Precursor rows follow for MS^n scans, one
/// per order index whose reaction exists, and a CentroidScan row for
/// centroid-mode scans.
pub(crate) fn walk_scan(
    source: &dyn RawSource,
    ctx: &InstrumentContext,
    scan: i32,
    sink: &mut dyn RowSink,
    stats: &mut ExtractionStats,
) -> Result<(), ExtractError> {
    let key = ScanKey::new(ctx.index(), scan);
    let scope = Scope::Scan(key);

    let trailer = source.trailer_extra(ctx, scan).in_scope(scope)?;
    sink.emit(Row::TrailerExtra(
        mapping::trailer_extra_row(key, trailer).in_scope(scope)?,
    ));

    let statistics = source.scan_statistics(ctx, scan).in_scope(scope)?;
    let is_centroid_scan = statistics.is_centroid_scan;
    sink.emit(Row::ScanStatistics(mapping::scan_statistics_row(
        key, statistics,
    )));

    let scan_object = source.scan(ctx, scan).in_scope(scope)?;
    sink.emit(Row::ScanObject(
        mapping::scan_object_row(key, scan_object).in_scope(scope)?,
    ));

    let stream = source.centroid_stream(ctx, scan, false).in_scope(scope)?;
    sink.emit(Row::CentroidStream(
        mapping::centroid_stream_row(key, stream).in_scope(scope)?,
    ));

    let event = source.scan_event(ctx, scan).in_scope(scope)?;
    let precursor_count = event.ms_order.precursor_count();
    sink.emit(Row::ScanEvent(mapping::scan_event_row(key, event)));

    for order in 0..precursor_count {
        match source.reaction(ctx, scan, order).in_scope(scope)? {
            Some(reaction) => {
                sink.emit(Row::Precursor(mapping::precursor_row(
                    key.precursor(order),
                    reaction,
                )));
                stats.precursors += 1;
            }
            None => {
                debug!("No reaction at order {} for {}", order, scope);
                stats.skipped_reactions += 1;
            }
        }
    }

    if is_centroid_scan {
        let centroids = source.centroid_scan(ctx, scan).in_scope(scope)?;
        sink.emit(Row::CentroidScan(
            mapping::centroid_scan_row(key, centroids).in_scope(scope)?,
        ));
        stats.centroid_scans += 1;
    }

    stats.scans += 1;
    Ok(())
}
