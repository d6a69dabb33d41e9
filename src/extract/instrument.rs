//! # Instrument Walker
//!
//! Emits the per-instrument rows of every declared instrument, then drives
//! the scan walker across the instrument's scan range.

use log::info;

use super::error::{ExtractError, InScope, Scope};
use super::mapping;
use super::scan::walk_scan;
use super::stats::ExtractionStats;
use crate::rows::{Row, RowSink};
use crate::source::RawSource;

const PROGRESS_INTERVAL: usize = 1000;

/// Walk instruments `1..=instrument_count()` in order.
pub(crate) fn walk_instruments(
    source: &mut dyn RawSource,
    sink: &mut dyn RowSink,
    stats: &mut ExtractionStats,
) -> Result<(), ExtractError> {
    for index in 1..=source.instrument_count() {
        walk_instrument(source, index, sink, stats)?;
        stats.instruments += 1;
    }
    Ok(())
}

fn walk_instrument(
    source: &mut dyn RawSource,
    index: i32,
    sink: &mut dyn RowSink,
    stats: &mut ExtractionStats,
) -> Result<(), ExtractError> {
    let scope = Scope::Instrument(index);

    let device = source.instrument_type(index - 1).in_scope(scope)?;
    sink.emit(Row::InstrumentType(mapping::instrument_type_row(
        index, device,
    )));

    let ctx = source.select_instrument(device, index).in_scope(scope)?;
    let source: &dyn RawSource = source;

    let data = source.instrument_data(&ctx).in_scope(scope)?;
    sink.emit(Row::InstrumentData(
        mapping::instrument_data_row(index, data).in_scope(scope)?,
    ));

    let run_header = source.run_header(&ctx).in_scope(scope)?;
    sink.emit(Row::RunHeader(mapping::run_header_row(index, run_header)));

    let run_header_ex = source.run_header_ex(&ctx).in_scope(scope)?;
    let first = run_header_ex.first_spectrum;
    let last = run_header_ex.last_spectrum;
    sink.emit(Row::RunHeaderEx(mapping::run_header_ex_row(
        index,
        run_header_ex,
    )));

    let header = source.trailer_extra_header(&ctx).in_scope(scope)?;
    for (position, item) in (0..).zip(header) {
        sink.emit(Row::TrailerExtraHeader(mapping::trailer_extra_header_row(
            index, position, item,
        )));
    }

    let total = (i64::from(last) - i64::from(first) + 1).max(0);
    info!(
        "Instrument {} ({}): scans {}..={} ({} scans)",
        index,
        ctx.device(),
        first,
        last,
        total
    );

    let mut walked = 0;
    for scan in first..=last {
        walk_scan(source, &ctx, scan, sink, stats)?;
        walked += 1;
        if walked % PROGRESS_INTERVAL == 0 {
            info!("Instrument {}: {}/{} scans", index, walked, total);
        }
    }

    Ok(())
}
