//! Container layout scanning and whole-file parsing.
//!
//! # File Structure
//! ```text
//! [4 bytes]       collision item count (u32)
//! [count * 48]    collision items
//! [4 bytes]       section count (u32)
//! [count * 4]     section sizes (i32)
//! [0x3400 bytes]  reserved block (placement definitions, not decoded)
//! [4 bytes]       bounds count (u32)
//! [count * 24]    bounds entries
//! [4 bytes]       placement item count (u32)
//! [count * 20]    placement items
//! ```
//!
//! There is no magic, version or padding. The scan walks the phases in
//! order and never moves backwards; the first phase that cannot be
//! satisfied ends it.

use std::ops::Range;

use log::{debug, info, trace, warn};

use super::records;
use crate::colaccel::types::error::{AccelError, Result};
use crate::colaccel::types::models::*;
use crate::colaccel::utils::ByteView;

/// Size of the opaque block between the section sizes and the bounds table.
pub const RESERVED_BLOCK_SIZE: usize = 0x3400;

const COUNT_FIELD_SIZE: usize = 4;

/// Walks the buffer front to back, phase by phase.
struct Scanner<'a> {
    view: ByteView<'a>,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn remaining(&self) -> usize {
        self.view.len() - self.pos
    }

    /// Consumes `len` bytes, or fails naming `phase`.
    fn take(&mut self, phase: Phase, len: usize) -> Result<Range<usize>> {
        let available = self.remaining();
        if len > available {
            return Err(AccelError::TruncatedFile {
                phase,
                expected: len,
                available,
            });
        }
        let range = self.pos..self.pos + len;
        self.pos = range.end;
        trace!("Phase {}: {:#x}..{:#x}", phase, range.start, range.end);
        Ok(range)
    }

    fn read_count(&mut self, table: Table) -> Result<u32> {
        let range = self.take(table.count_phase(), COUNT_FIELD_SIZE)?;
        self.view.read_u32(range.start)
    }

    /// Reads a table's count field and slices the span it implies.
    fn read_table(&mut self, table: Table) -> Result<(u32, Range<usize>)> {
        let count = self.read_count(table)?;
        // A span too large for usize can never fit, so it saturates into a truncation error.
        let len = (count as usize)
            .checked_mul(table.record_size())
            .unwrap_or(usize::MAX);
        let span = self.take(table.span_phase(), len)?;
        debug!("{} table: {} records at {:#x}..{:#x}", table, count, span.start, span.end);
        Ok((count, span))
    }
}

/// Locates every section of a collision accelerator buffer without decoding records.
///
/// # Errors
/// Returns [`AccelError::TruncatedFile`] naming the first phase whose count
/// field, span or reserved block does not fit in the remaining bytes.
pub fn scan(buffer: &[u8]) -> Result<SectionMap> {
    let mut scanner = Scanner {
        view: ByteView::new(buffer),
        pos: 0,
    };

    let (collision_item_count, collision_items) = scanner.read_table(Table::CollisionItems)?;
    let (section_count, section_sizes) = scanner.read_table(Table::SectionSizes)?;
    let reserved = scanner.take(Phase::ReservedBlock, RESERVED_BLOCK_SIZE)?;
    let (bounds_count, bounds) = scanner.read_table(Table::Bounds)?;
    let (placement_item_count, placement_items) = scanner.read_table(Table::PlacementItems)?;

    let trailing_bytes = scanner.remaining();
    if trailing_bytes > 0 {
        warn!(
            "{} trailing bytes after the placement item table at {:#x} are ignored",
            trailing_bytes, scanner.pos
        );
    }

    Ok(SectionMap {
        file_size: buffer.len(),
        collision_item_count,
        section_count,
        bounds_count,
        placement_item_count,
        collision_items,
        section_sizes,
        reserved,
        bounds,
        placement_items,
        trailing_bytes,
    })
}

/// Parses a complete collision accelerator buffer.
///
/// The buffer is only borrowed for the duration of the call; the returned
/// [`ParsedFile`] owns its records. Parsing the same buffer twice yields
/// identical results.
///
/// # Errors
/// - [`AccelError::TruncatedFile`] if a section does not fit in the buffer
/// - [`AccelError::Record`] if a record inside a span fails to decode
pub fn parse(buffer: &[u8]) -> Result<ParsedFile> {
    info!("Parsing collision accelerator ({} bytes)", buffer.len());
    let map = scan(buffer)?;

    let collision_items =
        decode_span(buffer, &map, Table::CollisionItems, records::decode_collision_item)?;
    let section_sizes =
        decode_span(buffer, &map, Table::SectionSizes, records::decode_section_size)?;
    let bounds = decode_span(buffer, &map, Table::Bounds, records::decode_bounds_entry)?;
    let placement_items =
        decode_span(buffer, &map, Table::PlacementItems, records::decode_placement_item)?;

    info!(
        "Parsed: {} collision items, {} sections, {} bounds, {} IPL items",
        collision_items.len(),
        section_sizes.len(),
        bounds.len(),
        placement_items.len()
    );

    Ok(ParsedFile {
        file_size: map.file_size,
        collision_item_count: map.collision_item_count,
        section_count: map.section_count,
        bounds_count: map.bounds_count,
        placement_item_count: map.placement_item_count,
        collision_items,
        section_sizes,
        bounds,
        placement_items,
        trailing_bytes: map.trailing_bytes,
    })
}

fn decode_span<T, F>(buffer: &[u8], map: &SectionMap, table: Table, decode: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(&[u8], usize) -> Result<T> + Sync,
{
    // `scan` guarantees every span lies inside the buffer.
    let span = &buffer[map.span(table)];
    records::decode_table(span, table, map.count(table) as usize, decode)
}
