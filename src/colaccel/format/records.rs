//! # Record Decoding
//!
//! One pure function per record type. Each takes the byte span of its
//! table (offsets are relative to the span, not the file) and a record
//! index, and issues a fixed sequence of scalar reads at known offsets.
//!
//! Reserved bytes are skipped over but never surfaced.

use log::trace;

use crate::colaccel::types::error::{AccelError, Result};
use crate::colaccel::types::models::*;
use crate::colaccel::utils::ByteView;

/// Size of one [`CollisionItem`] record.
pub const COLLISION_ITEM_SIZE: usize = Table::CollisionItems.record_size();
/// Size of one section size entry.
pub const SECTION_SIZE_ENTRY_SIZE: usize = Table::SectionSizes.record_size();
/// Size of one [`BoundsEntry`] record.
pub const BOUNDS_ENTRY_SIZE: usize = Table::Bounds.record_size();
/// Size of one [`PlacementItem`] record.
pub const PLACEMENT_ITEM_SIZE: usize = Table::PlacementItems.record_size();

const ALLOC_FLAG_HIGH_OFFSET: usize = 0x29;
const ALLOC_FLAG_HIGH_MASK: u8 = 0xFE;
const FLAGS_OFFSET: usize = 0x2C;
const ALLOC_FLAG_LOW_OFFSET: usize = 0x2D;
const ALLOC_FLAG_LOW_MASK: u8 = 0x01;

/// Byte offset of record `index` inside its span.
fn record_base(index: usize, record_size: usize, span_len: usize) -> Result<usize> {
    index
        .checked_mul(record_size)
        .ok_or(AccelError::OutOfBounds {
            offset: usize::MAX,
            width: record_size,
            buffer_len: span_len,
        })
}

fn read_vector3(view: &ByteView, offset: usize) -> Result<Vector3> {
    Ok(Vector3 {
        x: view.read_f32(offset)?,
        y: view.read_f32(offset + 4)?,
        z: view.read_f32(offset + 8)?,
    })
}

fn read_vector4(view: &ByteView, offset: usize) -> Result<Vector4> {
    Ok(Vector4 {
        x: view.read_f32(offset)?,
        y: view.read_f32(offset + 4)?,
        z: view.read_f32(offset + 8)?,
        w: view.read_f32(offset + 12)?,
    })
}

/// Decodes the collision item at `index`.
///
/// The whole 48-byte record must be in bounds, reserved tail included;
/// a short record fails before any field is read.
pub fn decode_collision_item(span: &[u8], index: usize) -> Result<CollisionItem> {
    let base = record_base(index, COLLISION_ITEM_SIZE, span.len())?;
    let record = ByteView::new(ByteView::new(span).bytes(base, COLLISION_ITEM_SIZE)?);

    let bounding_box = BoundingBox {
        min: read_vector3(&record, 0x00)?,
        max: read_vector3(&record, 0x0C)?,
    };
    let sphere = read_vector4(&record, 0x18)?;
    let flags = record.read_u8(FLAGS_OFFSET)?;

    // The alloc flag is split across two bytes: bits 1-7 from 0x29, bit 0 from 0x2D.
    let alloc_flag = (record.read_u8(ALLOC_FLAG_HIGH_OFFSET)? & ALLOC_FLAG_HIGH_MASK)
        | (record.read_u8(ALLOC_FLAG_LOW_OFFSET)? & ALLOC_FLAG_LOW_MASK);

    Ok(CollisionItem {
        bounding_box,
        sphere,
        flags,
        alloc_flag,
    })
}

/// Decodes the byte size of downstream section `index`.
pub fn decode_section_size(span: &[u8], index: usize) -> Result<i32> {
    let base = record_base(index, SECTION_SIZE_ENTRY_SIZE, span.len())?;
    ByteView::new(span).read_i32(base)
}

/// Decodes the bounds entry at `index`.
pub fn decode_bounds_entry(span: &[u8], index: usize) -> Result<BoundsEntry> {
    let base = record_base(index, BOUNDS_ENTRY_SIZE, span.len())?;
    let record = ByteView::new(ByteView::new(span).bytes(base, BOUNDS_ENTRY_SIZE)?);

    let position = read_vector3(&record, 4)?;
    let mut ids = [0u8; 6];
    for (i, id) in ids.iter_mut().enumerate() {
        *id = record.read_u8(16 + i)?;
    }

    Ok(BoundsEntry { position, ids })
}

/// Decodes the IPL cache entry at `index`.
pub fn decode_placement_item(span: &[u8], index: usize) -> Result<PlacementItem> {
    let base = record_base(index, PLACEMENT_ITEM_SIZE, span.len())?;
    let record = ByteView::new(ByteView::new(span).bytes(base, PLACEMENT_ITEM_SIZE)?);

    let mut indices = [0i32; 5];
    for (i, value) in indices.iter_mut().enumerate() {
        *value = record.read_i32(i * 4)?;
    }

    Ok(PlacementItem { indices })
}

/// Decodes every record of a table span, in record index order.
///
/// `span` must hold exactly `count` records. A failing record is wrapped in
/// [`AccelError::Record`] so the caller learns which table and index broke.
pub fn decode_table<T, F>(span: &[u8], table: Table, count: usize, decode: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(&[u8], usize) -> Result<T> + Sync,
{
    trace!("Decoding {} {} records from {} bytes", count, table, span.len());

    let decode_one = |index: usize| {
        decode(span, index).map_err(|e| AccelError::Record {
            table,
            index,
            source: Box::new(e),
        })
    };

    #[cfg(feature = "parallel")]
    let decoded = {
        use rayon::prelude::*;
        (0..count).into_par_iter().map(decode_one).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let decoded = (0..count).map(decode_one).collect();

    decoded
}
