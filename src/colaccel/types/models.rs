//! Core data structures for collision accelerator components.
//!
//! This module defines the fundamental types used throughout the library:
//! - Geometry primitives (vectors, boxes, spheres)
//! - One plain value type per on-disk record
//! - The parse phases and table identifiers used for diagnostics
//! - The section map and fully parsed file

use std::fmt;
use std::ops::Range;

/// A position or half-extent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A sphere center (`x`, `y`, `z`) and radius (`w`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Axis-aligned box stored as two corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    pub min: Vector3,
    pub max: Vector3,
}

/// One 48-byte collision item: a coarse AABB plus a bounding sphere.
///
/// ```text
/// 0x00  Vector3  box.min
/// 0x0C  Vector3  box.max
/// 0x18  Vector4  sphere
/// 0x28  u8       reserved
/// 0x29  u8       bits 1-7 -> alloc_flag, bit 0 reserved
/// 0x2A  u8[2]    reserved
/// 0x2C  u8       flags
/// 0x2D  u8       bit 0 -> alloc_flag, bits 1-7 reserved
/// 0x2E  u8[2]    reserved
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionItem {
    pub bounding_box: BoundingBox,
    pub sphere: Vector4,
    pub flags: u8,
    /// Composite of `byte[0x29] & 0xFE` and `byte[0x2D] & 0x01`.
    pub alloc_flag: u8,
}

/// One 24-byte bounds entry.
///
/// Bytes 0-3 and 22-23 are reserved.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundsEntry {
    pub position: Vector3,
    /// Six identifier/flag bytes, meaning unknown.
    pub ids: [u8; 6],
}

/// One 20-byte entry of the IPL (item placement) cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementItem {
    pub indices: [i32; 5],
}

/// The decoded record tables of a collision accelerator file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    CollisionItems,
    SectionSizes,
    Bounds,
    PlacementItems,
}

impl Table {
    /// All tables, in file order.
    pub const ALL: [Table; 4] = [
        Table::CollisionItems,
        Table::SectionSizes,
        Table::Bounds,
        Table::PlacementItems,
    ];

    /// Size in bytes of a single record of this table.
    pub const fn record_size(&self) -> usize {
        match self {
            Table::CollisionItems => 48,
            Table::SectionSizes => 4,
            Table::Bounds => 24,
            Table::PlacementItems => 20,
        }
    }

    /// The phase that reads this table's record count.
    pub fn count_phase(&self) -> Phase {
        match self {
            Table::CollisionItems => Phase::ItemCount,
            Table::SectionSizes => Phase::SectionCount,
            Table::Bounds => Phase::BoundsCount,
            Table::PlacementItems => Phase::PlacementCount,
        }
    }

    /// The phase that slices this table's records.
    pub fn span_phase(&self) -> Phase {
        match self {
            Table::CollisionItems => Phase::ItemSpan,
            Table::SectionSizes => Phase::SectionSpan,
            Table::Bounds => Phase::BoundsSpan,
            Table::PlacementItems => Phase::PlacementSpan,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Table::CollisionItems => write!(f, "collision item"),
            Table::SectionSizes => write!(f, "section size"),
            Table::Bounds => write!(f, "bounds"),
            Table::PlacementItems => write!(f, "placement item"),
        }
    }
}

/// The strictly ordered phases of a layout scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    ItemCount,
    ItemSpan,
    SectionCount,
    SectionSpan,
    ReservedBlock,
    BoundsCount,
    BoundsSpan,
    PlacementCount,
    PlacementSpan,
}

impl Phase {
    /// 1-based position of the phase in the scan.
    pub fn ordinal(&self) -> usize {
        *self as usize + 1
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Phase::ItemCount => "collision item count",
            Phase::ItemSpan => "collision items",
            Phase::SectionCount => "section count",
            Phase::SectionSpan => "section sizes",
            Phase::ReservedBlock => "reserved block",
            Phase::BoundsCount => "bounds count",
            Phase::BoundsSpan => "bounds",
            Phase::PlacementCount => "placement item count",
            Phase::PlacementSpan => "placement items",
        };
        write!(f, "{} ({})", self.ordinal(), name)
    }
}

/// Absolute byte ranges of every section in a scanned buffer.
///
/// Produced by [`scan`](crate::colaccel::format::layout::scan) before any
/// record is decoded. Ranges index the whole file buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMap {
    pub file_size: usize,
    pub collision_item_count: u32,
    pub section_count: u32,
    pub bounds_count: u32,
    pub placement_item_count: u32,
    pub collision_items: Range<usize>,
    pub section_sizes: Range<usize>,
    pub reserved: Range<usize>,
    pub bounds: Range<usize>,
    pub placement_items: Range<usize>,
    /// Bytes left after the placement item span.
    pub trailing_bytes: usize,
}

impl SectionMap {
    /// Byte range of a record table.
    pub fn span(&self, table: Table) -> Range<usize> {
        match table {
            Table::CollisionItems => self.collision_items.clone(),
            Table::SectionSizes => self.section_sizes.clone(),
            Table::Bounds => self.bounds.clone(),
            Table::PlacementItems => self.placement_items.clone(),
        }
    }

    /// Record count read from the header field of a table.
    pub fn count(&self, table: Table) -> u32 {
        match table {
            Table::CollisionItems => self.collision_item_count,
            Table::SectionSizes => self.section_count,
            Table::Bounds => self.bounds_count,
            Table::PlacementItems => self.placement_item_count,
        }
    }
}

/// A fully decoded collision accelerator file.
///
/// Owns plain values only; the source buffer is not retained.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFile {
    /// Length of the source buffer in bytes.
    pub file_size: usize,
    pub collision_item_count: u32,
    pub section_count: u32,
    pub bounds_count: u32,
    pub placement_item_count: u32,
    pub collision_items: Vec<CollisionItem>,
    pub section_sizes: Vec<i32>,
    pub bounds: Vec<BoundsEntry>,
    pub placement_items: Vec<PlacementItem>,
    pub trailing_bytes: usize,
}
