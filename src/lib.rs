//! # colaccel
//!
//! A decoder for collision accelerator files: the binary asset that bundles
//! coarse collision boxes and spheres, downstream section sizes, bounds
//! entries and the IPL (item placement) cache.
//!
//! The core works on an in-memory buffer and never writes the format back.
pub mod colaccel;

// Re-export the main types for convenience
pub use colaccel::{
    AccelError,
    Result,
    parse,
    read_file,
    report,
    scan,
    scan_file,
    types::models::{
        BoundingBox,
        BoundsEntry,
        CollisionItem,
        ParsedFile,
        Phase,
        PlacementItem,
        SectionMap,
        Table,
        Vector3,
        Vector4,
    },
    utils::ByteView,
};
