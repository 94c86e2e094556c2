//! File format parsing layer for collision accelerator files.
//!
//! This module bridges raw bytes and the typed [`ParsedFile`](crate::ParsedFile).
//!
//! # Module Organization
//!
//! - [`layout`]: Walks the length-prefixed container and slices section spans
//! - [`records`]: Decodes individual records inside a span
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌─────────────────────┐
//! │  Collision Items    │ ← records::decode_collision_item()
//! ├─────────────────────┤
//! │  Section Sizes      │ ← records::decode_section_size()
//! ├─────────────────────┤
//! │  Reserved Block     │   (skipped, 0x3400 bytes)
//! ├─────────────────────┤
//! │  Bounds             │ ← records::decode_bounds_entry()
//! ├─────────────────────┤
//! │  IPL Item Cache     │ ← records::decode_placement_item()
//! └─────────────────────┘
//!   every span located by layout::scan()
//! ```

pub mod layout;
pub mod records;
