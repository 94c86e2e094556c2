//! Plain-text dump of a parsed collision accelerator.
//!
//! The layout matches the historical `_dump.txt` reports line for line so
//! existing dumps can be diffed against new ones.

use std::fmt;
use std::io::Write;

use super::types::error::Result;
use super::types::models::*;

const BANNER: &str = "-------------------Collision accelerator dump---------------------";
const COLLISIONS_RULE: &str = "---------------------------Collisions-----------------------------";
const SECTIONS_RULE: &str = "----------------------------Sections------------------------------";
const BOUNDS_RULE: &str = "-----------------------------Bounds-------------------------------";
const IPL_ITEMS_RULE: &str = "----------------------------IPL Items-----------------------------";

/// Fixed-point float with six decimals; non-finite values print as `nan`, `inf`, `-inf`.
struct Fixed(f32);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_nan() {
            write!(f, "nan")
        } else {
            // `inf` / `-inf` already match
            write!(f, "{:.6}", self.0)
        }
    }
}

/// Writes the full report for `file` to `out`.
pub fn write_report<W: Write>(file: &ParsedFile, out: &mut W) -> Result<()> {
    write!(out, "\n{}\n", BANNER)?;
    write!(out, "File size: {} Bytes", file.file_size)?;
    write!(out, "\nCollision items: {}", file.collision_item_count)?;
    write!(out, "\nSections: {}", file.section_count)?;
    write!(out, "\nCollision bounds: {}", file.bounds_count)?;
    write!(out, "\nIPL items: {}", file.placement_item_count)?;
    write!(out, "\n{}\n", COLLISIONS_RULE)?;

    for item in &file.collision_items {
        let (min, max) = (item.bounding_box.min, item.bounding_box.max);
        writeln!(
            out,
            "cube {} {} {} {} {} {}",
            Fixed(min.x),
            Fixed(min.y),
            Fixed(min.z),
            Fixed(max.x),
            Fixed(max.y),
            Fixed(max.z)
        )?;
        let sphere = item.sphere;
        writeln!(
            out,
            "sphere {} {} {} {}",
            Fixed(sphere.x),
            Fixed(sphere.y),
            Fixed(sphere.z),
            Fixed(sphere.w)
        )?;
        writeln!(out, "flags {}", item.flags)?;
        writeln!(out, "alloc_flag {}", item.alloc_flag)?;
    }

    write!(out, "\n{}\n", SECTIONS_RULE)?;
    // Sections are numbered from 1 in the report.
    for (i, size) in file.section_sizes.iter().enumerate() {
        writeln!(out, "Section {} size: {}", i + 1, size)?;
    }

    write!(out, "\n{}\n", BOUNDS_RULE)?;
    for entry in &file.bounds {
        let p = entry.position;
        write!(out, "BoundData: {} {} {}", Fixed(p.x), Fixed(p.y), Fixed(p.z))?;
        for id in entry.ids {
            write!(out, " {}", id)?;
        }
        writeln!(out)?;
    }

    write!(out, "\n{}\n", IPL_ITEMS_RULE)?;
    for item in &file.placement_items {
        write!(out, "IPL Item:")?;
        for index in item.indices {
            write!(out, " {}", index)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Renders the report into a `String`.
pub fn render(file: &ParsedFile) -> Result<String> {
    let mut buf = Vec::new();
    write_report(file, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
