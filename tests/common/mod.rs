//! Synthetic collision accelerator buffers for integration tests.
#![allow(dead_code)]

pub const RESERVED_BLOCK_SIZE: usize = 0x3400;

/// Raw 48-byte collision item with the given fields; reserved bytes are zero.
pub fn collision_item_bytes(
    min: [f32; 3],
    max: [f32; 3],
    sphere: [f32; 4],
    flags: u8,
    byte41: u8,
    byte45: u8,
) -> [u8; 48] {
    let mut rec = [0u8; 48];
    for (i, v) in min.iter().chain(max.iter()).chain(sphere.iter()).enumerate() {
        rec[i * 4..i * 4 + 4].copy_from_slice(&v.to_le_bytes());
    }
    rec[41] = byte41;
    rec[44] = flags;
    rec[45] = byte45;
    rec
}

/// Raw 24-byte bounds entry; reserved bytes are filled with `0xAA` so a
/// decoder reading the wrong offset shows up in assertions.
pub fn bounds_bytes(position: [f32; 3], ids: [u8; 6]) -> [u8; 24] {
    let mut rec = [0xAAu8; 24];
    for (i, v) in position.iter().enumerate() {
        rec[4 + i * 4..8 + i * 4].copy_from_slice(&v.to_le_bytes());
    }
    rec[16..22].copy_from_slice(&ids);
    rec
}

pub fn placement_bytes(indices: [i32; 5]) -> [u8; 20] {
    let mut rec = [0u8; 20];
    for (i, v) in indices.iter().enumerate() {
        rec[i * 4..i * 4 + 4].copy_from_slice(&v.to_le_bytes());
    }
    rec
}

/// Assembles a complete file buffer.
#[derive(Default)]
pub struct AccelBuilder {
    pub items: Vec<[u8; 48]>,
    pub sections: Vec<i32>,
    pub bounds: Vec<[u8; 24]>,
    pub placements: Vec<[u8; 20]>,
    pub trailing: Vec<u8>,
}

impl AccelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, rec: [u8; 48]) -> Self {
        self.items.push(rec);
        self
    }

    pub fn section(mut self, size: i32) -> Self {
        self.sections.push(size);
        self
    }

    pub fn bound(mut self, rec: [u8; 24]) -> Self {
        self.bounds.push(rec);
        self
    }

    pub fn placement(mut self, rec: [u8; 20]) -> Self {
        self.placements.push(rec);
        self
    }

    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing.extend_from_slice(bytes);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(self.items.len() as u32).to_le_bytes());
        for rec in &self.items {
            out.extend_from_slice(rec);
        }
        out.extend_from_slice(&(self.sections.len() as u32).to_le_bytes());
        for size in &self.sections {
            out.extend_from_slice(&size.to_le_bytes());
        }
        // Non-zero filler so a misplaced count read would not look like 0.
        out.extend(std::iter::repeat_n(0x5Au8, RESERVED_BLOCK_SIZE));
        out.extend_from_slice(&(self.bounds.len() as u32).to_le_bytes());
        for rec in &self.bounds {
            out.extend_from_slice(rec);
        }
        out.extend_from_slice(&(self.placements.len() as u32).to_le_bytes());
        for rec in &self.placements {
            out.extend_from_slice(rec);
        }
        out.extend_from_slice(&self.trailing);
        out
    }
}

/// A small file with one record in every table and two sections.
pub fn sample_file() -> Vec<u8> {
    AccelBuilder::new()
        .item(collision_item_bytes(
            [-1.0, -2.0, -3.0],
            [1.0, 2.0, 3.0],
            [0.0, 0.0, 0.0, 3.75],
            5,
            0xFF,
            0x03,
        ))
        .section(1024)
        .section(-1)
        .bound(bounds_bytes([10.5, -20.25, 0.125], [1, 2, 3, 4, 5, 255]))
        .placement(placement_bytes([7, -1, 0, 42, i32::MAX]))
        .build()
}
