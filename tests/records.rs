mod common;

use colaccel::colaccel::format::records::{
    decode_bounds_entry, decode_collision_item, decode_placement_item, decode_section_size,
    decode_table,
};
use colaccel::{AccelError, Table, Vector3};
use common::{bounds_bytes, collision_item_bytes, placement_bytes};

#[test]
fn decodes_reference_collision_item() {
    let mut rec = [0u8; 48];
    rec[12..16].copy_from_slice(&[0x00, 0x00, 0x80, 0x3F]);
    rec[41] = 0xFF;
    rec[44] = 0x05;
    rec[45] = 0x03;

    let item = decode_collision_item(&rec, 0).unwrap();
    assert_eq!(item.bounding_box.min, Vector3 { x: 0.0, y: 0.0, z: 0.0 });
    assert_eq!(item.bounding_box.max.x, 1.0);
    assert_eq!(item.flags, 5);
    assert_eq!(item.alloc_flag, 0xFF);
}

#[test]
fn decodes_box_and_sphere_fields() {
    let rec = collision_item_bytes(
        [-1.5, 2.0, -3.25],
        [4.0, 5.5, 6.0],
        [0.5, 0.25, -0.125, 9.0],
        0x80,
        0,
        0,
    );
    let item = decode_collision_item(&rec, 0).unwrap();
    assert_eq!(item.bounding_box.min, Vector3 { x: -1.5, y: 2.0, z: -3.25 });
    assert_eq!(item.bounding_box.max, Vector3 { x: 4.0, y: 5.5, z: 6.0 });
    assert_eq!(
        (item.sphere.x, item.sphere.y, item.sphere.z, item.sphere.w),
        (0.5, 0.25, -0.125, 9.0)
    );
    assert_eq!(item.flags, 0x80);
    assert_eq!(item.alloc_flag, 0);
}

#[test]
fn alloc_flag_combines_two_bytes() {
    let patterns: [(u8, u8); 8] = [
        (0x00, 0x00),
        (0x01, 0x00),
        (0x00, 0x01),
        (0xFE, 0xFE),
        (0x01, 0xFF),
        (0xAA, 0x55),
        (0x55, 0xAA),
        (0x80, 0x01),
    ];
    for (b41, b45) in patterns {
        let rec = collision_item_bytes([0.0; 3], [0.0; 3], [0.0; 4], 0, b41, b45);
        let item = decode_collision_item(&rec, 0).unwrap();
        assert_eq!(
            item.alloc_flag,
            (b41 & 0xFE) | (b45 & 0x01),
            "byte41={:#04x} byte45={:#04x}",
            b41,
            b45
        );
    }
}

#[test]
fn reserved_collision_bytes_do_not_leak() {
    let mut rec = collision_item_bytes([0.0; 3], [0.0; 3], [0.0; 4], 7, 0, 0);
    for i in [40, 42, 43, 46, 47] {
        rec[i] = 0xFF;
    }
    let item = decode_collision_item(&rec, 0).unwrap();
    assert_eq!(item.flags, 7);
    assert_eq!(item.alloc_flag, 0);
}

#[test]
fn record_index_selects_the_stride() {
    let mut span = Vec::new();
    span.extend_from_slice(&collision_item_bytes([0.0; 3], [1.0; 3], [0.0; 4], 1, 0, 0));
    span.extend_from_slice(&collision_item_bytes([0.0; 3], [2.0; 3], [0.0; 4], 2, 0, 1));

    let second = decode_collision_item(&span, 1).unwrap();
    assert_eq!(second.flags, 2);
    assert_eq!(second.alloc_flag, 1);
    assert_eq!(second.bounding_box.max.z, 2.0);
}

#[test]
fn short_collision_record_fails_whole() {
    let rec = collision_item_bytes([0.0; 3], [0.0; 3], [0.0; 4], 0, 0, 0);
    let err = decode_collision_item(&rec[..47], 0).unwrap_err();
    match err {
        AccelError::OutOfBounds { offset, width, buffer_len } => {
            assert_eq!((offset, width, buffer_len), (0, 48, 47));
        }
        other => panic!("expected OutOfBounds, got {:?}", other),
    }
    assert!(decode_collision_item(&rec, 1).is_err());
}

#[test]
fn decodes_section_sizes() {
    let mut span = Vec::new();
    for v in [0i32, 4096, -7] {
        span.extend_from_slice(&v.to_le_bytes());
    }
    assert_eq!(decode_section_size(&span, 0).unwrap(), 0);
    assert_eq!(decode_section_size(&span, 1).unwrap(), 4096);
    assert_eq!(decode_section_size(&span, 2).unwrap(), -7);
    assert!(decode_section_size(&span, 3).is_err());
}

#[test]
fn decodes_bounds_entry() {
    let mut span = Vec::new();
    span.extend_from_slice(&bounds_bytes([0.0; 3], [0; 6]));
    span.extend_from_slice(&bounds_bytes([1.5, -2.5, 100.0], [9, 8, 7, 6, 5, 4]));

    let entry = decode_bounds_entry(&span, 1).unwrap();
    assert_eq!(entry.position, Vector3 { x: 1.5, y: -2.5, z: 100.0 });
    assert_eq!(entry.ids, [9, 8, 7, 6, 5, 4]);
}

#[test]
fn decodes_placement_item() {
    let rec = placement_bytes([1, -2, 3, i32::MIN, i32::MAX]);
    let item = decode_placement_item(&rec, 0).unwrap();
    assert_eq!(item.indices, [1, -2, 3, i32::MIN, i32::MAX]);
    assert!(decode_placement_item(&rec[..19], 0).is_err());
}

#[test]
fn huge_record_index_is_out_of_bounds() {
    let rec = placement_bytes([0; 5]);
    assert!(matches!(
        decode_placement_item(&rec, usize::MAX),
        Err(AccelError::OutOfBounds { .. })
    ));
}

#[test]
fn decode_table_keeps_index_order() {
    let mut span = Vec::new();
    for i in 0..64 {
        span.extend_from_slice(&placement_bytes([i, i + 1, i + 2, i + 3, i + 4]));
    }
    let items = decode_table(&span, Table::PlacementItems, 64, decode_placement_item).unwrap();
    assert_eq!(items.len(), 64);
    for (i, item) in items.iter().enumerate() {
        assert_eq!(item.indices[0], i as i32);
    }
}

#[test]
fn decode_table_names_failing_record() {
    let span = placement_bytes([0; 5]);
    let err = decode_table(&span, Table::PlacementItems, 2, decode_placement_item).unwrap_err();
    match err {
        AccelError::Record { table, index, source } => {
            assert_eq!(table, Table::PlacementItems);
            assert_eq!(index, 1);
            assert!(matches!(*source, AccelError::OutOfBounds { offset: 20, .. }));
        }
        other => panic!("expected Record error, got {:?}", other),
    }
}
