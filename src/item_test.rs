#![allow(clippy::float_cmp)]

use super::*;
use crate::jitter::FixedJitter;

fn tape_at(store: &mut ItemStore, x: f64, y: f64) -> ItemId {
    store
        .create(ItemContent::Tape(TapeColor::Pink), Point::new(x, y), &mut FixedJitter(3.0))
        .id()
}

fn photo() -> ItemContent {
    ItemContent::Photo(ImageRef::from_data_url("data:image/png;base64,AAAA").unwrap())
}

// =============================================================
// ItemKind
// =============================================================

#[test]
fn default_sizes_by_kind() {
    assert_eq!(ItemKind::Photo.default_size(), Size::new(100.0, 100.0));
    assert_eq!(ItemKind::Tape.default_size(), Size::new(80.0, 25.0));
    assert_eq!(ItemKind::Sticker.default_size(), Size::new(30.0, 30.0));
}

#[test]
fn content_determines_kind() {
    assert_eq!(photo().kind(), ItemKind::Photo);
    assert_eq!(ItemContent::Tape(TapeColor::Blue).kind(), ItemKind::Tape);
    assert_eq!(ItemContent::Sticker(StickerKey::C).kind(), ItemKind::Sticker);
}

#[test]
fn kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ItemKind::Sticker).unwrap(), "\"sticker\"");
}

// =============================================================
// create
// =============================================================

#[test]
fn create_assigns_defaults() {
    let mut store = ItemStore::new();
    let item = store
        .create(ItemContent::Sticker(StickerKey::A), Point::new(5.0, 6.0), &mut FixedJitter(-7.5))
        .clone();
    assert_eq!(item.kind(), ItemKind::Sticker);
    assert_eq!(item.position, Point::new(5.0, 6.0));
    assert_eq!(item.size, Size::new(30.0, 30.0));
    assert_eq!(item.rotation, -7.5);
}

#[test]
fn create_ids_are_unique_and_increasing() {
    let mut store = ItemStore::new();
    let a = tape_at(&mut store, 0.0, 0.0);
    let b = tape_at(&mut store, 0.0, 0.0);
    let c = tape_at(&mut store, 0.0, 0.0);
    assert!(a < b && b < c);
}

#[test]
fn ids_are_not_reused_after_remove() {
    let mut store = ItemStore::new();
    let a = tape_at(&mut store, 0.0, 0.0);
    store.remove(a);
    let b = tape_at(&mut store, 0.0, 0.0);
    assert_ne!(a, b);
    assert!(b > a);
}

#[test]
fn all_preserves_insertion_order() {
    let mut store = ItemStore::new();
    let a = tape_at(&mut store, 1.0, 0.0);
    let b = tape_at(&mut store, 2.0, 0.0);
    let c = tape_at(&mut store, 3.0, 0.0);
    let ids: Vec<ItemId> = store.all().iter().map(Item::id).collect();
    assert_eq!(ids, vec![a, b, c]);
}

// =============================================================
// update
// =============================================================

#[test]
fn update_merges_only_supplied_fields() {
    let mut store = ItemStore::new();
    let id = tape_at(&mut store, 10.0, 20.0);
    assert!(store.update(id, &GeometryPatch::rotation(45.0)));
    let item = store.get(id).unwrap();
    assert_eq!(item.rotation, 45.0);
    assert_eq!(item.position, Point::new(10.0, 20.0));
    assert_eq!(item.size, Size::new(80.0, 25.0));
}

#[test]
fn update_applies_all_fields() {
    let mut store = ItemStore::new();
    let id = tape_at(&mut store, 0.0, 0.0);
    let patch = GeometryPatch {
        position: Some(Point::new(1.0, 2.0)),
        size: Some(Size::square(50.0)),
        rotation: Some(-3.0),
    };
    store.update(id, &patch);
    let item = store.get(id).unwrap();
    assert_eq!(item.position, Point::new(1.0, 2.0));
    assert_eq!(item.size, Size::square(50.0));
    assert_eq!(item.rotation, -3.0);
}

#[test]
fn update_missing_is_noop() {
    let mut store = ItemStore::new();
    let id = tape_at(&mut store, 0.0, 0.0);
    store.remove(id);
    assert!(!store.update(id, &GeometryPatch::rotation(1.0)));
    assert!(store.is_empty());
}

#[test]
fn patch_serialization_skips_absent_fields() {
    let json = serde_json::to_value(GeometryPatch::rotation(90.0)).unwrap();
    assert_eq!(json, serde_json::json!({ "rotation": 90.0 }));
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_returns_item() {
    let mut store = ItemStore::new();
    let id = tape_at(&mut store, 0.0, 0.0);
    let removed = store.remove(id).unwrap();
    assert_eq!(removed.id(), id);
    assert!(!store.contains(id));
}

#[test]
fn remove_missing_returns_none() {
    let mut store = ItemStore::new();
    let id = tape_at(&mut store, 0.0, 0.0);
    store.remove(id);
    assert!(store.remove(id).is_none());
}

#[test]
fn remove_keeps_order_of_others() {
    let mut store = ItemStore::new();
    let a = tape_at(&mut store, 0.0, 0.0);
    let b = tape_at(&mut store, 0.0, 0.0);
    let c = tape_at(&mut store, 0.0, 0.0);
    store.remove(b);
    let ids: Vec<ItemId> = store.all().iter().map(Item::id).collect();
    assert_eq!(ids, vec![a, c]);
}

// =============================================================
// Item
// =============================================================

#[test]
fn center_is_mid_bounding_box() {
    let mut store = ItemStore::new();
    let id = store.create(photo(), Point::new(50.0, 50.0), &mut FixedJitter(0.0)).id();
    assert_eq!(store.get(id).unwrap().center(), Point::new(100.0, 100.0));
}

#[test]
fn item_serializes_flat_kind_and_content() {
    let mut store = ItemStore::new();
    let id = tape_at(&mut store, 1.0, 2.0);
    let json = serde_json::to_value(store.get(id).unwrap()).unwrap();
    assert_eq!(json["kind"], "tape");
    assert_eq!(json["content"], "pink");
    assert_eq!(json["position"]["x"], 1.0);
    assert_eq!(json["size"]["height"], 25.0);
}
