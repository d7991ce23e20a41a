//! Integration tests for the settings store behavior contract.
//!
//! These tests exercise the public API end-to-end: `PathRegistry` +
//! `SettingsStore` over a `MemoryBackend`, with `MockWidget` standing in
//! for GUI widgets.

use prefstore::widget::mock::MockWidget;
use prefstore::{
    MemoryBackend, MissingMapping, PathRegistry, SettingId, SettingKind, SettingValue,
    SettingsBackend, SettingsStore, StoreError, WidgetId,
};

const LAST_FILE: SettingId = SettingId(0);
const RECENT_FILES: SettingId = SettingId(1);
const WINDOW_SCALE: SettingId = SettingId(2);
const MAIN_WINDOW: WidgetId = WidgetId(0);
const EXPORT_DIALOG: WidgetId = WidgetId(1);

fn make_registry() -> PathRegistry {
    let mut registry = PathRegistry::new();
    registry.register_setting(LAST_FILE, "Files/LastFile", SettingKind::Plain);
    registry.register_setting(RECENT_FILES, "Files/RecentFiles", SettingKind::RecentList);
    registry.register_setting(WINDOW_SCALE, "Window/Scale", SettingKind::Plain);
    registry.register_widget(MAIN_WINDOW, "MainWindow");
    registry.register_widget(EXPORT_DIALOG, "ExportDialog");
    registry
}

fn make_store() -> SettingsStore<MemoryBackend> {
    SettingsStore::new(MemoryBackend::new(), make_registry())
}

// ── Identifier resolution ─────────────────────────────────────────────────────

#[test]
fn test_registered_setting_is_stored_at_its_exact_path() {
    let mut store = make_store();
    store.save_setting(LAST_FILE, "notes.txt").unwrap();

    // The value must land at the registered path, nowhere else.
    assert_eq!(
        store.backend().get("Files/LastFile").unwrap(),
        Some(SettingValue::from("notes.txt"))
    );
    assert_eq!(store.backend().len(), 1);
}

#[test]
fn test_unregistered_ids_fail_in_both_identifier_spaces() {
    let mut store = make_store();

    let setting_err = store.save_setting(SettingId(99), "x").unwrap_err();
    assert!(matches!(
        setting_err,
        StoreError::MissingMapping(MissingMapping::Setting(SettingId(99)))
    ));

    let mut widget = MockWidget::new();
    let widget_err = store.load_widget_geometry(WidgetId(99), &mut widget).unwrap_err();
    assert!(matches!(
        widget_err,
        StoreError::MissingMapping(MissingMapping::Widget(WidgetId(99)))
    ));
}

#[test]
fn test_same_raw_id_in_both_spaces_does_not_collide() {
    // SettingId(0) and WidgetId(0) share the raw integer but resolve
    // independently.
    let mut store = make_store();
    let widget = MockWidget::with_blobs(vec![4, 5], vec![]);

    store.save_setting(LAST_FILE, "notes.txt").unwrap();
    store.save_widget_geometry(MAIN_WINDOW, &widget).unwrap();

    assert_eq!(
        store.backend().get("Files/LastFile").unwrap(),
        Some(SettingValue::from("notes.txt"))
    );
    assert_eq!(
        store.backend().get("Widgets/MainWindow/Geometry").unwrap(),
        Some(SettingValue::from(vec![4u8, 5]))
    );
}

// ── Defaults on load ──────────────────────────────────────────────────────────

#[test]
fn test_load_setting_or_returns_default_unchanged_when_never_written() {
    let store = make_store();

    // Empty string, zero, and empty list all come back exactly as given.
    assert_eq!(
        store.load_setting_or(LAST_FILE, "").unwrap(),
        SettingValue::from("")
    );
    assert_eq!(
        store.load_setting_or(WINDOW_SCALE, 0i64).unwrap(),
        SettingValue::from(0i64)
    );
    assert_eq!(
        store.load_setting_or(RECENT_FILES, Vec::<String>::new()).unwrap(),
        SettingValue::from(Vec::<String>::new())
    );
}

// ── Recent-items behavior ─────────────────────────────────────────────────────

#[test]
fn test_recent_list_dedup_prepend_truncate_sequence() {
    // Arrange
    let mut store = make_store();
    store.set_max_recent_items(3);

    // Act / Assert – each insert, with the full intermediate state
    store.save_setting(RECENT_FILES, "a").unwrap();
    assert_eq!(store.recent_items(RECENT_FILES).unwrap(), vec!["a"]);

    store.save_setting(RECENT_FILES, "b").unwrap();
    assert_eq!(store.recent_items(RECENT_FILES).unwrap(), vec!["b", "a"]);

    store.save_setting(RECENT_FILES, "c").unwrap();
    assert_eq!(store.recent_items(RECENT_FILES).unwrap(), vec!["c", "b", "a"]);

    // Re-inserting "a" moves it to the front without duplicating it
    store.save_setting(RECENT_FILES, "a").unwrap();
    assert_eq!(store.recent_items(RECENT_FILES).unwrap(), vec!["a", "c", "b"]);

    // A fifth distinct item pushes the oldest off the tail
    store.save_setting(RECENT_FILES, "d").unwrap();
    assert_eq!(store.recent_items(RECENT_FILES).unwrap(), vec!["d", "a", "c"]);
}

#[test]
fn test_reinserting_front_item_leaves_list_unchanged() {
    let mut store = make_store();
    store.save_setting(RECENT_FILES, "a").unwrap();
    store.save_setting(RECENT_FILES, "b").unwrap();

    store.save_setting(RECENT_FILES, "b").unwrap();

    assert_eq!(store.recent_items(RECENT_FILES).unwrap(), vec!["b", "a"]);
}

#[test]
fn test_default_maximum_keeps_ten_newest_items() {
    let mut store = make_store();
    assert_eq!(store.max_recent_items(), 10);

    for i in 0..11 {
        store.save_setting(RECENT_FILES, format!("file{i}")).unwrap();
    }

    let items = store.recent_items(RECENT_FILES).unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[0], "file10");
    // The very first insert has been truncated away
    assert!(!items.contains(&"file0".to_string()));
}

#[test]
fn test_zero_maximum_disables_truncation() {
    let mut store = make_store();
    store.set_max_recent_items(0);

    for i in 0..12 {
        store.save_setting(RECENT_FILES, format!("file{i}")).unwrap();
    }

    let items = store.recent_items(RECENT_FILES).unwrap();
    assert_eq!(items.len(), 12, "no insert may be dropped when max is 0");
    assert_eq!(items[0], "file11");
    assert_eq!(items[11], "file0");
}

#[test]
fn test_negative_maximum_also_disables_truncation() {
    let mut store = make_store();
    store.set_max_recent_items(-1);

    for i in 0..12 {
        store.save_setting(RECENT_FILES, format!("file{i}")).unwrap();
    }

    assert_eq!(store.recent_items(RECENT_FILES).unwrap().len(), 12);
}

#[test]
fn test_recent_items_of_never_written_setting_is_empty() {
    let store = make_store();
    assert!(store.recent_items(RECENT_FILES).unwrap().is_empty());
}

#[test]
fn test_clear_setting_empties_recent_list_and_reseeds() {
    // Arrange
    let mut store = make_store();
    store.save_setting(RECENT_FILES, "a").unwrap();
    store.save_setting(RECENT_FILES, "b").unwrap();

    // Act
    store.clear_setting(RECENT_FILES).unwrap();

    // Assert – empty again, and seed-once works anew
    assert!(store.recent_items(RECENT_FILES).unwrap().is_empty());
    store.store_if_not_exist(RECENT_FILES, "fresh.txt").unwrap();
    assert_eq!(store.recent_items(RECENT_FILES).unwrap(), vec!["fresh.txt"]);
}

// ── Seed-once semantics ───────────────────────────────────────────────────────

#[test]
fn test_store_if_not_exist_seeds_only_the_first_value() {
    let mut store = make_store();

    store.store_if_not_exist(LAST_FILE, "first.txt").unwrap();
    store.store_if_not_exist(LAST_FILE, "second.txt").unwrap();

    assert_eq!(
        store.load_setting(LAST_FILE).unwrap(),
        Some(SettingValue::from("first.txt"))
    );
}

#[test]
fn test_explicitly_stored_empty_string_blocks_seeding() {
    // Absent means "no value at the path"; an empty string is a value.
    let mut store = make_store();
    store.save_setting(LAST_FILE, "").unwrap();

    store.store_if_not_exist(LAST_FILE, "default.txt").unwrap();

    assert_eq!(
        store.load_setting(LAST_FILE).unwrap(),
        Some(SettingValue::from(""))
    );
}

// ── Plain settings ────────────────────────────────────────────────────────────

#[test]
fn test_plain_setting_saves_are_last_write_wins() {
    let mut store = make_store();

    store.save_setting(WINDOW_SCALE, 100i64).unwrap();
    store.save_setting(WINDOW_SCALE, 125i64).unwrap();
    store.save_setting(WINDOW_SCALE, 150i64).unwrap();

    assert_eq!(
        store.load_setting(WINDOW_SCALE).unwrap(),
        Some(SettingValue::from(150i64))
    );
}

// ── Widget geometry & state ───────────────────────────────────────────────────

#[test]
fn test_widget_geometry_round_trips_byte_for_byte() {
    // Arrange – an arbitrary opaque blob, including non-UTF-8 bytes
    let blob = vec![0x00, 0xFF, 0x10, 0x80, 0x7F];
    let mut store = make_store();
    let saved = MockWidget::with_blobs(blob.clone(), vec![]);

    // Act
    store.save_widget_geometry(MAIN_WINDOW, &saved).unwrap();
    let mut restored = MockWidget::new();
    store.load_widget_geometry(MAIN_WINDOW, &mut restored).unwrap();

    // Assert
    assert_eq!(restored.restored_geometries, vec![blob]);
}

#[test]
fn test_geometry_and_state_are_independent_entries() {
    // Arrange
    let mut store = make_store();
    let widget = MockWidget::with_blobs(vec![1, 2], vec![3, 4]);
    store.save_widget(MAIN_WINDOW, &widget).unwrap();

    // Act – overwrite only the state
    let changed = MockWidget::with_blobs(vec![1, 2], vec![9, 9, 9]);
    store.save_widget_state(MAIN_WINDOW, &changed).unwrap();

    // Assert – geometry untouched, state replaced
    let mut reloaded = MockWidget::new();
    store.load_widget(MAIN_WINDOW, &mut reloaded).unwrap();
    assert_eq!(reloaded.restored_geometries, vec![vec![1, 2]]);
    assert_eq!(reloaded.restored_states, vec![vec![9, 9, 9]]);
}

#[test]
fn test_save_widget_writes_both_entries() {
    let mut store = make_store();
    let widget = MockWidget::with_blobs(vec![1], vec![2]);

    store.save_widget(EXPORT_DIALOG, &widget).unwrap();

    assert!(store.backend().contains("Widgets/ExportDialog/Geometry").unwrap());
    assert!(store.backend().contains("Widgets/ExportDialog/State").unwrap());
}

#[test]
fn test_load_widget_with_nothing_stored_restores_from_empty_slices() {
    let store = make_store();
    let mut widget = MockWidget::with_blobs(vec![1], vec![2]);

    store.load_widget(MAIN_WINDOW, &mut widget).unwrap();

    assert_eq!(widget.restored_geometries, vec![Vec::<u8>::new()]);
    assert_eq!(widget.restored_states, vec![Vec::<u8>::new()]);
}

#[test]
fn test_widgets_with_different_segments_do_not_share_entries() {
    let mut store = make_store();
    let main = MockWidget::with_blobs(vec![1], vec![1]);
    let dialog = MockWidget::with_blobs(vec![2], vec![2]);

    store.save_widget(MAIN_WINDOW, &main).unwrap();
    store.save_widget(EXPORT_DIALOG, &dialog).unwrap();

    let mut reloaded = MockWidget::new();
    store.load_widget_geometry(MAIN_WINDOW, &mut reloaded).unwrap();
    assert_eq!(reloaded.restored_geometries, vec![vec![1]]);

    let mut reloaded = MockWidget::new();
    store.load_widget_geometry(EXPORT_DIALOG, &mut reloaded).unwrap();
    assert_eq!(reloaded.restored_geometries, vec![vec![2]]);
}
