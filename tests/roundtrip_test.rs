//! File round-trip tests: save then reload yields an equivalent document.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use inistore::IniStore;

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Helper to create a temporary directory for test files
fn create_test_dir() -> PathBuf {
    let counter = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir =
        std::env::temp_dir().join(format!("inistore_roundtrip_test_{}_{}", timestamp, counter));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Helper to clean up test directory
fn cleanup_test_dir(dir: &PathBuf) {
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn test_built_document_survives_save_and_load() {
    let dir = create_test_dir();
    let path = dir.join("settings.ini");

    let mut store = IniStore::new();
    store.create_section("UserSettings", "user info").unwrap();
    store
        .set_value("Name", "Joe User", "", "UserSettings")
        .unwrap();
    store
        .set_value("Date of Birth", "12/25/01", "", "UserSettings")
        .unwrap();
    store
        .create_section("ServerSettings", "Settings unique to this server")
        .unwrap();
    store.set_int("Port", 1200, "", "ServerSettings").unwrap();
    store
        .set_value("IP_Address", "127.0.0.1", "local only", "ServerSettings")
        .unwrap();
    store.save_as(&path).unwrap();

    let reloaded = IniStore::open(&path);

    assert_eq!(reloaded.section_count(), 3);
    assert_eq!(reloaded.key_count(), 4);
    assert_eq!(
        reloaded.get_string("Name", "UserSettings").unwrap(),
        "Joe User"
    );
    assert_eq!(
        reloaded.get_string("Date of Birth", "UserSettings").unwrap(),
        "12/25/01"
    );
    assert_eq!(reloaded.get_int("Port", "ServerSettings").unwrap(), 1200);
    assert_eq!(
        reloaded.find_section("UserSettings").unwrap().comment,
        "; user info"
    );
    assert_eq!(
        reloaded.find_key("IP_Address", "ServerSettings").unwrap().comment,
        "; local only"
    );

    cleanup_test_dir(&dir);
}

#[test]
fn test_section_and_key_order_survive_reload() {
    let dir = create_test_dir();
    let path = dir.join("ordered.ini");

    let mut store = IniStore::new();
    for section in ["Alpha", "Beta", "Gamma"] {
        store.create_section(section, "").unwrap();
        for key in ["one", "two", "three"] {
            store.set_value(key, "x", "", section).unwrap();
        }
    }
    store.save_as(&path).unwrap();

    let reloaded = IniStore::open(&path);

    let sections: Vec<&str> = reloaded
        .sections()
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(sections, ["", "Alpha", "Beta", "Gamma"]);

    let keys: Vec<&str> = reloaded
        .find_section("Beta")
        .unwrap()
        .keys
        .iter()
        .map(|k| k.name.as_str())
        .collect();
    assert_eq!(keys, ["one", "two", "three"]);

    cleanup_test_dir(&dir);
}

#[test]
fn test_second_save_is_byte_identical() {
    let dir = create_test_dir();
    let first = dir.join("first.ini");
    let second = dir.join("second.ini");

    let mut store = IniStore::new();
    store.create_section("UserSettings", "user info").unwrap();
    store
        .set_value("Name", "Joe User", "the display name", "UserSettings")
        .unwrap();
    store.set_bool("Active", true, "", "UserSettings").unwrap();
    store.save_as(&first).unwrap();

    let mut reloaded = IniStore::open(&first);
    reloaded.save_as(&second).unwrap();

    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );

    cleanup_test_dir(&dir);
}

#[test]
fn test_hand_edited_file_is_canonicalized() {
    let dir = create_test_dir();
    let source = dir.join("edited.ini");
    let saved = dir.join("canonical.ini");

    fs::write(
        &source,
        "  ; ragged comment\n[ Padded ]\n  Key =  spaced value  \nBare\n",
    )
    .unwrap();

    let mut store = IniStore::open(&source);
    store.save_as(&saved).unwrap();

    let reloaded = IniStore::open(&saved);
    assert!(reloaded.has_section("Padded"));
    assert_eq!(reloaded.get_string("Key", "Padded").unwrap(), "spaced value");
    assert_eq!(reloaded.get_string("Bare", "Padded").unwrap(), "");
    assert_eq!(
        reloaded.find_section("Padded").unwrap().comment,
        "; ragged comment"
    );

    cleanup_test_dir(&dir);
}

#[test]
fn test_load_merges_into_current_document() {
    let dir = create_test_dir();
    let path = dir.join("extra.ini");
    fs::write(&path, "[Extra]\nadded=1\n").unwrap();

    let mut store = IniStore::new();
    store.set_value("existing", "kept", "", "").unwrap();
    store.load(&path).unwrap();

    assert_eq!(store.get_string("existing", "").unwrap(), "kept");
    assert_eq!(store.get_int("added", "Extra").unwrap(), 1);
    assert!(!store.is_dirty());

    cleanup_test_dir(&dir);
}

#[test]
fn test_empty_file_loads_successfully() {
    let dir = create_test_dir();
    let path = dir.join("empty.ini");
    fs::write(&path, "").unwrap();

    let mut store = IniStore::new();
    store.load(&path).unwrap();

    assert_eq!(store.section_count(), 1);
    assert_eq!(store.key_count(), 0);

    cleanup_test_dir(&dir);
}
