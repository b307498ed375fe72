//! Save a store to a temporary file and load it back.
//!
//! Run with: cargo run --example roundtrip

use inistore::IniStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::temp_dir().join("inistore_roundtrip_demo.ini");

    {
        let mut store = IniStore::new();
        store.create_section("UserSettings", "user info")?;
        store.set_value("Name", "Joe User", "", "UserSettings")?;
        store.set_int("Logins", 42, "visit counter", "UserSettings")?;
        store.save_as(&path)?;
        println!("wrote {}", path.display());
    }

    let reloaded = IniStore::open(&path);
    println!(
        "reloaded {} section(s), {} key(s)",
        reloaded.section_count(),
        reloaded.key_count()
    );
    println!("Name   = {}", reloaded.get_string("Name", "UserSettings")?);
    println!("Logins = {}", reloaded.get_int("Logins", "UserSettings")?);

    std::fs::remove_file(&path).ok();
    Ok(())
}
