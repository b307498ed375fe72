//! Build a store in memory, query it, and print the canonical text form.
//!
//! Run with: cargo run --example simple

use inistore::IniStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut store = IniStore::new();

    store.parse(
        r#"
; user info
[UserSettings]
Name=Joe User
Date of Birth=12/25/01

;
; Settings unique to this server
;
[ServerSettings]
Port=1200
IP_Address=127.0.0.1
MachineName=ADMIN
"#,
    )?;

    println!("sections: {}", store.section_count());
    println!("keys:     {}", store.key_count());
    println!("name:     {}", store.get_string("Name", "UserSettings")?);
    println!("port:     {}", store.get_int("Port", "ServerSettings")?);

    // Lookups ignore case
    println!("machine:  {}", store.get_string("machinename", "serversettings")?);

    // Mutate and inspect the dirty flag
    store.set_int("Port", 1201, "changed at runtime", "ServerSettings")?;
    store.set_bool("Verbose", true, "", "ServerSettings")?;
    println!("dirty:    {}", store.is_dirty());

    println!("--- canonical form ---");
    print!("{}", store.serialize());

    Ok(())
}
