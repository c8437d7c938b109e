use crate::config::Paths;
use crate::error::{BootrecovError, Result};
use crate::registry::Registry;

pub fn run_toggle(paths: &Paths, name: &str) -> Result<()> {
    let mut registry = Registry::new(paths);
    let items = registry.load()?;
    let item = items
        .iter()
        .find(|i| i.display_name() == name)
        .ok_or_else(|| BootrecovError::message(format!("no backup named {}", name)))?;
    let updated = registry.toggle_entry(item)?;
    if updated.has_entry {
        println!("added entry for {}", name);
    } else {
        println!("removed entry for {}", name);
    }
    Ok(())
}
