use crate::config::Paths;
use crate::error::Result;
use crate::registry::Registry;

pub fn run_remove(paths: &Paths, name: &str) -> Result<()> {
    let mut registry = Registry::new(paths);
    registry.remove_entry_by_name(name)?;
    println!("removed entry for {}", name);
    Ok(())
}
