use crate::config::Paths;
use crate::error::Result;
use crate::registry::{Registry, ViewItem};

pub fn run_list(paths: &Paths) -> Result<()> {
    let mut registry = Registry::new(paths);
    let items = registry.load()?;
    if items.is_empty() {
        println!("No backups found");
        return Ok(());
    }
    for item in &items {
        println!("{}", render_row(item));
    }
    Ok(())
}

fn render_row(item: &ViewItem) -> String {
    let status = if item.is_complete() { "OK" } else { "Incomplete" };
    let mut row = format!("{} {}", item.display_name(), status);
    if item.has_entry {
        row.push_str(" [grub]");
    }
    row
}
