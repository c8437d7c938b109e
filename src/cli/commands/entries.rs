use crate::config::Paths;
use crate::error::Result;
use crate::script::ScriptStore;

pub fn run_entries(paths: &Paths) -> Result<()> {
    let store = ScriptStore::new(&paths.script);
    let entries = store.list()?;
    if entries.is_empty() {
        println!("No entries");
        return Ok(());
    }
    for name in entries {
        println!("{}", name);
    }
    Ok(())
}
