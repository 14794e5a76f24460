//! `sweep config` — show or edit configuration values.

use std::path::Path;

use sweep_core::ConfigStore;

use crate::cli::ConfigAction;

pub fn run(config_path: &Path, action: &ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = ConfigStore::new(config_path);
    match action {
        ConfigAction::Show => {
            let config = store.load()?;
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Set { key, value } => {
            store.set(key, value)?;
            println!("{key} = {value}");
        }
        ConfigAction::AllowExt { ext } => {
            store.add_extension(ext)?;
            println!("allowing .{}", ext.trim_start_matches('.'));
        }
        ConfigAction::DenyExt { ext } => {
            if store.remove_extension(ext)? {
                println!("no longer allowing .{}", ext.trim_start_matches('.'));
            } else {
                println!(".{} was not on the allow-list", ext.trim_start_matches('.'));
            }
        }
    }
    Ok(())
}
