//! `sweep folder` — manage the watched folder list.

use std::path::Path;

use sweep_core::ConfigStore;

use crate::cli::FolderAction;

pub fn run(config_path: &Path, action: &FolderAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = ConfigStore::new(config_path);
    match action {
        FolderAction::Add { path } => {
            store.add_folder(path)?;
            println!("added {}", path.display());
        }
        FolderAction::Remove { path } => {
            if store.remove_folder(path)? {
                println!("removed {}", path.display());
            } else {
                println!("{} was not configured", path.display());
            }
        }
        FolderAction::List => {
            let folders = store.list_folders()?;
            if folders.is_empty() {
                println!("no folders configured");
            }
            for folder in folders {
                println!("{}", folder.display());
            }
        }
    }
    Ok(())
}
