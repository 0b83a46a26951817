//! `cognibot onboard`: first-time setup.

use std::path::Path;

use cognibot_config::AppConfig;

use super::{CommandResult, config_path};

pub fn run(flag: Option<&Path>) -> CommandResult {
    let path = config_path(flag);

    println!("CogniBot First-Time Setup");
    println!("=========================\n");

    if write_default(&path)? {
        println!("Created config file at: {}", path.display());
        println!("\nNext steps:");
        println!("   1. Adjust thresholds or the knowledge path in {}", path.display());
        println!("   2. Run: cognibot chat");
        println!("   3. Teach it something!\n");
    } else {
        println!("\nConfig already exists at: {}", path.display());
        println!("   Edit it manually or delete and re-run onboard.\n");
    }

    println!("Setup complete! Run `cognibot` to start chatting.\n");

    Ok(())
}

/// Write the default config to `path`, creating its directory. An existing
/// file is left alone; returns whether anything was written.
fn write_default(path: &Path) -> std::io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, AppConfig::default_toml())?;
    Ok(true)
}
