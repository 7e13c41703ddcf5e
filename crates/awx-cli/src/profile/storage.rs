//! Profile storage on disk.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use super::Profile;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Environment variable that relocates the config directory.
const CONFIG_DIR_ENV: &str = "AWX_CONFIG_DIR";

const PROFILE_FILE: &str = "profile.json";

/// Directory holding the profile, created if missing.
fn config_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("", "", "awx")
            .context("Could not determine config directory")?
            .config_dir()
            .to_path_buf(),
    };

    fs::create_dir_all(&dir).context("Failed to create config directory")?;
    Ok(dir)
}

/// Path of the profile file.
pub fn profile_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(PROFILE_FILE))
}

/// Save a profile to disk, readable by the owner only.
pub fn save_profile(profile: &Profile) -> Result<PathBuf> {
    let path = profile_path()?;
    let json = serde_json::to_string_pretty(profile)?;

    fs::write(&path, json).context("Failed to write profile")?;

    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    tracing::debug!(path = %path.display(), "Saved profile");
    Ok(path)
}

/// Load the saved profile, if there is one.
pub fn load_profile() -> Result<Option<Profile>> {
    let path = profile_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read profile")?;
    let profile = serde_json::from_str(&json)
        .with_context(|| format!("Invalid profile at {}", path.display()))?;

    Ok(Some(profile))
}

/// Remove the saved profile. Returns whether one existed.
pub fn clear_profile() -> Result<bool> {
    let path = profile_path()?;

    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(&path).context("Failed to remove profile")?;
    Ok(true)
}
