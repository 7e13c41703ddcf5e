//! Profile commands: `awx configure` and `awx profile`.

use anyhow::{Context, Result, bail};
use clap::Args;

use crate::cli::ConnectionArgs;
use crate::output;
use crate::profile::{Profile, storage};

#[derive(Args, Debug)]
pub struct ConfigureArgs {
    /// Start from an empty profile instead of updating the saved one
    #[arg(long)]
    pub reset: bool,
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Remove the saved profile
    #[arg(long)]
    pub clear: bool,
}

/// Save the connection flags, merged over any saved profile.
pub fn run(connection: &ConnectionArgs, args: ConfigureArgs) -> Result<()> {
    let stored = if args.reset {
        None
    } else {
        storage::load_profile().context("Failed to load profile")?
    };

    let profile = Profile::resolve(connection, stored)?;
    profile.auth()?;

    let path = storage::save_profile(&profile).context("Failed to save profile")?;

    output::success("Profile saved");
    println!();
    print_profile(&profile);
    output::field("Path", &path.display().to_string());

    Ok(())
}

/// Show, or clear, the saved profile.
pub fn show(args: ProfileArgs) -> Result<()> {
    if args.clear {
        if storage::clear_profile()? {
            output::success("Profile removed");
        } else {
            output::note("No profile to remove.");
        }
        return Ok(());
    }

    let Some(profile) = storage::load_profile().context("Failed to load profile")? else {
        bail!("No profile saved. Run 'awx configure --host <URL>' first.");
    };

    print_profile(&profile);
    output::field("Path", &storage::profile_path()?.display().to_string());

    Ok(())
}

fn print_profile(profile: &Profile) {
    output::field("Host", &profile.host);
    output::field("Auth", profile.auth_kind());
    if let Some(username) = &profile.username {
        output::field("Username", username);
    }
    if profile.token.is_some() {
        output::field("Token", "********");
    }
    if profile.insecure {
        output::field("TLS", "certificate checks disabled");
    }
    if let Some(secs) = profile.timeout_secs {
        output::field("Timeout", &format!("{secs}s"));
    }
}
