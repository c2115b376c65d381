//! Login / logout handlers.
//!
//! The session is already signed in by the time these run; `login`
//! exists to verify credentials explicitly and optionally persist the
//! password in the system keyring.

use paddock_core::Session;

use crate::cli::{GlobalOpts, LoginArgs};
use crate::error::CliError;

pub fn login(
    _session: &Session,
    args: LoginArgs,
    profile: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if args.save {
        let cfg = paddock_config::load_config_or_default();
        if let Some(p) = cfg.profiles.get(profile) {
            use secrecy::ExposeSecret;
            let password = paddock_config::resolve_password(p, profile)?;
            paddock_config::store_password(profile, password.expose_secret())?;
            if !global.quiet {
                eprintln!("Password stored in keyring for profile '{profile}'");
            }
        }
    }
    if !global.quiet {
        eprintln!("Credentials for profile '{profile}' are valid");
    }
    Ok(())
}

pub async fn logout(session: &Session, profile: &str, global: &GlobalOpts) -> Result<(), CliError> {
    session
        .logout()
        .await
        .map_err(|e| CliError::from_core(e, profile, global.timeout))?;
    if !global.quiet {
        eprintln!("Signed out");
    }
    Ok(())
}
