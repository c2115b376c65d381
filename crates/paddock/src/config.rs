//! Bridges the shared config crate to CLI flags.
//!
//! Resolves the active profile, applies command-line overrides, and
//! builds a signed-in [`Session`] for resource commands.

use secrecy::SecretString;

use paddock_config::{Config, ConfigError, Profile};
use paddock_core::{Session, SessionConfig};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// The profile name in effect: `--profile`, else the configured
/// default, else "default".
pub fn active_profile_name(global: &GlobalOpts, cfg: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Resolve connection parameters from profile + CLI overrides.
///
/// A `--host` flag works without any profile at all; otherwise the
/// named profile must exist.
pub fn resolve_session_config(
    global: &GlobalOpts,
    cfg: &Config,
    profile_name: &str,
) -> Result<(SessionConfig, Credentials), CliError> {
    // Ad-hoc connection from flags alone.
    if let Some(ref host) = global.host {
        let profile = Profile {
            host: host.clone(),
            email: global.email.clone(),
            password: None,
            password_env: None,
            ca_cert: None,
            insecure: Some(global.insecure),
            timeout: Some(global.timeout),
        };
        let session = to_session_config(&profile)?;
        let creds = Credentials::resolve(&profile, profile_name)?;
        return Ok((session, creds));
    }

    let profile = cfg
        .profiles
        .get(profile_name)
        .ok_or_else(|| {
            if cfg.profiles.is_empty() {
                CliError::NoConfig {
                    path: paddock_config::config_path().display().to_string(),
                }
            } else {
                CliError::ProfileNotFound {
                    name: profile_name.to_owned(),
                }
            }
        })?;

    let mut session = to_session_config(profile)?;
    if global.insecure {
        session.tls = paddock_api::TlsMode::DangerAcceptInvalid;
    }
    session.timeout = std::time::Duration::from_secs(global.timeout);

    let mut creds = Credentials::resolve(profile, profile_name)?;
    if let Some(ref email) = global.email {
        creds.email = email.clone();
    }
    Ok((session, creds))
}

fn to_session_config(profile: &Profile) -> Result<SessionConfig, CliError> {
    paddock_config::profile_to_session_config(profile).map_err(|err| match err {
        ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
        other => CliError::Config(other),
    })
}

/// Resolved login credentials for one invocation.
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    fn resolve(profile: &Profile, profile_name: &str) -> Result<Self, CliError> {
        let email =
            paddock_config::resolve_email(profile, profile_name).map_err(no_credentials)?;
        let password =
            paddock_config::resolve_password(profile, profile_name).map_err(no_credentials)?;
        Ok(Self { email, password })
    }
}

fn no_credentials(err: ConfigError) -> CliError {
    match err {
        ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
        other => CliError::Config(other),
    }
}

/// Build a session and sign in with the resolved credentials.
pub async fn connect(global: &GlobalOpts) -> Result<(Session, String), CliError> {
    let cfg = paddock_config::load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);
    let (session_config, creds) = resolve_session_config(global, &cfg, &profile_name)?;

    let session = Session::new(&session_config)
        .map_err(|err| CliError::from_core(err, &profile_name, global.timeout))?;

    tracing::debug!(profile = %profile_name, "signing in");
    session
        .login(&creds.email, &creds.password)
        .await
        .map_err(|err| CliError::from_core(err, &profile_name, global.timeout))?;

    Ok((session, profile_name))
}
