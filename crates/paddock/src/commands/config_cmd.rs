//! Configuration command handlers (no platform connection needed).

use dialoguer::{Confirm, Input};

use paddock_config::{Config, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global),
        ConfigCommand::Show => show(global),
        ConfigCommand::Path => {
            println!("{}", paddock_config::config_path().display());
            Ok(())
        }
        ConfigCommand::Profiles => profiles(global),
        ConfigCommand::Use { name } => use_profile(&name, global),
        ConfigCommand::SetPassword => set_password(global),
    }
}

/// Interactively create (or replace) a profile.
fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = paddock_config::load_config_or_default();

    let name: String = Input::new()
        .with_prompt("Profile name")
        .default(global.profile.clone().unwrap_or_else(|| "default".into()))
        .interact_text()
        .map_err(io_err)?;

    let host: String = Input::new()
        .with_prompt("Platform URL (e.g. https://farm.example.com)")
        .interact_text()
        .map_err(io_err)?;

    let _: url::Url = host.parse().map_err(|_| CliError::Validation {
        field: "host".into(),
        reason: format!("invalid URL: {host}"),
    })?;

    let email: String = Input::new()
        .with_prompt("Admin email")
        .interact_text()
        .map_err(io_err)?;

    let insecure = Confirm::new()
        .with_prompt("Accept invalid TLS certificates?")
        .default(false)
        .interact()
        .map_err(io_err)?;

    let password = rpassword::prompt_password("Password (stored in system keyring): ")?;

    cfg.profiles.insert(
        name.clone(),
        Profile {
            host,
            email: Some(email),
            password: None,
            password_env: None,
            ca_cert: None,
            insecure: Some(insecure),
            timeout: None,
        },
    );
    if cfg.default_profile.is_none() || cfg.profiles.len() == 1 {
        cfg.default_profile = Some(name.clone());
    }
    paddock_config::save_config(&cfg)?;

    if password.is_empty() {
        eprintln!("No password stored; set one later with: paddock config set-password");
    } else {
        paddock_config::store_password(&name, &password)?;
    }

    if !global.quiet {
        eprintln!(
            "Profile '{name}' saved to {}",
            paddock_config::config_path().display()
        );
    }
    Ok(())
}

/// Print the effective configuration with secrets redacted.
fn show(_global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = paddock_config::load_config_or_default();
    for profile in cfg.profiles.values_mut() {
        if profile.password.is_some() {
            profile.password = Some("<redacted>".into());
        }
    }
    let rendered = toml::to_string_pretty(&cfg).map_err(|e| CliError::Validation {
        field: "config".into(),
        reason: e.to_string(),
    })?;
    println!("{rendered}");
    Ok(())
}

fn profiles(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = paddock_config::load_config_or_default();
    if cfg.profiles.is_empty() {
        if !global.quiet {
            eprintln!("No profiles configured. Run: paddock config init");
        }
        return Ok(());
    }
    let default = cfg.default_profile.as_deref();
    let mut names: Vec<&String> = cfg.profiles.keys().collect();
    names.sort();
    for name in names {
        if Some(name.as_str()) == default {
            println!("{name} (default)");
        } else {
            println!("{name}");
        }
    }
    Ok(())
}

fn use_profile(name: &str, global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = paddock_config::load_config_or_default();
    if !cfg.profiles.contains_key(name) {
        return Err(CliError::ProfileNotFound { name: name.into() });
    }
    cfg.default_profile = Some(name.to_owned());
    paddock_config::save_config(&cfg)?;
    if !global.quiet {
        eprintln!("Default profile set to '{name}'");
    }
    Ok(())
}

fn set_password(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = paddock_config::load_config_or_default();
    let name = crate::config::active_profile_name(global, &cfg);
    if !cfg.profiles.contains_key(&name) {
        return Err(CliError::ProfileNotFound { name });
    }
    let password = rpassword::prompt_password("Password: ")?;
    paddock_config::store_password(&name, &password)?;
    if !global.quiet {
        eprintln!("Password stored in keyring for profile '{name}'");
    }
    Ok(())
}

fn io_err(err: dialoguer::Error) -> CliError {
    CliError::Io(std::io::Error::other(err))
}
