//! paddock-tui — terminal dashboard for the paddock admin API.

mod action;
mod app;
mod component;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::App;

#[derive(Parser, Debug)]
#[command(name = "paddock-tui", version, about = "Terminal dashboard for the paddock admin API")]
struct Cli {
    /// Config profile to connect with
    #[arg(short, long, env = "PADDOCK_PROFILE")]
    profile: Option<String>,

    /// Log file path (stdout is owned by the terminal UI)
    #[arg(long, default_value = "/tmp/paddock-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// File-based tracing; the terminal itself is the UI surface.
fn setup_tracing(log_file: &std::path::Path, verbosity: u8) -> tracing_appender::non_blocking::WorkerGuard {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("paddock_tui={level},paddock_core={level},paddock_api={level}")));

    let dir = log_file.parent().unwrap_or_else(|| std::path::Path::new("/tmp"));
    let file = log_file
        .file_name()
        .map_or_else(|| "paddock-tui.log".into(), |n| n.to_string_lossy().into_owned());

    let appender = tracing_appender::rolling::never(dir, file);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    tui::install_hooks()?;

    let cli = Cli::parse();
    let _guard = setup_tracing(&cli.log_file, cli.verbose);

    // Sign in before entering the alternate screen, so connection
    // errors print to a normal terminal.
    let config = paddock_config::load_config_or_default();
    let (profile_name, profile) =
        paddock_config::select_profile(&config, cli.profile.as_deref()).map_err(|e| {
            eyre!("{e}\n\nrun `paddock config init` to create a profile")
        })?;
    let profile_name = profile_name.to_owned();

    let email = paddock_config::resolve_email(profile, &profile_name)?;
    let password = paddock_config::resolve_password(profile, &profile_name)?;
    let session_config = paddock_config::profile_to_session_config(profile)?;

    let session = paddock_core::Session::new(&session_config)?;
    let who = session.login(&email, &password).await?;
    info!(profile = %profile_name, role = ?who.role, "session ready");

    App::new(&session, profile_name).run().await
}
