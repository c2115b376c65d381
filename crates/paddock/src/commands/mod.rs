//! Command dispatch: bridges CLI args -> API calls -> output formatting.

pub mod animal_types;
pub mod animals;
pub mod auth;
pub mod breeds;
pub mod config_cmd;
pub mod content;
pub mod geofences;
pub mod orders;
pub mod plans;
pub mod slides;
pub mod trackers;
pub mod users;
pub mod util;
pub mod zones;

use paddock_core::Session;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a signed-in command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    session: &Session,
    profile: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Login(args) => auth::login(session, args, profile, global),
        Command::Logout => auth::logout(session, profile, global).await,
        Command::Users(args) => users::handle(session, args, profile, global).await,
        Command::Animals(args) => animals::handle(session, args, profile, global).await,
        Command::Breeds(args) => breeds::handle(session, args, profile, global).await,
        Command::AnimalTypes(args) => animal_types::handle(session, args, profile, global).await,
        Command::Trackers(args) => trackers::handle(session, args, profile, global).await,
        Command::Geofences(args) => geofences::handle(session, args, profile, global).await,
        Command::Zones(args) => zones::handle(session, args, profile, global).await,
        Command::Orders(args) => orders::handle(session, args, profile, global).await,
        Command::Plans(args) => plans::handle(session, args, profile, global).await,
        Command::Slides(args) => slides::handle(session, args, profile, global).await,
        Command::Content(args) => content::handle(session, args, profile, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
