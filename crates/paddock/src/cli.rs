//! Clap derive structures for the `paddock` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! This module depends only on `clap` and `clap_complete` so the build
//! script can include it for man page generation.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// paddock -- admin CLI for the Paddock livestock platform
#[derive(Debug, Parser)]
#[command(
    name = "paddock",
    version,
    about = "Manage a Paddock livestock platform from the command line",
    long_about = "Administer users, animals, GPS trackers, store orders and site\n\
        content on a Paddock platform instance over its admin REST API.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Platform profile to use
    #[arg(long, short = 'p', env = "PADDOCK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Platform base URL (overrides profile)
    #[arg(long, env = "PADDOCK_HOST", global = true)]
    pub host: Option<String>,

    /// Admin account email (overrides profile)
    #[arg(long, env = "PADDOCK_EMAIL", global = true)]
    pub email: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "PADDOCK_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use colored output
    #[arg(long, env = "PADDOCK_COLOR", default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "PADDOCK_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "PADDOCK_TIMEOUT", default_value_t = 30, global = true)]
    pub timeout: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts for destructive operations
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
    /// Single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// One identifier per line
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

// ── Shared list flags ────────────────────────────────────────────────

/// Pagination, search and sort flags shared by every `list` subcommand.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Rows per page
    #[arg(long, default_value_t = 25)]
    pub limit: u32,

    /// Free-text search filter
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Sort key (server column name)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

// ── Command Tree ─────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    // ━━━ Authentication ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    /// Verify credentials against the platform
    Login(LoginArgs),

    /// Invalidate the current server-side session
    Logout,

    // ━━━ Resources ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    /// Manage customer and admin accounts
    Users(UsersArgs),

    /// Manage registered animals
    Animals(AnimalsArgs),

    /// Manage breeds
    Breeds(BreedsArgs),

    /// Manage animal types
    #[command(name = "animal-types")]
    AnimalTypes(AnimalTypesArgs),

    /// Manage GPS trackers
    Trackers(TrackersArgs),

    /// Manage geofences
    Geofences(GeofencesArgs),

    /// Manage delivery zones
    Zones(ZonesArgs),

    /// Manage store orders
    Orders(OrdersArgs),

    /// Manage subscription plans
    Plans(PlansArgs),

    /// Manage home page slides
    Slides(SlidesArgs),

    /// Manage legal content pages
    Content(ContentArgs),

    // ━━━ Configuration ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

// ━━━ Authentication ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Store the password in the system keyring on success
    #[arg(long)]
    pub save: bool,
}

// ━━━ Users ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List user accounts
    List(ListArgs),

    /// Show one user
    Get {
        /// User UUID
        id: String,
    },

    /// Create a user account
    Create {
        /// Account email
        #[arg(long)]
        email: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Account role
        #[arg(long)]
        role: Option<String>,
    },

    /// Update a user account
    Update {
        /// User UUID
        id: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        role: Option<String>,
    },

    /// Re-enable a suspended user
    Enable {
        /// User UUID
        id: String,
    },

    /// Suspend a user
    Disable {
        /// User UUID
        id: String,
    },

    /// Delete a user account
    Delete {
        /// User UUID
        id: String,
    },
}

// ━━━ Animals ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AnimalsArgs {
    #[command(subcommand)]
    pub command: AnimalsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AnimalsCommand {
    /// List animals
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Filter by animal type UUID
        #[arg(long = "type")]
        animal_type: Option<String>,

        /// Filter by breed UUID
        #[arg(long)]
        breed: Option<String>,

        /// Filter by owner UUID
        #[arg(long)]
        owner: Option<String>,
    },

    /// Show one animal
    Get {
        /// Animal UUID
        id: String,
    },

    /// Register an animal
    Create {
        /// Animal name
        #[arg(long)]
        name: String,

        /// Animal type UUID
        #[arg(long = "type")]
        animal_type: String,

        /// Breed UUID
        #[arg(long)]
        breed: Option<String>,

        /// Owner UUID
        #[arg(long)]
        owner: Option<String>,

        /// Ear tag number
        #[arg(long)]
        tag: Option<String>,

        /// Gender (male/female)
        #[arg(long)]
        gender: Option<String>,
    },

    /// Update an animal
    Update {
        /// Animal UUID
        id: String,

        #[arg(long)]
        name: Option<String>,

        /// Breed UUID
        #[arg(long)]
        breed: Option<String>,

        /// Ear tag number
        #[arg(long)]
        tag: Option<String>,

        #[arg(long)]
        gender: Option<String>,

        /// Assigned tracker UUID
        #[arg(long)]
        tracker: Option<String>,
    },

    /// Delete an animal
    Delete {
        /// Animal UUID
        id: String,
    },

    /// Bulk-import animals from a CSV file
    Import {
        /// Path to the CSV file
        file: PathBuf,
    },
}

// ━━━ Breeds / animal types ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct BreedsArgs {
    #[command(subcommand)]
    pub command: BreedsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BreedsCommand {
    /// List breeds
    List(ListArgs),

    /// Create a breed
    Create {
        /// English name
        #[arg(long)]
        name_en: String,

        /// Arabic name
        #[arg(long)]
        name_ar: Option<String>,

        /// Animal type UUID
        #[arg(long = "type")]
        animal_type: String,
    },

    /// Update a breed
    Update {
        /// Breed UUID
        id: String,

        #[arg(long)]
        name_en: Option<String>,

        #[arg(long)]
        name_ar: Option<String>,

        /// Animal type UUID
        #[arg(long = "type")]
        animal_type: Option<String>,
    },

    /// Delete a breed
    Delete {
        /// Breed UUID
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct AnimalTypesArgs {
    #[command(subcommand)]
    pub command: AnimalTypesCommand,
}

#[derive(Debug, Subcommand)]
pub enum AnimalTypesCommand {
    /// List animal types
    List(ListArgs),

    /// Create an animal type
    Create {
        /// English name
        #[arg(long)]
        name_en: String,

        /// Arabic name
        #[arg(long)]
        name_ar: Option<String>,
    },

    /// Update an animal type
    Update {
        /// Animal type UUID
        id: String,

        #[arg(long)]
        name_en: String,

        #[arg(long)]
        name_ar: Option<String>,
    },

    /// Delete an animal type
    Delete {
        /// Animal type UUID
        id: String,
    },
}

// ━━━ Trackers / geofences ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TrackersArgs {
    #[command(subcommand)]
    pub command: TrackersCommand,
}

#[derive(Debug, Subcommand)]
pub enum TrackersCommand {
    /// List GPS trackers
    List(ListArgs),

    /// Show one tracker
    Get {
        /// Tracker UUID
        id: String,
    },

    /// Register a tracker
    Create {
        /// Device serial number
        #[arg(long)]
        serial: String,

        /// Device model
        #[arg(long)]
        model: Option<String>,
    },

    /// Update a tracker
    Update {
        /// Tracker UUID
        id: String,

        #[arg(long)]
        model: Option<String>,

        /// Animal UUID to pair with
        #[arg(long)]
        animal: Option<String>,
    },

    /// Activate a tracker
    Enable {
        /// Tracker UUID
        id: String,
    },

    /// Deactivate a tracker
    Disable {
        /// Tracker UUID
        id: String,
    },

    /// Delete a tracker
    Delete {
        /// Tracker UUID
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct GeofencesArgs {
    #[command(subcommand)]
    pub command: GeofencesCommand,
}

#[derive(Debug, Subcommand)]
pub enum GeofencesCommand {
    /// List geofences
    List(ListArgs),

    /// Create a geofence from a JSON points file
    Create {
        /// Geofence name
        #[arg(long)]
        name: String,

        /// Owner UUID
        #[arg(long)]
        owner: Option<String>,

        /// JSON file with an array of {lat, lng} vertices
        #[arg(long)]
        points: PathBuf,
    },

    /// Replace a geofence definition
    Update {
        /// Geofence UUID
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        owner: Option<String>,

        /// JSON file with an array of {lat, lng} vertices
        #[arg(long)]
        points: PathBuf,
    },

    /// Delete a geofence
    Delete {
        /// Geofence UUID
        id: String,
    },
}

// ━━━ Delivery zones ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ZonesArgs {
    #[command(subcommand)]
    pub command: ZonesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ZonesCommand {
    /// List delivery zones
    List(ListArgs),

    /// Create a delivery zone
    Create {
        /// English name
        #[arg(long)]
        name_en: String,

        /// Arabic name
        #[arg(long)]
        name_ar: Option<String>,

        /// Delivery fee
        #[arg(long)]
        fee: Option<f64>,
    },

    /// Update a delivery zone
    Update {
        /// Zone UUID
        id: String,

        #[arg(long)]
        name_en: Option<String>,

        #[arg(long)]
        name_ar: Option<String>,

        #[arg(long)]
        fee: Option<f64>,
    },

    /// Enable deliveries to a zone
    Enable {
        /// Zone UUID
        id: String,
    },

    /// Disable deliveries to a zone
    Disable {
        /// Zone UUID
        id: String,
    },

    /// Delete a delivery zone
    Delete {
        /// Zone UUID
        id: String,
    },
}

// ━━━ Orders ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: OrdersCommand,
}

#[derive(Debug, Subcommand)]
pub enum OrdersCommand {
    /// List store orders
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Filter by order status
        #[arg(long)]
        status: Option<OrderStatusArg>,
    },

    /// Show one order
    Get {
        /// Order UUID
        id: String,
    },

    /// Move an order to a new status
    SetStatus {
        /// Order UUID
        id: String,

        /// New status
        status: OrderStatusArg,
    },
}

/// Order lifecycle states accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrderStatusArg {
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

// ━━━ Subscription plans ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PlansArgs {
    #[command(subcommand)]
    pub command: PlansCommand,
}

#[derive(Debug, Subcommand)]
pub enum PlansCommand {
    /// List subscription plans
    List(ListArgs),

    /// Create a plan
    Create {
        /// English name
        #[arg(long)]
        name_en: String,

        /// Arabic name
        #[arg(long)]
        name_ar: Option<String>,

        /// Price
        #[arg(long)]
        price: f64,

        /// Plan duration in days
        #[arg(long)]
        duration: Option<u32>,
    },

    /// Update a plan
    Update {
        /// Plan UUID
        id: String,

        #[arg(long)]
        name_en: String,

        #[arg(long)]
        name_ar: Option<String>,

        #[arg(long)]
        price: f64,

        #[arg(long)]
        duration: Option<u32>,
    },

    /// Show a plan on the storefront
    Show {
        /// Plan UUID
        id: String,
    },

    /// Hide a plan from the storefront
    Hide {
        /// Plan UUID
        id: String,
    },

    /// Delete a plan
    Delete {
        /// Plan UUID
        id: String,
    },
}

// ━━━ Slides ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SlidesArgs {
    #[command(subcommand)]
    pub command: SlidesCommand,
}

#[derive(Debug, Subcommand)]
pub enum SlidesCommand {
    /// List home page slides
    List(ListArgs),

    /// Create a slide from an image file
    Create {
        /// Path to the slide image
        #[arg(long)]
        image: PathBuf,

        /// English title
        #[arg(long)]
        title_en: Option<String>,

        /// Arabic title
        #[arg(long)]
        title_ar: Option<String>,

        /// Click-through URL
        #[arg(long)]
        link: Option<String>,

        /// Display position
        #[arg(long)]
        sort: Option<u32>,
    },

    /// Update a slide's text fields
    Update {
        /// Slide UUID
        id: String,

        #[arg(long)]
        title_en: Option<String>,

        #[arg(long)]
        title_ar: Option<String>,

        #[arg(long)]
        link: Option<String>,

        #[arg(long)]
        sort: Option<u32>,
    },

    /// Show a slide on the home page
    Show {
        /// Slide UUID
        id: String,
    },

    /// Hide a slide from the home page
    Hide {
        /// Slide UUID
        id: String,
    },

    /// Delete a slide
    Delete {
        /// Slide UUID
        id: String,
    },
}

// ━━━ Legal content ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ContentArgs {
    #[command(subcommand)]
    pub command: ContentCommand,
}

#[derive(Debug, Subcommand)]
pub enum ContentCommand {
    /// Print a legal page body
    Get {
        /// Page slug (e.g. "terms", "privacy")
        slug: String,

        /// Language code
        #[arg(long, default_value = "en")]
        lang: String,
    },

    /// Replace a legal page body from a file
    Set {
        /// Page slug (e.g. "terms", "privacy")
        slug: String,

        /// Language code
        #[arg(long, default_value = "en")]
        lang: String,

        /// HTML file with the new body
        #[arg(long)]
        file: PathBuf,
    },
}

// ━━━ Config ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactively create a profile
    Init,

    /// Print the effective configuration (passwords redacted)
    Show,

    /// Print the config file path
    Path,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name
        name: String,
    },

    /// Store a profile password in the system keyring
    SetPassword,
}

// ━━━ Completions ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn command_tree_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn list_flags_parse() {
        let cli = Cli::try_parse_from([
            "paddock", "users", "list", "--page", "3", "--limit", "50", "-s", "ali",
        ])
        .unwrap();
        let Command::Users(args) = cli.command else {
            panic!("expected users command");
        };
        let UsersCommand::List(list) = args.command else {
            panic!("expected list subcommand");
        };
        assert_eq!(list.page, 3);
        assert_eq!(list.limit, 50);
        assert_eq!(list.search.as_deref(), Some("ali"));
    }

    #[test]
    fn desc_requires_sort() {
        let res = Cli::try_parse_from(["paddock", "users", "list", "--desc"]);
        assert!(res.is_err());
    }
}
