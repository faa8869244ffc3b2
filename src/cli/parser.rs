use clap::{Parser, Subcommand};

/// Command-line interface definition for venuelog
/// CLI application to track venue check-ins with SQLite
#[derive(Parser)]
#[command(
    name = "venuelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track venue check-ins, nearby activity, and planned events using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Check in at a venue (closes any previous active check-in)
    Checkin {
        /// User performing the check-in
        user: String,

        /// Venue identifier
        venue_id: String,

        /// Venue display name
        venue_name: String,

        #[arg(long, help = "Attach a note to the check-in")]
        note: Option<String>,

        #[arg(long, help = "Mood tag (free text or emoji)")]
        mood: Option<String>,

        #[arg(
            long,
            help = "Who can see this check-in: public, friends, or private"
        )]
        visibility: Option<String>,

        /// Coordinates for environments without a location device
        #[arg(
            long,
            requires = "lon",
            allow_negative_numbers = true,
            help = "Latitude of the current position"
        )]
        lat: Option<f64>,

        #[arg(
            long,
            requires = "lat",
            allow_negative_numbers = true,
            help = "Longitude of the current position"
        )]
        lon: Option<f64>,

        #[arg(long, help = "Position accuracy in meters")]
        accuracy: Option<f64>,

        #[arg(
            long = "event-id",
            requires = "event_name",
            help = "Event taking place at the venue"
        )]
        event_id: Option<String>,

        #[arg(long = "event-name", requires = "event_id")]
        event_name: Option<String>,

        #[arg(long = "event-date", requires = "event_id", help = "Event date (YYYY-MM-DD)")]
        event_date: Option<String>,

        #[arg(long = "event-time", requires = "event_id", help = "Event time (HH:MM)")]
        event_time: Option<String>,

        #[arg(long = "event-image", requires = "event_id")]
        event_image: Option<String>,
    },

    /// End a check-in (no-op when already ended or unknown)
    End {
        check_in_id: String,
    },

    /// List check-ins: a user's history, nearby activity, or the feed
    List {
        #[arg(long, help = "Show this user's recent check-ins")]
        user: Option<String>,

        #[arg(long, help = "Maximum number of rows")]
        limit: Option<usize>,

        #[arg(
            long,
            value_name = "LAT,LON",
            help = "Show check-ins near these coordinates"
        )]
        nearby: Option<String>,

        #[arg(long, help = "Search radius in km (with --nearby)")]
        radius: Option<f64>,

        #[arg(
            long,
            requires = "excluding",
            help = "Show other users' public/friends check-ins"
        )]
        feed: bool,

        #[arg(
            long,
            value_name = "USER",
            help = "User whose own records the feed excludes"
        )]
        excluding: Option<String>,
    },

    /// Manage planned events
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },

    /// Produce a share message / URL for a check-in
    Share {
        check_in_id: String,

        #[arg(
            long,
            help = "Share target: facebook, twitter, instagram, or copy",
            default_value = "copy"
        )]
        target: String,
    },

    /// Manage the database (integrity checks, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit table
    Audit {
        #[arg(long = "print", help = "Print rows from the audit table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum PlanAction {
    /// Add a planned event
    Add {
        event_id: String,
        event_name: String,
        venue_id: String,
        venue_name: String,

        /// Event date (YYYY-MM-DD)
        date: String,

        /// Event time (HH:MM)
        time: String,

        #[arg(long, help = "Where the plan came from: ticket, calendar, or manual")]
        source: Option<String>,

        #[arg(long = "source-id", help = "Identifier in the source system")]
        source_id: Option<String>,

        #[arg(long = "image", help = "Event image URL")]
        image_url: Option<String>,
    },

    /// Remove a planned event by its event id
    Del {
        event_id: String,
    },

    /// Toggle the shared flag of a planned event
    Toggle {
        event_id: String,
    },

    /// List planned events
    List,
}
