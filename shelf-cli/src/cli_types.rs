//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use shelf_catalog::{AuthorStatus, BookType, Priority, ShelfPlacement, SortMode, UserStatus};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Keep track of your manga and light novel collection", long_about = None)]
pub(crate) struct Cli {
    /// Database file (defaults to the saved path, then the data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter and sort options for browsing.
#[derive(Args, Clone, Default)]
pub(crate) struct BrowseArgs {
    /// Case-insensitive substring of either title
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order (default, author-status, user-status, priority, rating)
    #[arg(long)]
    pub sort: Option<SortMode>,

    /// Only these placements (library, wishlist)
    #[arg(long, value_delimiter = ',')]
    pub placement: Option<Vec<ShelfPlacement>>,

    /// Only these book types (manga, light-novel)
    #[arg(long, value_delimiter = ',')]
    pub book_type: Option<Vec<BookType>>,

    /// Only these author statuses (ongoing, completed, hiatus)
    #[arg(long, value_delimiter = ',')]
    pub author_status: Option<Vec<AuthorStatus>>,

    /// Only these reading statuses (reading, waiting, completed, planning, unsorted, uninterested)
    #[arg(long, value_delimiter = ',')]
    pub user_status: Option<Vec<UserStatus>>,

    /// Only these priorities (top, mid, low, nil)
    #[arg(long, value_delimiter = ',')]
    pub priority: Option<Vec<Priority>>,

    /// Lowest rating to include
    #[arg(long)]
    pub min_rating: Option<u8>,

    /// Highest rating to include
    #[arg(long)]
    pub max_rating: Option<u8>,
}

/// Editable series fields. Unset fields keep their current (or default) value.
#[derive(Args, Clone, Default)]
pub(crate) struct SeriesFields {
    /// English title
    #[arg(long)]
    pub title_en: Option<String>,

    /// Japanese title
    #[arg(long)]
    pub title_jp: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// manga or light-novel
    #[arg(long)]
    pub book_type: Option<BookType>,

    /// ongoing, completed or hiatus
    #[arg(long)]
    pub author_status: Option<AuthorStatus>,

    /// Number of volumes in the finished series
    #[arg(long)]
    pub total_volumes: Option<String>,

    /// Put the series on the wishlist instead of the library
    #[arg(long)]
    pub wishlist: Option<bool>,

    /// Your reading status
    #[arg(long)]
    pub user_status: Option<UserStatus>,

    /// Number of volumes you own
    #[arg(long)]
    pub volumes_owned: Option<String>,

    /// Wishlist priority (top, mid, low, nil)
    #[arg(long)]
    pub priority: Option<Priority>,

    /// Rating from 0 to 10
    #[arg(long)]
    pub rating: Option<u8>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List series, a page at a time
    List {
        #[command(flatten)]
        browse: BrowseArgs,

        /// Number of pages to load
        #[arg(short, long, default_value_t = 1)]
        pages: u32,
    },

    /// Show every field of one series
    Show {
        id: i64,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a series
    Add {
        #[command(flatten)]
        fields: SeriesFields,
    },

    /// Change fields of an existing series
    Edit {
        id: i64,

        #[command(flatten)]
        fields: SeriesFields,
    },

    /// Delete one series
    Delete {
        id: i64,

        /// Actually delete (otherwise only shows what would be deleted)
        #[arg(long)]
        confirm: bool,
    },

    /// Delete every series in the database
    Reset {
        /// Actually delete (otherwise only shows what would be deleted)
        #[arg(long)]
        confirm: bool,
    },

    /// Show counts per placement and reading status
    Stats,

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Show the settings file and the resolved database path
    Show,

    /// Save the database path (omit to clear it)
    SetDb { path: Option<PathBuf> },
}
