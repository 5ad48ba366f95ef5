//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use tanker_app::app::BucketRequest;
use tanker_types::OutputFormat;

#[derive(Parser)]
#[command(name = "tanker-fleet")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Classify tanker trips into dashboard buckets")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Store directory (trips.json, users.json, deactivated.json, vehicles.toml).
    /// Uses config value if not specified.
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Drill-down options shared by `bucket` and `export`
#[derive(Args, Debug, Clone)]
pub struct BucketArgs {
    /// User whose vehicles are classified
    pub user_id: String,

    /// Category key (loaded, emptyForLoading, emptyOther, underMaintenance) or sub-bucket key
    pub bucket: String,

    /// Case-insensitive search over vehicle, route and supervisors
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Sort field (vehicleNo, endTo, startFrom, startDate, reportingDate, endDate, lastStatus, supervisor)
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort direction (asc, desc)
    #[arg(long)]
    pub direction: Option<String>,

    /// Add supervisor names and vehicle capacity
    #[arg(long)]
    pub admin: bool,
}

impl BucketArgs {
    pub fn to_request(&self, page_size: Option<i64>, page_no: Option<i64>) -> BucketRequest {
        BucketRequest {
            bucket: self.bucket.clone(),
            search_term: self.search.clone(),
            sort_by: self.sort_by.clone(),
            direction: self.direction.clone(),
            page_size,
            page_no,
            is_admin: self.admin,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show bucket counts for a user
    Summary {
        /// User whose vehicles are classified
        user_id: String,
    },

    /// Show one page of a bucket
    Bucket {
        #[command(flatten)]
        args: BucketArgs,

        /// Page size. Uses config value if not specified.
        #[arg(long, short = 'n')]
        page_size: Option<i64>,

        /// Page number, starting at 1
        #[arg(long, short = 'p', default_value = "1")]
        page: i64,
    },

    /// Export every row of a bucket to CSV
    Export {
        #[command(flatten)]
        args: BucketArgs,

        /// Output CSV file path (default: <bucket>.csv)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Serve the HTTP endpoints
    Serve {
        /// Bind address. Uses config value if not specified.
        #[arg(long)]
        bind: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set HTTP bind address
        #[arg(long)]
        set_bind: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default page size
        #[arg(long)]
        set_page_size: Option<usize>,

        /// Emit JSON log lines
        #[arg(long)]
        set_log_json: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
