//! Command implementations

use std::path::PathBuf;

use tracing::info;

use tanker_app::app::FleetService;
use tanker_app::config::Config;
use tanker_app::export::export_to_csv;
use tanker_app::repository::open_repositories;
use tanker_types::{OutputFormat, Result};

use crate::cli::{BucketArgs, Cli, Commands};
use crate::output::{output_bucket_page, output_summary};

pub async fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref store_dir) = cli.store_dir {
        config.store_dir = Some(store_dir.clone());
    }

    let default_level = match (&cli.command, cli.verbose) {
        (_, true) => "debug",
        (Commands::Serve { .. }, false) => "info",
        _ => "warn",
    };
    tanker_server::init_tracing(config.log_json, default_level);

    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Summary { user_id } => cmd_summary(&config, output_format, user_id).await,

        Commands::Bucket {
            args,
            page_size,
            page,
        } => cmd_bucket(&config, output_format, args, page_size, page).await,

        Commands::Export { args, output } => cmd_export(&config, args, output).await,

        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.bind = bind;
            }
            tanker_server::serve(config).await
        }

        Commands::Config {
            show,
            set_store_dir,
            set_bind,
            set_output,
            set_page_size,
            set_log_json,
            reset,
        } => cmd_config(
            show,
            set_store_dir,
            set_bind,
            set_output,
            set_page_size,
            set_log_json,
            reset,
        ),
    }
}

fn fleet_service(config: &Config) -> Result<FleetService> {
    let repos = open_repositories(config)?;
    Ok(FleetService::new(repos, config))
}

async fn cmd_summary(config: &Config, output_format: OutputFormat, user_id: String) -> Result<()> {
    let service = fleet_service(config)?;
    let stats = service.summary(user_id.clone()).await?;
    output_summary(output_format, &user_id, &stats)
}

async fn cmd_bucket(
    config: &Config,
    output_format: OutputFormat,
    args: BucketArgs,
    page_size: Option<i64>,
    page: i64,
) -> Result<()> {
    let service = fleet_service(config)?;
    let request = args.to_request(page_size, Some(page));
    let page = service.bucket_data(args.user_id.clone(), request).await?;
    output_bucket_page(output_format, &page)
}

async fn cmd_export(config: &Config, args: BucketArgs, output: Option<PathBuf>) -> Result<()> {
    let service = fleet_service(config)?;
    let request = args.to_request(None, None);
    let rows = service.export_rows(args.user_id.clone(), request).await?;

    let output_path = output.unwrap_or_else(|| PathBuf::from(format!("{}.csv", args.bucket)));
    export_to_csv(&rows, &output_path)?;

    info!(rows = rows.len(), path = %output_path.display(), "Bucket exported");
    println!("Exported {} rows to {}", rows.len(), output_path.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_store_dir: Option<PathBuf>,
    set_bind: Option<String>,
    set_output: Option<OutputFormat>,
    set_page_size: Option<usize>,
    set_log_json: Option<bool>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(store_dir) = set_store_dir {
        config.store_dir = Some(store_dir);
        modified = true;
    }

    if let Some(bind) = set_bind {
        config.bind = bind;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(page_size) = set_page_size {
        config.default_page_size = page_size.clamp(1, config.max_page_size.max(1));
        modified = true;
    }

    if let Some(log_json) = set_log_json {
        config.log_json = log_json;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
