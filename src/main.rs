mod cli;

use reelscout::{
    common::{FilmDbId, MetadataId},
    config, embed, export, http, input,
    pipeline::{self, Pipeline},
    verify::{self, VerifyStrategy},
};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "reelscout=trace,reelscout_common=debug,reqwest=debug".to_string()
        } else {
            "reelscout=info,reelscout_common=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            input,
            strategy,
            out_dir,
            json,
            no_table,
        } => run_file(
            &input,
            cli.config.as_deref(),
            strategy,
            out_dir,
            json,
            no_table,
        ),
        Commands::EmbedUrl {
            filmdb_id,
            metadata_id,
        } => embed_url(cli.config.as_deref(), filmdb_id.as_deref(), metadata_id),
        Commands::Title { url } => fetch_title(cli.config.as_deref(), &url),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("reelscout {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Rows are awaited one after another, so a single-threaded runtime suffices.
fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

fn run_file(
    input: &Path,
    config_path: Option<&Path>,
    strategy: Option<VerifyStrategy>,
    out_dir: Option<PathBuf>,
    json: bool,
    no_table: bool,
) -> Result<()> {
    // Load config
    let config = config::load_config_or_default(config_path)?;

    // Verify input file exists
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {:?}", input);
    }

    let queries = input::read_queries_from_path(input, &config.input)
        .with_context(|| format!("Failed to read input file: {:?}", input))?;
    tracing::info!("Read {} rows from {:?}", queries.len(), input);

    let strategy = strategy.unwrap_or(config.pipeline.strategy);
    let pipeline = Pipeline::from_config(&config, strategy);
    let progress = pipeline::progress_bar_callback();

    let rows = runtime()?.block_on(pipeline.run(&queries, Some(&progress)));

    let dir = out_dir.unwrap_or_else(|| config.output.dir.clone());
    let paths = export::write_all(&rows, &dir, &config.output.file_stem)
        .context("Failed to export results")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if !no_table {
        print!("{}", export::table::render_table(&rows));
    }

    eprintln!(
        "Search results saved to {:?} and {:?}",
        paths.html, paths.xlsx
    );

    Ok(())
}

fn embed_url(
    config_path: Option<&Path>,
    filmdb_id: Option<&str>,
    metadata_id: Option<u64>,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    let film_db = match filmdb_id {
        Some(raw) => Some(
            FilmDbId::parse(raw)
                .with_context(|| format!("Not a film-database id: {:?}", raw))?,
        ),
        None => None,
    };

    let synthesizer = embed::EmbedSynthesizer::new(config.embed.base_url.clone());
    match synthesizer
        .synthesize(film_db.as_ref(), metadata_id.map(MetadataId::new))
        .url
    {
        Some(url) => {
            println!("{}", url);
            Ok(())
        }
        None => anyhow::bail!("Provide --filmdb-id and/or --metadata-id"),
    }
}

fn fetch_title(config_path: Option<&Path>, url: &str) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let client = http::HttpClient::new(&config.http);

    let outcome = runtime()?.block_on(verify::page::fetch_page_title(&client, url));
    match outcome {
        Ok(Some(title)) => println!("{}", title),
        Ok(None) => eprintln!("No title element found at {}", url),
        Err(e) => eprintln!("No title: {}", e),
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, using defaults");
            config::load_config_or_default(None)?
        }
    };

    println!("  Film database: {}", config.providers.filmdb_base_url);
    println!("  Metadata API: {}", config.providers.tmdb_base_url);
    println!(
        "  Metadata API key: {}",
        if config.providers.tmdb_api_key.is_some() {
            "configured"
        } else {
            "missing"
        }
    );
    println!("  Embed base: {}", config.embed.base_url);
    println!("  Strategy: {}", config.pipeline.strategy);
    println!(
        "  Output: {}/{}.{{html,xlsx}}",
        config.output.dir.display(),
        config.output.file_stem
    );

    Ok(())
}
