mod lookup;

use bibleapi_client::BibleApiClient;
use bibleapi_core::{ChapterRequest, VerseRequest};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bibleapi")]
#[command(about = "Look up verses from the local Bible API service")]
struct Cli {
    /// Bible API base URL (overrides `BIBLEAPI_BASE_URL`)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print one verse or a verse range
    Verse {
        /// Book name (e.g., genesis)
        book: String,
        /// Chapter number
        chapter: u32,
        /// Verse number or range (e.g., 2 or 16-17)
        verse: String,
        /// Print the service's reference line before the text
        #[arg(long)]
        with_reference: bool,
    },
    /// Print a verse from a reference such as "john 3:16-17"
    Lookup {
        /// Reference in "<book> <chapter>:<verses>" form
        reference: VerseRequest,
        /// Print the service's reference line before the text
        #[arg(long)]
        with_reference: bool,
    },
    /// Print a whole chapter or a chapter range
    Chapter {
        /// Book name (e.g., psalms)
        book: String,
        /// Chapter number or range (e.g., 23 or 1-2)
        chapters: String,
        /// Print the service's reference line before the text
        #[arg(long)]
        with_reference: bool,
    },
}

/// Lookup performed when no subcommand is given.
fn default_request() -> VerseRequest {
    VerseRequest::new("genesis", 1, 2)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bibleapi_core::load_app_config_with_base_url(cli.base_url.as_deref())?;

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(base_url = %config.base_url, max_retries = config.max_retries, "config loaded");

    let client = BibleApiClient::from_app_config(&config)
        .map_err(|e| anyhow::anyhow!("failed to build Bible API client: {e}"))?;

    let output = match cli.command {
        Some(Commands::Verse {
            book,
            chapter,
            verse,
            with_reference,
        }) => {
            let request = VerseRequest::new(book, chapter, verse);
            lookup::run_verse(&client, &request, with_reference).await?
        }
        Some(Commands::Lookup {
            reference,
            with_reference,
        }) => lookup::run_verse(&client, &reference, with_reference).await?,
        Some(Commands::Chapter {
            book,
            chapters,
            with_reference,
        }) => {
            let request = ChapterRequest::new(book, chapters);
            lookup::run_chapter(&client, &request, with_reference).await?
        }
        None => lookup::run_verse(&client, &default_request(), false).await?,
    };

    println!("{output}");
    Ok(())
}
