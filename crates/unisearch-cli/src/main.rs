//! Unisearch CLI - Unified Naver and Google search from the terminal
//!
//! Thin client for the Unisearch API. Stores the API key locally and
//! prints merged results either as a colored listing or raw JSON.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;
use tracing_subscriber::EnvFilter;

use api::UnisearchClient;
use config::Config;
use unisearch::{SearchQuery, SearchResult, SearchSource};

#[derive(Parser)]
#[command(name = "unisearch")]
#[command(about = "Unisearch CLI - Naver blog, Naver news and Google in one query", long_about = None)]
#[command(version)]
struct Cli {
    /// Override the API base URL for this invocation
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log HTTP activity to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Login and store API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Search Naver blog, Naver news and Google at once
    Search {
        /// Search keyword
        query: String,
        /// Skip Naver blog results
        #[arg(long)]
        no_naver_blog: bool,
        /// Skip Naver news results
        #[arg(long)]
        no_naver_news: bool,
        /// Skip Google results
        #[arg(long)]
        no_google: bool,
        /// Print the raw JSON array instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load()?;
    if let Some(url) = cli.base_url.as_deref() {
        config.set_base_url(url);
    }

    match cli.command {
        Commands::Login { key } => cmd_login(config, key).await,
        Commands::Search {
            query,
            no_naver_blog,
            no_naver_news,
            no_google,
            json,
        } => {
            let query = SearchQuery::new(query)
                .with_naver_blog(!no_naver_blog)
                .with_naver_news(!no_naver_news)
                .with_google_search(!no_google);
            cmd_search(&config, query, json).await
        }
        Commands::Config => cmd_config(&config),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ============================================
// Command Implementations
// ============================================

/// Verify the key against the server, then persist it along with the active base URL
async fn cmd_login(mut config: Config, key: Option<String>) -> Result<()> {
    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    // Test connection
    let client = UnisearchClient::new(&config.base_url, &api_key);
    print!("Testing connection to {}... ", config.base_url);

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to Unisearch API. Check your API key and URL.");
        }
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

async fn cmd_search(config: &Config, query: SearchQuery, json: bool) -> Result<()> {
    let Some(api_key) = config.api_key.as_deref() else {
        bail!("Not logged in. Run `unisearch login` first.");
    };

    if query.enabled_sources().is_empty() {
        bail!("All sources are disabled. Drop one of the --no-* flags.");
    }

    let client = UnisearchClient::new(&config.base_url, api_key);
    let results = client.search(&query).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("{}", "No results found.".yellow());
        return Ok(());
    }

    println!(
        "{} {} results for \"{}\"\n",
        "Found".bold(),
        results.len(),
        query.query
    );
    for (i, result) in results.iter().enumerate() {
        print_result(i + 1, result);
    }

    Ok(())
}

fn print_result(index: usize, result: &SearchResult) {
    let label = match result.source {
        SearchSource::NaverBlog => result.source.as_str().green(),
        SearchSource::NaverNews => result.source.as_str().cyan(),
        SearchSource::GoogleSearch => result.source.as_str().blue(),
    };

    println!(
        "{}. [{}] {}",
        index,
        label,
        strip_tags(result.title.as_deref().unwrap_or("(untitled)")).bold()
    );
    if let Some(url) = &result.url {
        println!("   {}", url.dimmed());
    }
    if let Some(content) = &result.content {
        println!("   {}", truncate_string(&strip_tags(content), 120));
    }
    println!();
}

/// Drop `<b>` style highlight markup for terminal display
fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}

fn cmd_config(config: &Config) -> Result<()> {
    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    match config.masked_api_key() {
        Some(masked) => println!("  API Key: {} ({})", "Set".green(), masked),
        None => println!("  API Key: {}", "Not set".red()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<b>인공지능</b> 뉴스"), "인공지능 뉴스");
        assert_eq!(strip_tags("a > b"), "a > b");
    }

    #[test]
    fn test_truncate_string_counts_chars() {
        assert_eq!(truncate_string("가나다라", 2), "가나...");
        assert_eq!(truncate_string("short", 10), "short");
    }

    #[test]
    fn test_search_flags() {
        let cli = Cli::try_parse_from([
            "unisearch",
            "search",
            "인공지능",
            "--no-google",
            "--json",
            "--base-url",
            "http://api.test",
        ])
        .unwrap();

        assert_eq!(cli.base_url.as_deref(), Some("http://api.test"));
        match cli.command {
            Commands::Search {
                query,
                no_naver_blog,
                no_google,
                json,
                ..
            } => {
                assert_eq!(query, "인공지능");
                assert!(!no_naver_blog);
                assert!(no_google);
                assert!(json);
            }
            _ => panic!("expected search command"),
        }
    }
}
