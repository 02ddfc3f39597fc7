//! Core application

use anyhow::{Context, Result};

use crate::api::ApiClient;
use crate::core::cli::{self, Commands};
use crate::core::config::AppConfig;
use crate::core::constants::{APP_NAME_LOWER, ENV_LOG, FALLBACK_DOMAINS};
use crate::domain::sentiment::Sentiment;
use crate::filters::parse_query;

pub struct CoreApp;

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        let cli = cli::parse();
        let config = AppConfig::load(&cli);
        tracing::debug!(api_url = %config.api.base_url, "Configuration loaded");

        match cli.command {
            Commands::Parse { query } => Self::handle_parse(&query),
            Commands::Query { query } => Self::handle_query(&config, &query).await,
            Commands::Domains => Self::handle_domains(&config).await,
            Commands::Companies => Self::handle_companies(&config).await,
        }
    }

    fn init_logging() {
        let default_filter = format!("info,{}=info", APP_NAME_LOWER);

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        tracing_subscriber::fmt()
            .with_target(false)
            .with_level(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }

    fn client(config: &AppConfig) -> Result<ApiClient> {
        ApiClient::new(config.api.base_url.clone(), config.api.timeout)
            .context("Failed to build API client")
    }

    fn handle_parse(query: &str) -> Result<()> {
        let filters = parse_query(query);
        if filters.is_empty() {
            tracing::warn!(query, "No recognizable clauses; request is unfiltered");
        }

        let request = filters.to_request();
        println!("{}", serde_json::to_string_pretty(&request)?);
        Ok(())
    }

    async fn handle_query(config: &AppConfig, query: &str) -> Result<()> {
        let request = parse_query(query).to_request();
        tracing::debug!(request = ?request, "Serialized analytics request");

        let points = Self::client(config)?
            .sentiment_analytics(&request)
            .await
            .context("Analytics query failed")?;

        if points.is_empty() {
            println!("No sentiment data for the given filters.");
            return Ok(());
        }
        for point in points {
            println!(
                "{}  {:+.3}  {:8}  {} articles",
                point.date,
                point.sentiment,
                Sentiment::from_score(point.sentiment).as_str(),
                point.article_count
            );
        }
        Ok(())
    }

    async fn handle_domains(config: &AppConfig) -> Result<()> {
        match Self::client(config)?.domains().await {
            Ok(domains) => {
                for domain in domains {
                    println!("{}  {}", domain.id, domain.name);
                }
            }
            Err(e) => {
                // Same degradation the dashboard uses: a static vocabulary
                tracing::warn!(error = %e, "Failed to fetch domains, using fallback");
                for id in FALLBACK_DOMAINS {
                    println!("{}", id);
                }
            }
        }
        Ok(())
    }

    async fn handle_companies(config: &AppConfig) -> Result<()> {
        let companies = Self::client(config)?
            .companies()
            .await
            .context("Failed to fetch companies")?;
        for name in companies {
            println!("{}", name);
        }
        Ok(())
    }
}
