//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server::{serve, ServerConfig};
use crate::config::{load_config, GalleryConfig};
use crate::error::Result;
use crate::gallery::{self, HttpPageSource, LoadMore, PageSource};
use crate::http::HttpClient;
use crate::pagination::ViewState;
use std::sync::Arc;
use std::time::Instant;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.effective_config()?;
        match &self.cli.command {
            Commands::Serve { .. } => self.serve(config).await,
            Commands::Browse { pages, format } => self.browse(&config, *pages, *format).await,
            Commands::Validate => self.validate(&config),
        }
    }

    /// Config file (or defaults) with command-line overrides applied
    fn effective_config(&self) -> Result<GalleryConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => GalleryConfig::default(),
        };
        if let Some(endpoint) = &self.cli.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Commands::Serve { port: Some(port) } = &self.cli.command {
            config.server.port = *port;
        }
        config.validate()?;
        Ok(config)
    }

    fn page_source(config: &GalleryConfig) -> Result<HttpPageSource> {
        let client = HttpClient::with_config(config.http_client_config())?;
        Ok(HttpPageSource::new(client))
    }

    async fn serve(&self, config: GalleryConfig) -> Result<()> {
        let source: Arc<dyn PageSource> = Arc::new(Self::page_source(&config)?);
        let server_config = ServerConfig {
            port: config.server.port,
            endpoint: config.endpoint.clone(),
            text: config.page_text(),
            view_ttl: config.server.view_ttl(),
            max_views: config.server.max_views,
        };
        serve(server_config, source).await
    }

    async fn browse(&self, config: &GalleryConfig, pages: usize, format: OutputFormat) -> Result<()> {
        let source = Self::page_source(config)?;
        let start = Instant::now();

        let mut view = gallery::initial_load(&source, &config.endpoint).await?;
        for _ in 0..pages {
            match gallery::load_more(&mut view, &source).await? {
                LoadMore::Exhausted => {
                    tracing::info!("reached the last page");
                    break;
                }
                LoadMore::Unchanged => break,
                LoadMore::Merged(_) => {}
            }
        }

        if self.cli.verbose {
            eprintln!(
                "Loaded {} of {} characters in {:.2}s",
                view.len(),
                view.page.count,
                start.elapsed().as_secs_f64()
            );
        }

        println!("{}", format_view(&view, format)?);
        Ok(())
    }

    fn validate(&self, config: &GalleryConfig) -> Result<()> {
        println!("Configuration is valid");
        println!("{}", serde_yaml::to_string(config)?);
        Ok(())
    }
}

/// Render a view for the terminal
pub fn format_view(view: &ViewState, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
        OutputFormat::Pretty => {
            let lines: Vec<String> = view
                .results
                .iter()
                .map(|c| {
                    format!(
                        "#{:<4} {:<32} {:<8} {:<12} {}",
                        c.id,
                        c.name,
                        c.gender,
                        c.species,
                        c.location_name().unwrap_or("-")
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixtures::page;
    use clap::Parser;

    const DEFAULT: &str = "https://rickandmortyapi.com/api/character/";

    fn runner(args: &[&str]) -> Runner {
        let mut argv = vec!["character-gallery"];
        argv.extend_from_slice(args);
        Runner::new(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_effective_config_overrides() {
        let runner = runner(&[
            "--endpoint",
            "http://localhost:9000/api/character/",
            "serve",
            "--port",
            "3000",
        ]);
        let config = runner.effective_config().unwrap();

        assert_eq!(config.endpoint, "http://localhost:9000/api/character/");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_effective_config_rejects_bad_endpoint() {
        let runner = runner(&["--endpoint", "nope", "validate"]);
        assert!(runner.effective_config().is_err());
    }

    #[test]
    fn test_format_view_pretty() {
        let view = ViewState::from_initial(DEFAULT, page(&[1, 2], None, None));
        let out = format_view(&view, OutputFormat::Pretty).unwrap();

        assert_eq!(out.lines().count(), 2);
        assert!(out.starts_with("#1"));
        assert!(out.contains("Citadel of Ricks"));
    }

    #[test]
    fn test_format_view_json() {
        let view = ViewState::from_initial(DEFAULT, page(&[1], None, None));
        let out = format_view(&view, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["page"]["current"], DEFAULT);
        assert_eq!(value["results"][0]["id"], 1);
    }
}
