//! Command-line surface of `hypnoctl`.
//!
//! The commands mirror what the portfolio page does: list everything, show
//! the featured strip, search, and apply the combined facet filter, optionally
//! seeded from a page URL.

pub mod render;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use hypno_core::{Catalog, PortfolioFilter, PortfolioFilterBuilder};
use hypno_model::ProjectId;
use tracing::debug;

use crate::models::{CliConfig, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "hypnoctl",
    about = "Browse and query the HypnoCentral project portfolio"
)]
pub struct Cli {
    /// JSON catalog to query instead of the built-in portfolio
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
    /// Config file (TOML or JSON); see HYPNO_CONFIG_PATH
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Output format; defaults to the configured one
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
    /// Number of tags shown per table row
    #[arg(long, global = true)]
    pub tags: Option<usize>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every project in display order
    List,
    /// List featured projects
    Featured,
    /// Show the full card of one project
    Show {
        /// Project id
        id: u32,
    },
    /// Free-text search over titles, descriptions, tags and categories
    Search {
        /// Search term; blank matches everything
        #[arg(default_value = "")]
        term: String,
    },
    /// Combined filter, as applied by the portfolio page
    Filter(FilterArgs),
    /// Print the facet option lists
    Facets,
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Page URL or query string to seed the filter from (e.g. "?search=rpg")
    #[arg(long)]
    pub from_url: Option<String>,
    /// Free-text term
    #[arg(long)]
    pub search: Option<String>,
    /// Exact category, or "All"
    #[arg(long)]
    pub category: Option<String>,
    /// Exact status label, or "All"
    #[arg(long)]
    pub status: Option<String>,
    /// Exact platform, or "All"
    #[arg(long)]
    pub platform: Option<String>,
}

impl FilterArgs {
    /// Explicit flags override whatever the URL seeded.
    pub fn to_filter(&self) -> PortfolioFilter {
        let seeded = self
            .from_url
            .as_deref()
            .map(PortfolioFilter::from_query_string)
            .unwrap_or_default();

        let mut builder = PortfolioFilterBuilder::from_filter(seeded);
        if let Some(term) = self.search.as_deref() {
            builder = builder.search(term);
        }
        if let Some(category) = self.category.as_deref() {
            builder = builder.category(category);
        }
        if let Some(status) = self.status.as_deref() {
            builder = builder.status(status);
        }
        if let Some(platform) = self.platform.as_deref() {
            builder = builder.platform(platform);
        }
        builder.build()
    }
}

/// Effective settings after merging flags over the loaded config.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub format: OutputFormat,
    pub tag_preview: usize,
    pub catalog_path: Option<PathBuf>,
}

impl RunSettings {
    pub fn resolve(cli: &Cli, config: &CliConfig) -> Self {
        Self {
            format: cli.format.unwrap_or(config.output),
            tag_preview: cli.tags.unwrap_or(config.tag_preview),
            catalog_path: cli
                .catalog
                .clone()
                .or_else(|| config.catalog_path.clone()),
        }
    }
}

/// Execute `command` against the selected catalog, writing results to `out`.
pub fn run(
    command: &Command,
    settings: &RunSettings,
    out: &mut impl Write,
) -> Result<()> {
    let loaded;
    let catalog = match settings.catalog_path.as_deref() {
        Some(path) => {
            loaded = Catalog::load_from_file(path).with_context(|| {
                format!("failed to open catalog {}", path.display())
            })?;
            &loaded
        }
        None => Catalog::reference(),
    };
    debug!(projects = catalog.len(), ?command, "running command");

    let format = settings.format;
    let tags = settings.tag_preview;

    match command {
        Command::List => match format {
            OutputFormat::Table => {
                let count = render::write_table(out, catalog.all(), tags)?;
                writeln!(out, "{}", render::count_label(count, "project"))?;
            }
            OutputFormat::Json => render::write_json(out, catalog.all())?,
        },
        Command::Featured => {
            let featured = catalog.featured();
            match format {
                OutputFormat::Table => {
                    let count = render::write_table(out, featured, tags)?;
                    writeln!(
                        out,
                        "{}",
                        render::count_label(count, "featured project")
                    )?;
                }
                OutputFormat::Json => render::write_json(out, featured)?,
            }
        }
        Command::Show { id } => {
            let Some(project) = catalog.get(ProjectId::new(*id)) else {
                bail!("no project with id {id}");
            };
            match format {
                OutputFormat::Table => render::write_details(out, project)?,
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut *out, project)?;
                    writeln!(out)?;
                }
            }
        }
        Command::Search { term } => {
            let outcome = catalog.apply(&PortfolioFilter::search(term));
            write_outcome(out, &outcome, format, tags)?;
        }
        Command::Filter(args) => {
            let outcome = catalog.apply(&args.to_filter());
            write_outcome(out, &outcome, format, tags)?;
        }
        Command::Facets => match format {
            OutputFormat::Table => render::write_facets(out, catalog)?,
            OutputFormat::Json => render::write_facets_json(out, catalog)?,
        },
    }

    Ok(())
}

fn write_outcome(
    out: &mut impl Write,
    outcome: &hypno_core::FilterOutcome<'_>,
    format: OutputFormat,
    tags: usize,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Table => render::write_outcome_table(out, outcome, tags),
        OutputFormat::Json => render::write_outcome_json(out, outcome),
    }
}
