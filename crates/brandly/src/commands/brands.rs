//! Brand command handlers.

use owo_colors::OwoColorize;
use tabled::Tabled;

use brandly_core::{Brand, BrandId, BrandSource};

use crate::cli::{BrandsArgs, BrandsCommand, ColorMode, OutputFormat};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BrandRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Followers")]
    followers: String,
    #[tabled(rename = "Campaigns")]
    campaigns: String,
    #[tabled(rename = "Rating")]
    rating: String,
}

impl From<&Brand> for BrandRow {
    fn from(b: &Brand) -> Self {
        Self {
            id: b.id.to_string(),
            name: b.name.clone(),
            category: b.category.clone(),
            followers: b.followers.clone(),
            campaigns: b.campaigns.clone(),
            rating: b.rating.clone(),
        }
    }
}

fn detail(b: &Brand, color: bool) -> String {
    let label = |text: &str| {
        let padded = format!("{text:<11}");
        if color {
            padded.bold().to_string()
        } else {
            padded
        }
    };

    let mut lines = vec![
        format!("{}{}", label("ID:"), b.id),
        format!("{}{}", label("Name:"), b.name),
        format!("{}{}", label("Category:"), b.category.to_uppercase()),
        format!("{}{}", label("Logo:"), b.logo),
        format!("{}{}", label("Followers:"), b.followers),
        format!("{}{}", label("Campaigns:"), b.campaigns),
        format!("{}{}", label("Rating:"), b.rating),
        format!("{}{}", label("About:"), b.description),
    ];
    if let Some(ref campaign) = b.recent_campaign {
        lines.push(format!("{}{}", label("Campaign:"), campaign.title));
        lines.push(format!("{:<11}{}", "", campaign.description));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

/// Run a `brands` subcommand against `source` and print the result.
pub async fn handle(
    source: &dyn BrandSource,
    args: BrandsArgs,
    format: OutputFormat,
    color: ColorMode,
    quiet: bool,
) -> Result<(), CliError> {
    let out = match args.command {
        BrandsCommand::List => {
            let brands = source.list_brands().await?;
            tracing::debug!(count = brands.len(), "listed brands");
            output::render_list(format, &brands, |b| BrandRow::from(b), |b| b.id.to_string())
        }

        BrandsCommand::Get { id } => {
            let brand = source
                .get_brand(&BrandId::new(id.clone()))
                .await
                .map_err(|e| {
                    if e.is_not_found() {
                        CliError::NotFound { id }
                    } else {
                        e.into()
                    }
                })?;
            let color = output::should_color(color);
            output::render_single(format, &brand, |b| detail(b, color), |b| b.id.to_string())
        }
    };

    output::print_output(&out, quiet);
    Ok(())
}
