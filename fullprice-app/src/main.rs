use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;

mod config;
mod plotting;
mod request;
mod workflow;

#[derive(Parser)]
#[command(name = "fullprice", about = "Lifecycle impact comparison for everyday products")]
struct Cli {
    /// Directory holding the exported products.json and posts.json
    #[arg(long, default_value = "./data/catalog")]
    catalog: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two products across every impact metric
    Compare {
        #[arg(long)]
        product_a: Option<String>,
        #[arg(long)]
        product_b: Option<String>,
        /// YAML request file naming the products to compare
        #[arg(long)]
        request: Option<String>,
        /// Base directory for run artifacts
        #[arg(long, default_value = "./data/runs")]
        out: String,
    },
    /// List the products in the catalog
    Products,
    /// List the published posts in the catalog
    Posts,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = config::Catalog::load(&cli.catalog)?;

    match cli.command {
        Command::Compare {
            product_a,
            product_b,
            request,
            out,
        } => {
            let request =
                request::ComparisonRequest::resolve(product_a, product_b, request.as_deref())?;

            let output_dir = format!(
                "{}/{}_vs_{}_{}",
                out,
                request.product_a,
                request.product_b,
                chrono::Utc::now().format("%Y%m%d_%H%M%S")
            );
            fs::create_dir_all(&output_dir)
                .with_context(|| format!("Failed to create output directory: {}", output_dir))?;

            workflow::run_comparison(&catalog, &request, &output_dir)?;
            println!("\nComparison complete. Artifacts are in '{}'", output_dir);
        }
        Command::Products => {
            let mut products: Vec<_> = catalog.products.values().collect();
            products.sort_by(|a, b| a.product_id.cmp(&b.product_id));
            for product in products {
                println!("{:<32} {}", product.product_id, product.name);
            }
        }
        Command::Posts => {
            for post in catalog.posts.iter().filter(|p| p.published) {
                println!("{:<32} {}", post.slug, post.title);
            }
        }
    }

    Ok(())
}
