use anyhow::{Context, Result};
use fullprice_core::error::FullPriceError;
use fullprice_schemas::{
    file_formats::{PostFile, ProductFile},
    post::Post,
    product::Product,
};
use std::{collections::HashMap, fs, path::Path};

/// All the static data exported for the site: the product catalog plus the
/// editorial posts. Loaded once per run and never mutated.
pub struct Catalog {
    pub products: HashMap<String, Product>,
    pub posts: Vec<Post>,
}

impl Catalog {
    /// Loads the catalog from the exporter's output directory.
    pub fn load(base_path: &str) -> Result<Self> {
        println!("Loading catalog from '{}'...", base_path);

        let products_path = Path::new(base_path).join("products.json");
        let raw = fs::read_to_string(&products_path)
            .with_context(|| format!("Failed to read {}", products_path.display()))?;
        let file: ProductFile = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", products_path.display()))?;
        let products = file
            .products
            .into_iter()
            .map(|p| (p.product_id.clone(), p))
            .collect::<HashMap<_, _>>();

        // Posts are optional; a catalog may ship products only.
        let posts_path = Path::new(base_path).join("posts.json");
        let posts = if posts_path.exists() {
            let raw = fs::read_to_string(&posts_path)
                .with_context(|| format!("Failed to read {}", posts_path.display()))?;
            let file: PostFile = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse {}", posts_path.display()))?;
            file.posts
        } else {
            Vec::new()
        };

        println!(
            "Loaded {} products and {} posts.",
            products.len(),
            posts.len()
        );
        Ok(Self { products, posts })
    }

    pub fn product(&self, id: &str) -> Result<&Product, FullPriceError> {
        self.products
            .get(id)
            .ok_or_else(|| FullPriceError::ProductNotFound(id.to_string()))
    }
}
