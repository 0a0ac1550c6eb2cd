use crate::{post::Post, product::Product};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProductFile {
    pub schema_version: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
pub struct PostFile {
    pub schema_version: String,
    pub posts: Vec<Post>,
}
