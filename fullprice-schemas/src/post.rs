use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Blog,
    Comparison,
    Guide,
}

/// An editorial article from the catalog. Comparison posts reference the
/// products they compare, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    #[serde(default = "PostType::default_blog")]
    pub post_type: PostType,
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub compared_product_ids: Vec<String>,
}

impl PostType {
    fn default_blog() -> Self {
        PostType::Blog
    }
}
