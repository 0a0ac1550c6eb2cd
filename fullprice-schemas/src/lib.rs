pub mod file_formats;
pub mod impact;
pub mod post;
pub mod product;
