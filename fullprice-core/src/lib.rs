pub mod breakeven;
pub mod comparison;
pub mod error;
pub mod lifecycle;
pub mod report;
