pub mod models;
pub mod title_normalizer;
