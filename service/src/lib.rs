pub mod api_probe;
pub mod error;
pub mod mock;
pub mod reporter;
pub mod settings;
pub mod title_import;

#[cfg(test)]
mod test_utils;
