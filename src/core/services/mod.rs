pub mod export_service;
pub mod import_service;
pub mod key_listing;
pub mod selection;

#[cfg(test)]
pub(crate) mod fake_tool;
