/// Formatter adapters for the catalog output
mod json_formatter;

pub use json_formatter::JsonCatalogFormatter;
