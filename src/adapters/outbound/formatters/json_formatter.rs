use crate::catalog::domain::LibraryRecord;
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// JsonCatalogFormatter adapter rendering the catalog as pretty-printed JSON
///
/// Field order follows the record types and maps are sorted, so identical
/// records always render to identical bytes.
pub struct JsonCatalogFormatter {
    indent: &'static [u8],
}

impl JsonCatalogFormatter {
    pub fn new() -> Self {
        Self { indent: b" " }
    }
}

impl Default for JsonCatalogFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for JsonCatalogFormatter {
    fn format(&self, records: &[LibraryRecord]) -> Result<String> {
        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(self.indent));
        records.serialize(&mut serializer)?;
        buffer.push(b'\n');
        Ok(String::from_utf8(buffer)?)
    }
}
