/// Ports module defining the interfaces between the catalog engine and
/// the infrastructure it drives.
pub mod outbound;
