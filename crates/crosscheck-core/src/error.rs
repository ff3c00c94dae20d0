use thiserror::Error as ThisError;

///
/// CatalogError
///
/// Descriptor contract violations surfaced during catalog construction.
/// Absent optional fields that merely gate a rule off are never errors;
/// construction is all-or-nothing, so the first violation aborts the build
/// rather than silently dropping a type from the catalog.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum CatalogError {
    #[error("decimal type '{type_name}' declares no smallest value")]
    MissingSmallestValue { type_name: &'static str },
}
