//! Input data for SQL output-consistency testing: numeric type descriptors,
//! characteristic tags, and the per-type catalog of tagged literal values
//! that expression generators sample from.

pub mod catalog;
pub mod characteristic;
pub mod error;
pub mod literal;
pub mod number_type;


///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        catalog::{DataTypeWithValues, TaggedValue, ValueCatalog, build_catalog},
        characteristic::Characteristic,
        literal::SqlLiteral,
        number_type::{NUMERIC_DATA_TYPES, NumberDataType},
    };
}
