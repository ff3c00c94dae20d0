//! Per-type catalog of tagged literal values.
//!
//! `build_catalog` is the only writer. The returned catalog is read-only for
//! consumers; value order within an entry is insertion order and is
//! meaningful (generators pick the first value of a given characteristic).

use crate::{
    characteristic::Characteristic, error::CatalogError, literal::SqlLiteral,
    number_type::NumberDataType,
};
use serde::Serialize;
use std::collections::BTreeSet;

///
/// TaggedValue
///
/// One literal of a catalog entry plus the characteristic tags expression
/// generators sample by. Created once by the inclusion rule that fires for
/// it; only the large-value pass mutates the tag set afterwards.
///

#[derive(Clone, Debug, Serialize)]
pub struct TaggedValue {
    pub literal: SqlLiteral,
    pub symbolic_name: String,
    pub characteristics: BTreeSet<Characteristic>,
}

impl TaggedValue {
    #[must_use]
    pub fn has_characteristic(&self, characteristic: Characteristic) -> bool {
        self.characteristics.contains(&characteristic)
    }
}

///
/// DataTypeWithValues
///
/// Catalog entry for one numeric type.
///

#[derive(Clone, Debug, Serialize)]
pub struct DataTypeWithValues {
    pub data_type: NumberDataType,
    pub values: Vec<TaggedValue>,
}

impl DataTypeWithValues {
    const fn new(data_type: NumberDataType) -> Self {
        Self {
            data_type,
            values: Vec::new(),
        }
    }

    fn add_value(
        &mut self,
        literal: SqlLiteral,
        symbolic_name: impl Into<String>,
        characteristics: impl IntoIterator<Item = Characteristic>,
    ) {
        self.values.push(TaggedValue {
            literal,
            symbolic_name: symbolic_name.into(),
            characteristics: characteristics.into_iter().collect(),
        });
    }

    /// First value carrying `characteristic`, honoring catalog order.
    #[must_use]
    pub fn first_with(&self, characteristic: Characteristic) -> Option<&TaggedValue> {
        self.values
            .iter()
            .find(|value| value.has_characteristic(characteristic))
    }
}

///
/// ValueCatalog
///
/// Per-type tagged value collections, one entry per registry type, in
/// registry order. Built exactly once and never rebuilt.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ValueCatalog {
    entries: Vec<DataTypeWithValues>,
}

impl ValueCatalog {
    #[must_use]
    pub fn entries(&self) -> &[DataTypeWithValues] {
        &self.entries
    }

    /// Entry for `data_type`, keyed by descriptor identity (the name).
    #[must_use]
    pub fn entry(&self, data_type: &NumberDataType) -> Option<&DataTypeWithValues> {
        self.entries
            .iter()
            .find(|entry| entry.data_type.name == data_type.name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every maximal representable value is also a large value.
    ///
    /// Runs once after all entries are built, so the max-value rules above
    /// stay single-sourced. Inserting an already-present tag is a no-op,
    /// which keeps the pass idempotent.
    pub(crate) fn annotate_large_values(&mut self) {
        for entry in &mut self.entries {
            for value in &mut entry.values {
                if value.has_characteristic(Characteristic::MaxValue) {
                    value.characteristics.insert(Characteristic::LargeValue);
                }
            }
        }
    }
}

/// Build the per-type value catalog from `registry`, in registry order.
///
/// Fails on the first descriptor that declares itself decimal without a
/// smallest value. A merely absent `max_negative_value` gates its rule off
/// instead; no type is ever silently dropped.
pub fn build_catalog(registry: &[NumberDataType]) -> Result<ValueCatalog, CatalogError> {
    let mut catalog = ValueCatalog {
        entries: Vec::with_capacity(registry.len()),
    };

    for data_type in registry {
        catalog.entries.push(values_for_type(data_type)?);
    }

    catalog.annotate_large_values();

    Ok(catalog)
}

fn values_for_type(data_type: &NumberDataType) -> Result<DataTypeWithValues, CatalogError> {
    use Characteristic as C;

    let mut entry = DataTypeWithValues::new(data_type.clone());

    entry.add_value(SqlLiteral::Numeral("0"), "ZERO", [C::Zero]);
    entry.add_value(
        SqlLiteral::Numeral("1"),
        "ONE",
        [C::One, C::TinyValue, C::NonEmpty],
    );
    entry.add_value(
        SqlLiteral::Numeral(data_type.max_value),
        "MAX",
        [C::MaxValue, C::NonEmpty],
    );

    if data_type.is_signed
        && let Some(neg_max) = data_type.max_negative_value
    {
        entry.add_value(
            SqlLiteral::Numeral(neg_max),
            "NEG_MAX",
            [C::Negative, C::MaxValue, C::NonEmpty],
        );
    }

    if data_type.is_decimal {
        let smallest =
            data_type
                .smallest_value
                .ok_or(CatalogError::MissingSmallestValue {
                    type_name: data_type.name,
                })?;

        // ONE already covers the tiny slot for non-decimal types.
        entry.add_value(
            SqlLiteral::Numeral(smallest),
            "TINY",
            [C::TinyValue, C::NonEmpty, C::Decimal],
        );
        entry.add_value(SqlLiteral::Quoted("NaN"), "NAN", [C::Nan, C::Decimal]);
    }

    if data_type.supports_infinity {
        entry.add_value(SqlLiteral::Quoted("+Infinity"), "P_INFINITY", [C::Infinity]);
        entry.add_value(SqlLiteral::Quoted("-Infinity"), "N_INFINITY", [C::Infinity]);
    }

    // TINY is reserved for the smallest value, so extras start at TINY2.
    for (index, tiny_value) in data_type.further_tiny_dec_values.iter().enumerate() {
        entry.add_value(
            SqlLiteral::Numeral(tiny_value),
            format!("TINY{}", index + 2),
            [C::TinyValue, C::NonEmpty, C::Decimal],
        );
    }

    Ok(entry)
}
