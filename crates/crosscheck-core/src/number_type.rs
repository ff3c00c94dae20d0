use serde::Serialize;

///
/// NumberDataType
///
/// Descriptor for one numeric SQL type: representative literal bounds plus
/// the flags that gate which catalog values the type receives.
///
/// Identity is the `name`; the registry never carries two descriptors with
/// the same name. Literal fields are raw SQL tokens and are never parsed or
/// validated by this crate.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NumberDataType {
    pub name: &'static str,
    pub max_value: &'static str,
    pub max_negative_value: Option<&'static str>,
    pub smallest_value: Option<&'static str>,
    pub further_tiny_dec_values: &'static [&'static str],
    pub is_signed: bool,
    pub is_decimal: bool,
    pub supports_infinity: bool,
}

///
/// NUMERIC_DATA_TYPES
///
/// Registry of supported numeric types. Slice order is the catalog order and
/// must stay stable: downstream result comparison keys off it.
///

pub const NUMERIC_DATA_TYPES: &[NumberDataType] = &[
    NumberDataType {
        name: "INT2",
        max_value: "32767",
        max_negative_value: Some("-32768"),
        smallest_value: None,
        further_tiny_dec_values: &[],
        is_signed: true,
        is_decimal: false,
        supports_infinity: false,
    },
    NumberDataType {
        name: "INT4",
        max_value: "2147483647",
        max_negative_value: Some("-2147483648"),
        smallest_value: None,
        further_tiny_dec_values: &[],
        is_signed: true,
        is_decimal: false,
        supports_infinity: false,
    },
    NumberDataType {
        name: "INT8",
        max_value: "9223372036854775807",
        max_negative_value: Some("-9223372036854775808"),
        smallest_value: None,
        further_tiny_dec_values: &[],
        is_signed: true,
        is_decimal: false,
        supports_infinity: false,
    },
    NumberDataType {
        name: "UINT2",
        max_value: "65535",
        max_negative_value: None,
        smallest_value: None,
        further_tiny_dec_values: &[],
        is_signed: false,
        is_decimal: false,
        supports_infinity: false,
    },
    NumberDataType {
        name: "UINT4",
        max_value: "4294967295",
        max_negative_value: None,
        smallest_value: None,
        further_tiny_dec_values: &[],
        is_signed: false,
        is_decimal: false,
        supports_infinity: false,
    },
    NumberDataType {
        name: "UINT8",
        max_value: "18446744073709551615",
        max_negative_value: None,
        smallest_value: None,
        further_tiny_dec_values: &[],
        is_signed: false,
        is_decimal: false,
        supports_infinity: false,
    },
    NumberDataType {
        name: "REAL",
        max_value: "3.40282347E+38",
        max_negative_value: Some("-3.40282347E+38"),
        smallest_value: Some("1.17549435E-38"),
        further_tiny_dec_values: &[],
        is_signed: true,
        is_decimal: true,
        supports_infinity: true,
    },
    NumberDataType {
        name: "DOUBLE PRECISION",
        max_value: "1.7976931348623157E+308",
        max_negative_value: Some("-1.7976931348623157E+308"),
        smallest_value: Some("2.2250738585072014E-308"),
        further_tiny_dec_values: &[],
        is_signed: true,
        is_decimal: true,
        supports_infinity: true,
    },
    // NUMERIC rejects +/-Infinity but accepts 'NaN'.
    NumberDataType {
        name: "NUMERIC",
        max_value: "999999999999999999.999999999999999999",
        max_negative_value: Some("-999999999999999999.999999999999999999"),
        smallest_value: Some("0.000000000000000001"),
        further_tiny_dec_values: &["0.01", "0.000001"],
        is_signed: true,
        is_decimal: true,
        supports_infinity: false,
    },
];
