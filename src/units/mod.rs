// Length conversion engine
// Units are a closed enum keyed into a fixed factor table; conversions pivot through Metre

pub mod converter;
pub mod error;
pub mod formatter;
pub mod prefix;
pub mod table;

#[cfg(test)]
mod tests;

pub use converter::{convert, convert_value, ConversionRequest, ConversionResult};
pub use error::UnitError;
pub use formatter::{format_fixed, DISPLAY_DECIMALS, UNPARSED_RESULT};
pub use prefix::{numeric_prefix, parse_leading_float};
pub use table::{LengthUnit, UnitTable, UNIT_TABLE};
