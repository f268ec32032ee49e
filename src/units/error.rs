use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("Unknown unit: '{0}' (expected one of Metre, Millimetre, Mile, Foot)")]
    UnknownUnit(String),
}
