//! Numeric kind selection and per-kind value parsing.
//!
//! A [`NumericKind`] names the representation configuration values are parsed
//! with (integer widths, floating-point precisions). It affects parsing and
//! diagnostics only: every parsed value is widened to `f64` for computation,
//! so the validation and generation logic exists once instead of once per
//! kind.

use std::fmt;
use std::str::FromStr;

use crate::error::MultabError;
use crate::Result;

/// Numeric representation used to parse configuration values.
///
/// Selected on the command line by the names `byte`, `int`, `long`, `float`
/// and `double` (case-insensitive); `int` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumericKind {
    /// 8-bit signed integer ("byte")
    Int8,
    /// 32-bit signed integer ("int")
    #[default]
    Int32,
    /// 64-bit signed integer ("long")
    Int64,
    /// Single-precision float ("float")
    Float32,
    /// Double-precision float ("double")
    Float64,
}

impl NumericKind {
    /// Parse a raw configuration value at this kind's width and widen it to
    /// `f64`.
    ///
    /// The widening is exact, so kind behavior survives it: `Int8` rejects
    /// values outside -128..=127, and `Float32` keeps single-precision
    /// rounding ("0.1" widens to 0.10000000149011612, not 0.1). Integral
    /// kinds beyond 2^53 land on the nearest representable `f64`; the
    /// computation downstream is floating point either way. `key` names the
    /// configuration entry in the failure diagnostic.
    pub fn parse_value(&self, key: &str, raw: &str) -> Result<f64> {
        let parsed = match self {
            NumericKind::Int8 => raw.parse::<i8>().ok().map(f64::from),
            NumericKind::Int32 => raw.parse::<i32>().ok().map(f64::from),
            NumericKind::Int64 => raw.parse::<i64>().ok().map(|v| v as f64),
            NumericKind::Float32 => raw.parse::<f32>().ok().map(f64::from),
            NumericKind::Float64 => raw.parse::<f64>().ok(),
        };
        parsed.ok_or_else(|| MultabError::NumericParse {
            kind: *self,
            key: key.to_string(),
            value: raw.to_string(),
        })
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumericKind::Int8 => "byte",
            NumericKind::Int32 => "int",
            NumericKind::Int64 => "long",
            NumericKind::Float32 => "float",
            NumericKind::Float64 => "double",
        };
        f.write_str(name)
    }
}

impl FromStr for NumericKind {
    type Err = MultabError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "byte" => Ok(NumericKind::Int8),
            "int" => Ok(NumericKind::Int32),
            "long" => Ok(NumericKind::Int64),
            "float" => Ok(NumericKind::Float32),
            "double" => Ok(NumericKind::Float64),
            _ => Err(MultabError::UnsupportedKind(s.to_string())),
        }
    }
}
