//! Cell values produced by column accessors.

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use serde::Serialize;

/// A dynamic cell value extracted from a row by a column accessor.
///
/// Values drive sorting and filtering. Rendering goes through the column's
/// display formatter, which falls back to [`CellValue::display`].
///
/// # Example
///
/// ```
/// use gallery_table::CellValue;
///
/// let title = CellValue::from("Blue Hour");
/// let year = CellValue::from(2021i64);
/// let missing: CellValue = None::<i64>.into();
/// assert!(missing.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Exact decimal (prices).
    Decimal(Decimal),
    /// Text value.
    Text(String),
}

impl CellValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Plain string form, used for text filters and default rendering.
    ///
    /// Null renders as the empty string.
    pub fn display(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(v) => v.to_string(),
            CellValue::Int(v) => v.to_string(),
            CellValue::Float(v) => v.to_string(),
            CellValue::Decimal(v) => v.to_string(),
            CellValue::Text(v) => v.clone(),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Bool(_) => 0,
            CellValue::Int(_) | CellValue::Float(_) | CellValue::Decimal(_) => 1,
            CellValue::Text(_) => 2,
            CellValue::Null => 3,
        }
    }

    /// Exact form for numeric comparison. Floats outside the decimal range
    /// (and NaN or infinities) have none.
    fn as_decimal(&self) -> Option<Decimal> {
        match self {
            CellValue::Int(v) => Some(Decimal::from(*v)),
            CellValue::Float(v) => Decimal::from_f64(*v),
            CellValue::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Float(v) => Some(*v),
            CellValue::Decimal(v) => v.to_f64(),
            _ => None,
        }
    }

    /// Total ordering used by the sorter.
    ///
    /// Numbers compare numerically across `Int`, `Float` and `Decimal`. Text
    /// compares case-insensitively, falling back to a case-sensitive
    /// comparison so the order stays deterministic. Values of different kinds
    /// order as bool < number < text < null.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => Ordering::Equal,
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (CellValue::Decimal(a), CellValue::Decimal(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            _ if self.rank() == 1 && other.rank() == 1 => {
                match (self.as_decimal(), other.as_decimal()) {
                    (Some(a), Some(b)) => a.cmp(&b),
                    _ => match (self.as_f64(), other.as_f64()) {
                        (Some(a), Some(b)) => a.total_cmp(&b),
                        _ => Ordering::Equal,
                    },
                }
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(v.into())
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Int(v.into())
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<Decimal> for CellValue {
    fn from(v: Decimal) -> Self {
        CellValue::Decimal(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => CellValue::Null,
        }
    }
}
