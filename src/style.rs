//! Styling parameters
//!
//! Each visual property is either a constant applied to every mark or the
//! name of a record column the property is mapped from. The choice is made
//! explicitly by the caller with [`Style`] and [`ColourStyle`]; untyped
//! input (e.g. from the command line) can be resolved against a record set
//! with `parse_against`, where a value naming a column is a column.

use std::fmt::Display;
use std::str::FromStr;

use tracing::warn;

use crate::error::ChartError;
use crate::table::Table;

/// A constant or a column reference
#[derive(Debug, Clone, PartialEq)]
pub enum Style<T> {
    Fixed(T),
    FromColumn(String),
}

impl<T> Style<T> {
    pub fn column(name: impl Into<String>) -> Self {
        Style::FromColumn(name.into())
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Style::FromColumn(_))
    }

    pub fn fixed(&self) -> Option<&T> {
        match self {
            Style::Fixed(value) => Some(value),
            Style::FromColumn(_) => None,
        }
    }
}

impl<T: FromStr> Style<T>
where
    T::Err: Display,
{
    /// Column if `raw` names a column of `table`, otherwise `raw` parsed as `T`
    pub fn parse_against(parameter: &str, raw: &str, table: &Table) -> Result<Self, ChartError> {
        if table.has_column(raw) {
            return Ok(Style::FromColumn(raw.to_string()));
        }
        raw.parse::<T>().map(Style::Fixed).map_err(|e| {
            ChartError::invalid_style(
                parameter,
                format!("'{raw}' is neither a column nor a valid constant ({e})"),
            )
        })
    }
}

impl From<f64> for Style<f64> {
    fn from(value: f64) -> Self {
        Style::Fixed(value)
    }
}

impl From<&str> for Style<String> {
    fn from(value: &str) -> Self {
        Style::Fixed(value.to_string())
    }
}

impl From<String> for Style<String> {
    fn from(value: String) -> Self {
        Style::Fixed(value)
    }
}

impl Style<f64> {
    /// Constants must be finite and non-negative
    pub fn validate_non_negative(&self, parameter: &str) -> Result<(), ChartError> {
        match self {
            Style::Fixed(v) if !(v.is_finite() && *v >= 0.0) => Err(ChartError::invalid_style(
                parameter,
                format!("expected a finite, non-negative number, got {v}"),
            )),
            _ => Ok(()),
        }
    }

    /// Constants must lie in [0, 1]
    pub fn validate_opacity(&self, parameter: &str) -> Result<(), ChartError> {
        match self {
            Style::Fixed(v) if !(0.0..=1.0).contains(v) => Err(ChartError::invalid_style(
                parameter,
                format!("opacity must be between 0 and 1, got {v}"),
            )),
            _ => Ok(()),
        }
    }
}

/// Colour of a mark
#[derive(Debug, Clone, PartialEq)]
pub enum ColourStyle {
    /// Any CSS colour; the empty string leaves marks unfilled
    Fixed(String),
    /// Column holding colour values or categories
    FromColumn(String),
    /// Numeric column mapped through a named Vega colour scheme
    ColourMap { column: String, scheme: String },
}

impl ColourStyle {
    pub fn fixed(colour: impl Into<String>) -> Self {
        ColourStyle::Fixed(colour.into())
    }

    pub fn column(name: impl Into<String>) -> Self {
        ColourStyle::FromColumn(name.into())
    }

    pub fn colour_map(column: impl Into<String>, scheme: impl Into<String>) -> Self {
        ColourStyle::ColourMap {
            column: column.into(),
            scheme: scheme.into(),
        }
    }

    /// Column if `raw` names a column of `table` (mapped through `scheme`
    /// when one is given), otherwise a constant colour.
    pub fn parse_against(raw: &str, scheme: Option<&str>, table: &Table) -> Self {
        match (table.has_column(raw), scheme) {
            (true, Some(scheme)) => ColourStyle::colour_map(raw, scheme),
            (true, None) => ColourStyle::column(raw),
            (false, scheme) => {
                if let Some(scheme) = scheme {
                    warn!(colour = raw, scheme, "colour scheme ignored for a constant colour");
                }
                ColourStyle::fixed(raw)
            }
        }
    }
}

impl From<&str> for ColourStyle {
    fn from(value: &str) -> Self {
        ColourStyle::fixed(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn table() -> Table {
        let row = match json!({"node": "a", "x": 0.0, "y": 0.0, "weight": 2.0}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        Table::from_rows(&["node", "x", "y"], vec![row])
    }

    #[test]
    fn test_parse_against_prefers_columns() {
        let style = Style::<f64>::parse_against("size", "weight", &table()).unwrap();
        assert_eq!(style, Style::column("weight"));
    }

    #[test]
    fn test_parse_against_falls_back_to_constant() {
        let style = Style::<f64>::parse_against("size", "12.5", &table()).unwrap();
        assert_eq!(style, Style::Fixed(12.5));

        let shape = Style::<String>::parse_against("shape", "square", &table()).unwrap();
        assert_eq!(shape, Style::Fixed("square".to_string()));
    }

    #[test]
    fn test_parse_against_rejects_garbage() {
        let err = Style::<f64>::parse_against("size", "huge", &table()).unwrap_err();
        assert!(matches!(err, ChartError::InvalidStyle { parameter, .. } if parameter == "size"));
    }

    #[test]
    fn test_colour_parse_against() {
        let t = table();
        assert_eq!(
            ColourStyle::parse_against("weight", Some("viridis"), &t),
            ColourStyle::colour_map("weight", "viridis")
        );
        assert_eq!(
            ColourStyle::parse_against("weight", None, &t),
            ColourStyle::column("weight")
        );
        assert_eq!(
            ColourStyle::parse_against("teal", Some("viridis"), &t),
            ColourStyle::fixed("teal")
        );
    }

    #[test]
    fn test_validation() {
        assert!(Style::Fixed(-1.0).validate_non_negative("width").is_err());
        assert!(Style::Fixed(f64::INFINITY).validate_non_negative("width").is_err());
        assert!(Style::<f64>::column("w").validate_non_negative("width").is_ok());
        assert!(Style::Fixed(1.5).validate_opacity("alpha").is_err());
        assert!(Style::Fixed(0.5).validate_opacity("alpha").is_ok());
    }
}
