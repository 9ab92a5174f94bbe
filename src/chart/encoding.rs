//! Encoding assembly
//!
//! Turns resolved styles into constant mark properties or channel
//! encodings, checking column references against the layer's records.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

use super::spec::{Channel, Chart, FieldDef, LayerKind, Mark, MarkType};
use crate::constants::columns;
use crate::error::ChartError;
use crate::style::{ColourStyle, Style};
use crate::table::{FieldType, Table};

pub struct EncodingBuilder {
    kind: LayerKind,
    data: Table,
    legend: bool,
    properties: Map<String, Value>,
    encoding: BTreeMap<String, Channel>,
}

impl EncodingBuilder {
    /// Start a layer over `data`, with x/y bound to the coordinate columns
    pub fn new(kind: LayerKind, data: Table, legend: bool) -> Self {
        let mut builder = Self {
            kind,
            data,
            legend,
            properties: Map::new(),
            encoding: BTreeMap::new(),
        };
        builder.position(columns::X);
        builder.position(columns::Y);
        builder
    }

    pub fn data(&self) -> &Table {
        &self.data
    }

    fn position(&mut self, column: &str) {
        let mut def = FieldDef::new(column, FieldType::Quantitative);
        def.axis = Some(json!({
            "title": "",
            "grid": false,
            "labels": false,
            "ticks": false,
        }));
        self.encoding
            .insert(column.to_string(), Channel::Field(def));
    }

    fn legend_value(&self) -> Value {
        if self.legend { json!({}) } else { Value::Null }
    }

    fn require_column(&self, parameter: &str, column: &str) -> Result<(), ChartError> {
        if self.data.has_column(column) {
            Ok(())
        } else {
            Err(ChartError::UnknownColumn {
                parameter: parameter.to_string(),
                column: column.to_string(),
                layer: self.kind.to_string(),
            })
        }
    }

    fn field(&self, column: &str) -> FieldDef {
        FieldDef::new(column, self.data.field_type(column))
    }

    /// Bind a column to a channel without legend or scale
    pub fn channel(&mut self, channel: &str, column: &str) -> Result<&mut Self, ChartError> {
        self.require_column(channel, column)?;
        let def = self.field(column);
        self.encoding.insert(channel.to_string(), Channel::Field(def));
        Ok(self)
    }

    pub fn mark_property(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        self.properties.insert(name.to_string(), value.into());
        self
    }

    /// Constant goes to `mark_property`, column to `channel`
    pub fn style<T: Clone + Into<Value>>(
        &mut self,
        parameter: &str,
        style: &Style<T>,
        mark_property: &str,
        channel: &str,
    ) -> Result<&mut Self, ChartError> {
        match style {
            Style::Fixed(value) => {
                self.properties
                    .insert(mark_property.to_string(), value.clone().into());
            }
            Style::FromColumn(column) => {
                self.require_column(parameter, column)?;
                let mut def = self.field(column);
                def.legend = Some(self.legend_value());
                self.encoding.insert(channel.to_string(), Channel::Field(def));
            }
        }
        Ok(self)
    }

    pub fn colour(
        &mut self,
        parameter: &str,
        colour: &ColourStyle,
        mark_property: &str,
        channel: &str,
    ) -> Result<&mut Self, ChartError> {
        match colour {
            ColourStyle::Fixed(value) => {
                self.properties
                    .insert(mark_property.to_string(), Value::from(value.clone()));
            }
            ColourStyle::FromColumn(column) => {
                self.require_column(parameter, column)?;
                let mut def = self.field(column);
                def.legend = Some(self.legend_value());
                self.encoding.insert(channel.to_string(), Channel::Field(def));
            }
            ColourStyle::ColourMap { column, scheme } => {
                self.require_column(parameter, column)?;
                if !self.data.is_numeric(column) {
                    return Err(ChartError::NonNumericColourMap {
                        column: column.clone(),
                        scheme: scheme.clone(),
                    });
                }
                let mut def = FieldDef::new(column.clone(), FieldType::Quantitative);
                def.scale = Some(json!({ "scheme": scheme }));
                def.legend = Some(self.legend_value());
                self.encoding.insert(channel.to_string(), Channel::Field(def));
            }
        }
        Ok(self)
    }

    pub fn tooltip(&mut self, columns: Option<&[String]>) -> Result<&mut Self, ChartError> {
        let Some(columns) = columns else {
            return Ok(self);
        };
        let defs = columns
            .iter()
            .map(|column| {
                self.require_column("tooltip", column)?;
                Ok(self.field(column))
            })
            .collect::<Result<Vec<_>, ChartError>>()?;
        self.encoding
            .insert("tooltip".to_string(), Channel::Fields(defs));
        Ok(self)
    }

    pub fn build(self, mark_type: MarkType) -> Chart {
        Chart::new(
            self.kind,
            self.data,
            Mark {
                mark_type,
                properties: self.properties,
            },
            self.encoding,
        )
    }
}
