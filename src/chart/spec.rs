//! Chart values and their Vega-Lite serialisation

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::constants::vega::SCHEMA;
use crate::error::ChartError;
use crate::table::{FieldType, Table};

/// Role of a layer within a drawn graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Edges,
    Arrows,
    Nodes,
    Labels,
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerKind::Edges => write!(f, "edges"),
            LayerKind::Arrows => write!(f, "arrows"),
            LayerKind::Nodes => write!(f, "nodes"),
            LayerKind::Labels => write!(f, "labels"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    Line,
    Point,
    Text,
}

/// Mark type plus constant mark properties
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub mark_type: MarkType,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

/// Binding of one column to a channel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDef {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Value>,
    /// `Some(Value::Null)` hides the legend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<Value>,
}

impl FieldDef {
    pub fn new(field: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field: field.into(),
            field_type,
            scale: None,
            legend: None,
            axis: None,
        }
    }
}

/// Encoding of one channel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Channel {
    Field(FieldDef),
    Fields(Vec<FieldDef>),
}

impl Channel {
    pub fn field(&self) -> Option<&FieldDef> {
        match self {
            Channel::Field(def) => Some(def),
            Channel::Fields(_) => None,
        }
    }
}

/// A single layer: records, a mark, and encodings
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    kind: LayerKind,
    data: Table,
    mark: Mark,
    encoding: BTreeMap<String, Channel>,
}

impl Chart {
    pub fn new(
        kind: LayerKind,
        data: Table,
        mark: Mark,
        encoding: BTreeMap<String, Channel>,
    ) -> Self {
        Self {
            kind,
            data,
            mark,
            encoding,
        }
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn data(&self) -> &Table {
        &self.data
    }

    pub fn mark(&self) -> &Mark {
        &self.mark
    }

    /// Constant mark property, e.g. `color` or `strokeWidth`
    pub fn mark_property(&self, name: &str) -> Option<&Value> {
        self.mark.properties.get(name)
    }

    pub fn encoding(&self, channel: &str) -> Option<&Channel> {
        self.encoding.get(channel)
    }

    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.encoding.keys().map(String::as_str)
    }

    fn layer_value(&self) -> Value {
        json!({
            "name": self.kind,
            "data": { "values": self.data.to_values() },
            "mark": self.mark,
            "encoding": self.encoding,
        })
    }

    /// Standalone Vega-Lite specification of this layer
    pub fn to_vega_lite(&self) -> Value {
        let mut spec = self.layer_value();
        if let Value::Object(map) = &mut spec {
            map.insert("$schema".into(), Value::from(SCHEMA));
        }
        spec
    }
}

/// Layers stacked in drawing order, sharing one coordinate space
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredChart {
    layers: Vec<Chart>,
    width: f64,
    height: f64,
}

impl LayeredChart {
    pub fn new(layers: Vec<Chart>, width: f64, height: f64) -> Self {
        Self {
            layers,
            width,
            height,
        }
    }

    pub fn layers(&self) -> &[Chart] {
        &self.layers
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn kinds(&self) -> Vec<LayerKind> {
        self.layers.iter().map(Chart::kind).collect()
    }

    pub fn position_of(&self, kind: LayerKind) -> Option<usize> {
        self.layers.iter().position(|layer| layer.kind == kind)
    }

    pub fn layer(&self, kind: LayerKind) -> Option<&Chart> {
        self.position_of(kind).map(|i| &self.layers[i])
    }

    /// A copy of this chart with the layer at `index` replaced
    pub fn with_layer(&self, index: usize, layer: Chart) -> Result<LayeredChart, ChartError> {
        if index >= self.layers.len() {
            return Err(ChartError::LayerIndexOutOfBounds {
                index,
                len: self.layers.len(),
            });
        }
        let mut layers = self.layers.clone();
        layers[index] = layer;
        Ok(LayeredChart::new(layers, self.width, self.height))
    }

    /// A copy of this chart with `layer` drawn on top
    pub fn with_appended_layer(&self, layer: Chart) -> LayeredChart {
        let mut layers = self.layers.clone();
        layers.push(layer);
        LayeredChart::new(layers, self.width, self.height)
    }

    pub fn to_vega_lite(&self) -> Value {
        json!({
            "$schema": SCHEMA,
            "width": self.width,
            "height": self.height,
            "layer": self.layers.iter().map(Chart::layer_value).collect::<Vec<_>>(),
        })
    }

    pub fn to_json_string(&self, pretty: bool) -> Result<String, ChartError> {
        let spec = self.to_vega_lite();
        let text = if pretty {
            serde_json::to_string_pretty(&spec)?
        } else {
            serde_json::to_string(&spec)?
        };
        Ok(text)
    }
}
