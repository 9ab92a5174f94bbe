//! Core graph types
//!
//! Nodes carry a unique name plus free-form attributes, edges carry
//! attributes only. Attribute values are JSON values so they can be copied
//! into chart records unchanged.

use std::collections::BTreeMap;

use petgraph::graph::Graph;
use petgraph::{Directed, Undirected};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geometry::Point;

/// Named attributes of a node or edge
pub type Attributes = BTreeMap<String, Value>;

/// Node positions keyed by node name
pub type Positions = BTreeMap<String, Point>;

/// The graph model drawn by this crate
pub type NetworkGraph<Ty = Directed> = Graph<NodeData, EdgeData, Ty>;

pub type DiNetwork = NetworkGraph<Directed>;
pub type UnNetwork = NetworkGraph<Undirected>;

/// A node of the drawn graph
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeData {
    pub name: String,
    #[serde(default)]
    pub attributes: Attributes,
}

impl NodeData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// An edge of the drawn graph
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeData {
    #[serde(default)]
    pub attributes: Attributes,
}

impl EdgeData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}
