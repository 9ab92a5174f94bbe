//! Records command configuration

use std::path::PathBuf;

use super::chart_size;
use crate::cli::{LayoutKind, RecordKind};
use crate::common::missing_field;

#[derive(Debug, Clone)]
pub struct RecordsConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub layout: LayoutKind,
    /// Chart size the positions are rescaled to, as for `draw`
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub kind: RecordKind,
    pub curved: bool,
    pub pretty: bool,
}

impl RecordsConfig {
    pub fn builder() -> RecordsConfigBuilder {
        RecordsConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct RecordsConfigBuilder {
    input: Option<PathBuf>,
    output: Option<Option<PathBuf>>,
    layout: Option<LayoutKind>,
    width: Option<f64>,
    height: Option<f64>,
    kind: Option<RecordKind>,
    curved: Option<bool>,
    pretty: Option<bool>,
}

impl RecordsConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_layout(mut self, layout: LayoutKind) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_width(mut self, width: Option<f64>) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: Option<f64>) -> Self {
        self.height = height;
        self
    }

    pub fn with_kind(mut self, kind: RecordKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_curved(mut self, curved: bool) -> Self {
        self.curved = Some(curved);
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = Some(pretty);
        self
    }
}

impl crate::common::ConfigBuilder for RecordsConfigBuilder {
    type Config = RecordsConfig;

    fn build(self) -> Result<Self::Config, crate::error::ChartError> {
        let (width, height) = chart_size(self.width, self.height)?;

        Ok(RecordsConfig {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            output: self.output.ok_or_else(|| missing_field("output"))?,
            layout: self.layout.ok_or_else(|| missing_field("layout"))?,
            width,
            height,
            kind: self.kind.ok_or_else(|| missing_field("kind"))?,
            curved: self.curved.unwrap_or(false),
            pretty: self.pretty.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;
    use crate::error::ChartError;

    #[test]
    fn test_missing_input() {
        let result = RecordsConfig::builder()
            .with_output(None)
            .with_layout(LayoutKind::Force)
            .with_kind(RecordKind::Nodes)
            .build();

        assert!(matches!(
            result,
            Err(ChartError::ConfigurationError { message }) if message.contains("input")
        ));
    }

    #[test]
    fn test_size_defaults_and_validation() {
        let base = || {
            RecordsConfig::builder()
                .with_input("graph.json".into())
                .with_output(None)
                .with_layout(LayoutKind::Circular)
                .with_kind(RecordKind::Edges)
        };

        let config = base().build().unwrap();
        assert_eq!((config.width, config.height), (Some(500.0), Some(300.0)));

        let config = base().with_height(Some(120.0)).build().unwrap();
        assert_eq!((config.width, config.height), (None, Some(120.0)));

        assert!(matches!(
            base().with_width(Some(0.0)).build(),
            Err(ChartError::InvalidChartSize { .. })
        ));
    }
}
