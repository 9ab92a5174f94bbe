//! Draw command configuration

use std::path::PathBuf;

use crate::cli::LayoutKind;
use super::chart_size;
use crate::common::missing_field;
use crate::error::ChartError;

/// Style values as given on the command line, resolved against the
/// graph's attributes when drawing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawStyles {
    pub node_colour: Option<String>,
    pub node_cmap: Option<String>,
    pub node_size: Option<String>,
    pub node_shape: Option<String>,
    pub node_label: Option<String>,
    pub edge_colour: Option<String>,
    pub edge_cmap: Option<String>,
    pub edge_width: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DrawConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub layout: LayoutKind,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub show_orphans: bool,
    pub show_self_loops: bool,
    pub curved: bool,
    pub styles: RawStyles,
    pub pretty: bool,
}

impl DrawConfig {
    pub fn builder() -> DrawConfigBuilder {
        DrawConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct DrawConfigBuilder {
    input: Option<PathBuf>,
    output: Option<Option<PathBuf>>,
    layout: Option<LayoutKind>,
    width: Option<f64>,
    height: Option<f64>,
    show_orphans: Option<bool>,
    show_self_loops: Option<bool>,
    curved: Option<bool>,
    styles: Option<RawStyles>,
    pretty: Option<bool>,
}

impl DrawConfigBuilder {
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

    pub fn with_show_orphans(mut self, show_orphans: bool) -> Self {
        self.show_orphans = Some(show_orphans);
        self
    }

    pub fn with_show_self_loops(mut self, show_self_loops: bool) -> Self {
        self.show_self_loops = Some(show_self_loops);
        self
    }

    pub fn with_curved(mut self, curved: bool) -> Self {
        self.curved = Some(curved);
        self
    }

    pub fn with_styles(mut self, styles: RawStyles) -> Self {
        self.styles = Some(styles);
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = Some(pretty);
        self
    }
}

impl crate::common::ConfigBuilder for DrawConfigBuilder {
    type Config = DrawConfig;

    fn build(self) -> Result<Self::Config, ChartError> {
        let (width, height) = chart_size(self.width, self.height)?;

        Ok(DrawConfig {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            output: self.output.ok_or_else(|| missing_field("output"))?,
            layout: self.layout.ok_or_else(|| missing_field("layout"))?,
            width,
            height,
            show_orphans: self.show_orphans.unwrap_or(true),
            show_self_loops: self.show_self_loops.unwrap_or(true),
            curved: self.curved.unwrap_or(false),
            styles: self.styles.unwrap_or_default(),
            pretty: self.pretty.unwrap_or(false),
        })
    }
}
