//! Draw command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::DrawConfig;
use crate::config::draw::RawStyles;
use crate::error::ChartError;

impl FromCommand for DrawConfig {
    fn from_command(command: Commands) -> Result<Self, ChartError> {
        match command {
            Commands::Draw {
                input,
                layout,
                width,
                height,
                hide_orphans,
                hide_self_loops,
                curved,
                node_colour,
                node_cmap,
                node_size,
                node_shape,
                node_label,
                edge_colour,
                edge_cmap,
                edge_width,
                pretty,
            } => DrawConfig::builder()
                .with_input(input.input)
                .with_output(input.output)
                .with_layout(layout.layout)
                .with_width(width)
                .with_height(height)
                .with_show_orphans(!hide_orphans)
                .with_show_self_loops(!hide_self_loops)
                .with_curved(curved)
                .with_styles(RawStyles {
                    node_colour,
                    node_cmap,
                    node_size,
                    node_shape,
                    node_label,
                    edge_colour,
                    edge_cmap,
                    edge_width,
                })
                .with_pretty(pretty)
                .build(),
            _ => Err(ChartError::ConfigurationError {
                message: "Invalid command type for DrawConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(DrawConfig);

/// Execute the draw command
pub fn execute_draw_command(command: Commands) -> Result<()> {
    let config =
        DrawConfig::from_command(command).wrap_err("Failed to parse draw command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::draw::DrawExecutor;
    DrawExecutor::execute(config)
}
