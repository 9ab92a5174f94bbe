//! Records command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RecordsConfig;
use crate::error::ChartError;

impl FromCommand for RecordsConfig {
    fn from_command(command: Commands) -> Result<Self, ChartError> {
        match command {
            Commands::Records {
                input,
                layout,
                width,
                height,
                kind,
                curved,
                pretty,
            } => RecordsConfig::builder()
                .with_input(input.input)
                .with_output(input.output)
                .with_layout(layout.layout)
                .with_width(width)
                .with_height(height)
                .with_kind(kind)
                .with_curved(curved)
                .with_pretty(pretty)
                .build(),
            _ => Err(ChartError::ConfigurationError {
                message: "Invalid command type for RecordsConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RecordsConfig);

/// Execute the records command
pub fn execute_records_command(command: Commands) -> Result<()> {
    let config = RecordsConfig::from_command(command)
        .wrap_err("Failed to parse records command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::records::RecordsExecutor;
    RecordsExecutor::execute(config)
}
