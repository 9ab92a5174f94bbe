//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::cli::LayoutKind;

/// Input and output files shared by every command
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Node-link JSON file to read
    #[arg(value_name = "INPUT", env = "PETGRAPH_VEGA_INPUT")]
    pub input: PathBuf,

    /// Output file (stdout if not specified)
    #[arg(short, long, env = "PETGRAPH_VEGA_OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Layout used when the input file carries no positions
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    #[arg(
        long,
        value_enum,
        default_value = "force",
        env = "PETGRAPH_VEGA_LAYOUT"
    )]
    pub layout: LayoutKind,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::ChartError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::ChartError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::ChartError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Error for a builder field that was never set
pub(crate) fn missing_field(field: &str) -> crate::error::ChartError {
    crate::error::ChartError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Commands};

    #[test]
    fn test_input_args_parse() {
        let cli = Cli::try_parse_from(["petgraph-vega", "records", "graph.json", "-o", "out.json"])
            .unwrap();

        match cli.command {
            Commands::Records { input, layout, .. } => {
                assert_eq!(input.input, PathBuf::from("graph.json"));
                assert_eq!(input.output, Some(PathBuf::from("out.json")));
                assert_eq!(layout.layout, LayoutKind::Force);
            }
            _ => panic!("expected the records command"),
        }
    }

    #[test]
    fn test_missing_field_message() {
        let err = missing_field("input");
        assert_eq!(err.to_string(), "Configuration error: Missing required field: input");
    }
}
