//! Command implementations for the petgraph-vega CLI
//!
//! - draw: write a layered Vega-Lite chart of a graph
//! - records: write the records one layer is drawn from

pub mod draw;
pub mod records;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Draw { .. } => draw::execute_draw_command(command),
        Commands::Records { .. } => records::execute_records_command(command),
    }
}
