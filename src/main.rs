use miette::Result;

/// Main entry point for the petgraph-vega CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    petgraph_vega::run()
}
