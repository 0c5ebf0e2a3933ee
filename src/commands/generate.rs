use crate::config;
use crate::utils::ffi_bindings;
use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Clone)]
pub enum GenerateCommands {
    /// Generate the C header declaring every exported symbol
    Header {
        /// Where to write the header (default: $GREETBRIDGE_HEADER or include/greetbridge.h)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

pub fn handle_generate(command: GenerateCommands) -> Result<()> {
    match command {
        GenerateCommands::Header { output } => {
            let header = config::resolve_header_config(output.as_deref())?;
            println!("Generating C header...");
            ffi_bindings::generate_ffi_bindings_cli(&header.ffi_dir, &header.output)?;
            println!("✓ C header written to {}", header.output.display());
        }
    }

    Ok(())
}
