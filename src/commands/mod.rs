// Command module routing
//
// To add a new command:
// 1. Create a new file in this directory (e.g., `mycommand.rs`)
// 2. Add `pub mod mycommand;` below
// 3. Add the match arm in `handle_command` function

pub mod generate;
pub mod greet;
pub mod utils;

use crate::Commands;
use crate::Commands::*;
use anyhow::Result;

/// Dispatch command to appropriate handler
pub fn handle_command(command: Commands) -> Result<()> {
    match command {
        Greet { name } => {
            greet::handle_greet(name.as_deref())?;
        }
        Generate { command } => {
            generate::handle_generate(command)?;
        }
        Version => {
            utils::print_version()?;
        }
    }
    Ok(())
}
