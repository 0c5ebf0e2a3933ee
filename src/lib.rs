// Library crate for greetbridge - the greeting core and its C boundary
#[cfg(not(target_arch = "wasm32"))]
pub mod commands;
pub mod config;
pub mod ffi;
pub mod greeting;
pub mod utils;

pub use greeting::{greet, GreetError, Person, PLACEHOLDER, PREFIX};

// CLI-specific types (used by both library and binary)
#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Greet a person through the C boundary
    Greet {
        /// Name to greet. If not provided, NULL is passed across the boundary
        name: Option<String>,
    },
    /// Generate build artifacts (C header)
    Generate {
        #[command(subcommand)]
        command: commands::generate::GenerateCommands,
    },
    /// Print the library version reported across the C boundary
    Version,
}
