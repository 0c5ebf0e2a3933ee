use anyhow::Result;
use clap::Parser;
use greetbridge::commands;
use greetbridge::config;
use greetbridge::Commands;

#[derive(Parser)]
#[command(name = "greetbridge")]
#[command(about = "Greeting bridge - calls the C-ABI greeting export and generates its header", long_about = None)]
#[command(version = commands::utils::get_version_string())]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    config::load_dotenv();

    let cli = Cli::parse();
    commands::handle_command(cli.command)?;

    Ok(())
}
