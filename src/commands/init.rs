use std::io::{self, Write};

use crate::config::{self, Config, DEFAULT_API_URL};
use crate::error::Result;
use crate::output;

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        print!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            output::print_message("Aborted.");
            return Ok(());
        }
    }

    println!("Students CLI Configuration");
    println!("==========================\n");

    print!("Students collection URL [{DEFAULT_API_URL}]: ");
    io::stdout().flush()?;

    let mut api_url = String::new();
    io::stdin().read_line(&mut api_url)?;
    let api_url = match api_url.trim() {
        "" => DEFAULT_API_URL,
        entered => entered,
    };

    let api_url = config::parse_api_url(api_url)?;

    let config = Config {
        api_url: Some(api_url.to_string()),
    };
    config.save_to(&config_path)?;

    output::print_success(&format!("Config saved to {}", config_path.display()));
    println!("You can now use 'students' commands!");

    Ok(())
}
