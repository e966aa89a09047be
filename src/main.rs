use anyhow::Result;

use taskpad::{config::Config, logger, ui};

fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    ui::run_app(&config)?;

    Ok(())
}
