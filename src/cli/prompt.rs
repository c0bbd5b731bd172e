use anyhow::Result;

use crate::ai::prompt::build_system_prompt;
use crate::core::{AppConfig, BusinessCatalog};

pub fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    let catalog = BusinessCatalog::load(config.business_profile_path.as_deref())?;
    println!("{}", build_system_prompt(&catalog.profile)?);
    Ok(())
}
