//! Config commands

use crate::config::Config;

pub fn show(config: &Config) -> Result<(), String> {
    println!("api_url    = {}", config.api_url.as_deref().unwrap_or("(default)"));
    println!("draft_path = {}", config.draft_path()?.display());
    Ok(())
}

pub fn set(
    mut config: Config,
    api_url: Option<String>,
    draft_path: Option<String>,
) -> Result<(), String> {
    if api_url.is_none() && draft_path.is_none() {
        return Err("nothing to set, pass --api-url and/or --draft-path".to_string());
    }
    if api_url.is_some() {
        config.api_url = api_url;
    }
    if draft_path.is_some() {
        config.draft_path = draft_path;
    }
    config.save()?;
    println!("Configuration saved");
    Ok(())
}
