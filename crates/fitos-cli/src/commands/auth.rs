use clap::Subcommand;
use fitos_core::insight::credentials;

use super::CliResult;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Store the Gemini API key in the OS keyring
    SetKey {
        key: String,
    },
    /// Remove the stored API key
    Clear,
    /// Check whether an API key is available
    Status,
}

pub fn run(action: AuthAction) -> CliResult {
    match action {
        AuthAction::SetKey { key } => {
            let key = key.trim();
            if key.is_empty() {
                return Err("API key must not be empty".into());
            }
            credentials::set(credentials::GEMINI_API_KEY, key)?;
            println!("API key stored");
        }
        AuthAction::Clear => {
            credentials::delete(credentials::GEMINI_API_KEY)?;
            println!("API key removed");
        }
        AuthAction::Status => {
            let stored = credentials::get(credentials::GEMINI_API_KEY).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "keyring unavailable");
                None
            });
            let status = if stored.is_some() {
                "configured (keyring)"
            } else if std::env::var("GEMINI_API_KEY").is_ok_and(|k| !k.is_empty()) {
                "configured (environment)"
            } else {
                "not configured"
            };
            println!("{status}");
        }
    }
    Ok(())
}
