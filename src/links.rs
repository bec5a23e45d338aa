//! Hands payment links and invoice mails to the desktop's default handler.

use anyhow::{Context, Result, anyhow};
use tracing::info;

/// Only web and mail links leave the app.
pub fn check_link(url: &str) -> Result<&str> {
    let url = url.trim();
    let allowed = ["https://", "http://", "mailto:"];
    if allowed.iter().any(|scheme| url.starts_with(scheme)) && !url.contains(char::is_whitespace) {
        Ok(url)
    } else {
        Err(anyhow!("Refusing to open unsupported link {url:?}"))
    }
}

/// Open with the platform handler without waiting on it.
pub fn open_external(url: &str) -> Result<()> {
    let url = check_link(url)?;
    open::that_detached(url).with_context(|| format!("Failed to open {url}"))?;
    info!(%url, "Opened external link");
    Ok(())
}
