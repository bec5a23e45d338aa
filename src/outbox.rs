//! Local outbox for contact submissions.
//!
//! Each submission is a small TOML file named by the SHA-256 of its contents,
//! so resubmitting the same message overwrites instead of duplicating.

use anyhow::{Context, Result};
use neuralchat_core::actions::ContactForm;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OutboxEntry {
    pub submitted_at: u64,
    pub form: ContactForm,
}

fn submission_hash(form: &ContactForm) -> String {
    let mut hasher = Sha256::new();
    for field in [&form.name, &form.email, &form.phone, &form.message] {
        hasher.update(field.as_bytes());
        hasher.update([0u8]);
    }
    format!("{:x}", hasher.finalize())
}

pub fn submission_path(dir: &Path, form: &ContactForm) -> PathBuf {
    dir.join(format!("{}.toml", submission_hash(form)))
}

/// Persist one submission and return where it landed.
pub fn save_submission(dir: &Path, form: &ContactForm) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create outbox {}", dir.display()))?;
    let entry = OutboxEntry {
        submitted_at: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0),
        form: form.clone(),
    };
    let contents = toml::to_string(&entry).context("Failed to serialize contact submission")?;
    let path = submission_path(dir, form);
    fs::write(&path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

pub fn load_submission(path: &Path) -> Option<OutboxEntry> {
    let data = fs::read_to_string(path).ok()?;
    toml::from_str(&data).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_outbox(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("neuralchat-outbox-{tag}-{}", std::process::id()))
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@acme.test".into(),
            phone: String::new(),
            message: "Tell me about the enterprise plan".into(),
        }
    }

    #[test]
    fn submission_is_written_and_read_back() {
        let dir = temp_outbox("roundtrip");
        let path = save_submission(&dir, &form()).expect("outbox writable");
        assert!(path.starts_with(&dir));
        let entry = load_submission(&path).expect("entry parses");
        assert_eq!(entry.form, form());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn identical_submissions_share_a_file() {
        let dir = temp_outbox("dedupe");
        let first = save_submission(&dir, &form()).expect("outbox writable");
        let second = save_submission(&dir, &form()).expect("outbox writable");
        assert_eq!(first, second);

        let mut other = form();
        other.message.push('!');
        assert_ne!(submission_path(&dir, &other), first);
        let _ = fs::remove_dir_all(dir);
    }
}
