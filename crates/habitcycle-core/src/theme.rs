//! Light/dark theme preference, stored as its own blob.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::BlobStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{other}' (expected dark or light)")),
        }
    }
}

/// Read the stored theme. Anything other than `"light"` reads as dark.
pub fn load_theme<B: BlobStore>(blobs: &B, key: &str) -> Result<Theme> {
    let stored = blobs.get(key)?;
    Ok(match stored.as_deref() {
        Some("light") => Theme::Light,
        _ => Theme::Dark,
    })
}

pub fn save_theme<B: BlobStore>(blobs: &B, key: &str, theme: Theme) -> Result<()> {
    blobs.set(key, theme.as_str())?;
    Ok(())
}

/// Flip the stored theme and return the new value.
pub fn toggle_theme<B: BlobStore>(blobs: &B, key: &str) -> Result<Theme> {
    let theme = load_theme(blobs, key)?.toggled();
    save_theme(blobs, key, theme)?;
    tracing::debug!(theme = %theme, "theme toggled");
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBlobStore;

    #[test]
    fn missing_or_unknown_reads_dark() {
        let blobs = MemoryBlobStore::new();
        assert_eq!(load_theme(&blobs, "habit_theme").unwrap(), Theme::Dark);
        let blobs = MemoryBlobStore::new().with_blob("habit_theme", "sepia");
        assert_eq!(load_theme(&blobs, "habit_theme").unwrap(), Theme::Dark);
    }

    #[test]
    fn toggle_writes_flag() {
        let blobs = MemoryBlobStore::new();
        assert_eq!(toggle_theme(&blobs, "habit_theme").unwrap(), Theme::Light);
        assert_eq!(blobs.peek("habit_theme").as_deref(), Some("light"));
        assert_eq!(toggle_theme(&blobs, "habit_theme").unwrap(), Theme::Dark);
        assert_eq!(blobs.peek("habit_theme").as_deref(), Some("dark"));
    }

    #[test]
    fn parses_names() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("Light".parse::<Theme>().is_err());
    }
}
