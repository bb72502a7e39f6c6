use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub perf: bool,
    pub body_capacity: Option<usize>,
    pub status_capacity: Option<usize>,
    pub debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            perf: self.perf || other.perf,
            body_capacity: other.body_capacity.or(self.body_capacity),
            status_capacity: other.status_capacity.or(self.status_capacity),
            debug_log: other.debug_log.clone().or_else(|| self.debug_log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("bytepad").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("bytepad")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("bytepad").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("bytepad")
                .join("config");
        }
    }

    PathBuf::from(".bytepadrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".bytepadrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# bytepad defaults (saved with --save)".to_string());
    if let Some(capacity) = flags.body_capacity {
        lines.push(format!("--body-capacity {capacity}"));
    }
    if let Some(capacity) = flags.status_capacity {
        lines.push(format!("--status-capacity {capacity}"));
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(path) = &flags.debug_log {
        lines.push(format!("--debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick known flags out of a token list. Unknown tokens are skipped.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--perf" {
            flags.perf = true;
        } else if token == "--body-capacity" {
            if let Some(next) = tokens.get(i + 1) {
                flags.body_capacity = next.parse().ok();
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--body-capacity=") {
            flags.body_capacity = value.parse().ok();
        } else if token == "--status-capacity" {
            if let Some(next) = tokens.get(i + 1) {
                flags.status_capacity = next.parse().ok();
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--status-capacity=") {
            flags.status_capacity = value.parse().ok();
        } else if token == "--debug-log" {
            if let Some(next) = tokens.get(i + 1) {
                flags.debug_log = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--debug-log=") {
            flags.debug_log = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}
