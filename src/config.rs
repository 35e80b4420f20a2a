use std::{fs, path::PathBuf};

const DEFAULT_CONFIG: &str = "# Search settings\n\
# Treat queries as regular expressions\n\
use_regex = false\n\
# Require exact case when matching\n\
case_sensitive = true\n";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub use_regex: bool,
    pub case_sensitive: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            use_regex: false,
            case_sensitive: true,
        }
    }
}

impl AppConfig {
    pub fn load_or_create() -> Self {
        let config = Self::default();
        let Some(path) = ensure_config_file() else {
            return config;
        };

        if let Ok(contents) = fs::read_to_string(&path) {
            return Self::from_contents(&contents);
        }

        config
    }

    fn from_contents(contents: &str) -> Self {
        let mut config = Self::default();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.splitn(2, '=');
            let key = parts.next().unwrap_or("").trim();
            let value = parts.next().unwrap_or("").trim();

            if key.eq_ignore_ascii_case("use_regex") {
                if let Some(use_regex) = parse_bool(value) {
                    config.use_regex = use_regex;
                }
            }

            if key.eq_ignore_ascii_case("case_sensitive") {
                if let Some(case_sensitive) = parse_bool(value) {
                    config.case_sensitive = case_sensitive;
                }
            }
        }

        config
    }
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn ensure_config_file() -> Option<PathBuf> {
    let path = config_path()?;
    if !path.exists() {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let _ = fs::write(&path, DEFAULT_CONFIG);
    }
    Some(path)
}

fn config_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        dirs::config_dir().map(|p| p.join("quill").join("config.txt"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        dirs::home_dir().map(|p| p.join(".config").join("quill").join("config.txt"))
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, parse_bool};

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_contents("");
        assert!(!config.use_regex);
        assert!(config.case_sensitive);
    }

    #[test]
    fn test_options_parse() {
        let config = AppConfig::from_contents(
            "use_regex = true\n\
             case_sensitive = false\n",
        );
        assert!(config.use_regex);
        assert!(!config.case_sensitive);
    }

    #[test]
    fn test_comments_and_unknown_keys_are_ignored() {
        let config = AppConfig::from_contents(
            "# a comment\n\
             theme = midnight\n\
             use_regex = yes\n",
        );
        assert!(config.use_regex);
        assert!(config.case_sensitive);
    }

    #[test]
    fn test_malformed_values_keep_defaults() {
        let config = AppConfig::from_contents("use_regex = maybe\n");
        assert!(!config.use_regex);
    }

    #[test]
    fn test_bool_aliases() {
        assert_eq!(parse_bool("on"), Some(true));
        assert_eq!(parse_bool("Off"), Some(false));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("nope"), None);
    }
}
