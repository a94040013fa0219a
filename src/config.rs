use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Acronymic";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Glossary file name inside the app data directory
pub const GLOSSARY_FILE: &str = "acronyms.json";

/// Log filter used when `RUST_LOG` is not set
pub fn default_log_filter() -> &'static str {
    if is_dev() {
        "acronymic=debug,info"
    } else {
        "acronymic=info,warn"
    }
}

/// Debug builds log more by default
pub fn is_dev() -> bool {
    cfg!(debug_assertions)
}

/// Get the application data directory.
/// Platform data dir (e.g. ~/.local/share/acronymic), or ./.acronymic when none is known.
pub fn app_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("acronymic"))
        .unwrap_or_else(|| PathBuf::from(".acronymic"))
}

/// Default location of the persisted glossary
pub fn default_glossary_path() -> PathBuf {
    app_data_dir().join(GLOSSARY_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_is_named_after_crate() {
        let name = app_data_dir().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.ends_with("acronymic"));
    }

    #[test]
    fn glossary_path_under_app_data() {
        let path = default_glossary_path();
        assert!(path.starts_with(app_data_dir()));
        assert!(path.ends_with(GLOSSARY_FILE));
    }

    #[test]
    fn app_name_is_acronymic() {
        assert_eq!(APP_NAME, "Acronymic");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_targets_crate() {
        assert!(default_log_filter().starts_with("acronymic="));
    }
}
