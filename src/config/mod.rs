mod schema;

pub use schema::{RawSettings, Settings};

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::github::client::GITHUB_API_URL;
use crate::report::DEFAULT_STALE_AFTER_DAYS;

const SETTINGS_FILE_NAME: &str = "open_prs.toml";

#[derive(Debug)]
pub enum SettingsError {
    /// None of the candidate paths holds a settings file
    NotFound { searched: Vec<PathBuf> },
    /// A required key (`usernames` or `repos`) is absent
    MissingKey(&'static str),
    Read { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::NotFound { searched } => {
                let paths: Vec<String> = searched.iter().map(|p| p.display().to_string()).collect();
                write!(
                    f,
                    "Could not find settings file in any of these locations: {}",
                    paths.join(", ")
                )
            }
            SettingsError::MissingKey(key) => write!(
                f,
                "{} definition missing in settings file: {} = {}",
                key,
                key,
                example_value(key)
            ),
            SettingsError::Read { path, source } => {
                write!(f, "Failed to read settings file {}: {}", path.display(), source)
            }
            SettingsError::Parse { path, source } => {
                write!(f, "Invalid settings file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Read { source, .. } => Some(source),
            SettingsError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn example_value(key: &str) -> &'static str {
    match key {
        "usernames" => r#"["bob", "alice"]"#,
        _ => r#"["foo/prj", "bar/prj"]"#,
    }
}

/// Candidate settings paths, in search order.
///
/// Later entries override earlier ones. Home-relative entries are skipped
/// when the home directory cannot be determined.
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from(".").join(format!(".{}", SETTINGS_FILE_NAME)),
        PathBuf::from(".").join(SETTINGS_FILE_NAME),
    ];

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(format!(".{}", SETTINGS_FILE_NAME)));
        paths.push(home.join(".config").join(SETTINGS_FILE_NAME));
    }

    paths.push(PathBuf::from("/etc").join(SETTINGS_FILE_NAME));
    paths
}

/// Regular file check that does not follow symlinks
fn is_plain_file(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_file())
        .unwrap_or(false)
}

/// Return the last candidate that is an existing regular file.
pub fn find_settings_file(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .inspect(|path| debug!("Checking settings candidate {}", path.display()))
        .filter(|path| is_plain_file(path))
        .last()
        .cloned()
}

/// Validate a parsed settings document
pub fn validate(raw: RawSettings) -> Result<Settings, SettingsError> {
    let usernames = raw.usernames.ok_or(SettingsError::MissingKey("usernames"))?;
    let repos = raw.repos.ok_or(SettingsError::MissingKey("repos"))?;

    let github_token = raw
        .github_token
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty());

    Ok(Settings {
        usernames,
        repos,
        github_token,
        stale_after_days: raw.stale_after_days.unwrap_or(DEFAULT_STALE_AFTER_DAYS),
        github_api_url: raw
            .github_api_url
            .unwrap_or_else(|| GITHUB_API_URL.to_string()),
    })
}

/// Parse settings from TOML text. `path` is only used for error messages.
pub fn parse_settings(content: &str, path: &Path) -> Result<Settings, SettingsError> {
    let table = parse_table(content, path)?;
    into_settings(table, path)
}

fn parse_table(content: &str, path: &Path) -> Result<toml::Table, SettingsError> {
    toml::from_str(content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn into_settings(table: toml::Table, path: &Path) -> Result<Settings, SettingsError> {
    let raw: RawSettings =
        toml::Value::Table(table)
            .try_into::<RawSettings>()
            .map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
    validate(raw)
}

/// Load settings from the winning file among `candidates`
pub fn load_settings_from(candidates: &[PathBuf]) -> Result<Settings, SettingsError> {
    let path = find_settings_file(candidates).ok_or_else(|| SettingsError::NotFound {
        searched: candidates.to_vec(),
    })?;

    debug!("Using settings file {}", path.display());

    let content = fs::read_to_string(&path).map_err(|source| SettingsError::Read {
        path: path.clone(),
        source,
    })?;

    // A file without any keys counts as no settings file at all
    let table = parse_table(&content, &path)?;
    if table.is_empty() {
        return Err(SettingsError::NotFound {
            searched: candidates.to_vec(),
        });
    }

    into_settings(table, &path)
}

/// Load settings from the standard search locations
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(&candidate_paths())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    const VALID: &str = r#"
usernames = ["alice", "bob"]
repos = ["org/repo1", "org/repo2"]
"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_candidate_paths_order() {
        let paths = candidate_paths();
        assert_eq!(paths.first().unwrap(), &PathBuf::from("./.open_prs.toml"));
        assert_eq!(paths.get(1).unwrap(), &PathBuf::from("./open_prs.toml"));
        assert_eq!(paths.last().unwrap(), &PathBuf::from("/etc/open_prs.toml"));
    }

    #[test]
    fn test_parse_full_settings() {
        let content = r#"
usernames = ["alice"]
repos = ["org/repo1"]
github_token = "secret"
stale_after_days = 7
github_api_url = "https://github.example.com/api"
"#;
        let settings = parse_settings(content, Path::new("test.toml")).unwrap();
        assert_eq!(settings.usernames, vec!["alice"]);
        assert_eq!(settings.repos, vec!["org/repo1"]);
        assert_eq!(settings.github_token.as_deref(), Some("secret"));
        assert_eq!(settings.stale_after_days, 7);
        assert_eq!(settings.github_api_url, "https://github.example.com/api");
    }

    #[test]
    fn test_parse_defaults() {
        let settings = parse_settings(VALID, Path::new("test.toml")).unwrap();
        assert!(settings.github_token.is_none());
        assert_eq!(settings.stale_after_days, DEFAULT_STALE_AFTER_DAYS);
        assert_eq!(settings.github_api_url, GITHUB_API_URL);
    }

    #[test]
    fn test_blank_token_is_unset() {
        let content = r#"
usernames = ["alice"]
repos = ["org/repo1"]
github_token = "   "
"#;
        let settings = parse_settings(content, Path::new("test.toml")).unwrap();
        assert!(settings.github_token.is_none());
    }

    #[test]
    fn test_missing_repos() {
        let content = r#"usernames = ["alice"]"#;
        let err = parse_settings(content, Path::new("test.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::MissingKey("repos")));
        assert!(err.to_string().contains(r#"repos = ["foo/prj", "bar/prj"]"#));
    }

    #[test]
    fn test_missing_usernames_checked_first() {
        let err = parse_settings("", Path::new("test.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::MissingKey("usernames")));
        assert!(err.to_string().contains(r#"usernames = ["bob", "alice"]"#));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let content = r#"
usernames = "alice"
repos = ["org/repo1"]
"#;
        let err = parse_settings(content, Path::new("test.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn test_not_found_lists_searched_paths() {
        let dir = TempDir::new("open-prs").unwrap();
        let candidates = vec![dir.path().join("a.toml"), dir.path().join("b.toml")];

        let err = load_settings_from(&candidates).unwrap_err();
        match &err {
            SettingsError::NotFound { searched } => assert_eq!(searched, &candidates),
            other => panic!("unexpected error: {}", other),
        }
        let message = err.to_string();
        assert!(message.contains("a.toml"));
        assert!(message.contains("b.toml"));
    }

    #[test]
    fn test_last_existing_candidate_wins() {
        let dir = TempDir::new("open-prs").unwrap();
        let first = write(&dir, "first.toml", "usernames = [\"first\"]\nrepos = []\n");
        let missing = dir.path().join("missing.toml");
        let last = write(&dir, "last.toml", "usernames = [\"last\"]\nrepos = []\n");

        let candidates = vec![first, last.clone(), missing];
        assert_eq!(find_settings_file(&candidates), Some(last));

        let settings = load_settings_from(&candidates).unwrap();
        assert_eq!(settings.usernames, vec!["last"]);
    }

    #[test]
    fn test_empty_winning_file_is_not_found() {
        let dir = TempDir::new("open-prs").unwrap();
        let full = write(&dir, "full.toml", VALID);
        let empty = write(&dir, "empty.toml", "# nothing configured yet\n");

        let err = load_settings_from(&[full, empty]).unwrap_err();
        assert!(matches!(err, SettingsError::NotFound { .. }));
    }

    #[test]
    fn test_directory_is_skipped() {
        let dir = TempDir::new("open-prs").unwrap();
        let file = write(&dir, "open_prs.toml", VALID);
        let subdir = dir.path().join("nested.toml");
        fs::create_dir(&subdir).unwrap();

        assert_eq!(find_settings_file(&[file.clone(), subdir]), Some(file));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_is_skipped() {
        let dir = TempDir::new("open-prs").unwrap();
        let file = write(&dir, "open_prs.toml", VALID);
        let link = dir.path().join("link.toml");
        std::os::unix::fs::symlink(&file, &link).unwrap();

        assert_eq!(find_settings_file(&[file.clone(), link.clone()]), Some(file));
        assert_eq!(find_settings_file(&[link]), None);
    }
}
