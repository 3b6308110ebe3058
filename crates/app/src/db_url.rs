use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidDbUrl {
    raw: String,
}

impl fmt::Display for InvalidDbUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid --db value: {}", self.raw)
    }
}

impl std::error::Error for InvalidDbUrl {}

/// Turn a bare path or `sqlite:` url into an absolute `sqlite://` url.
pub fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim();
    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn sqlite_file_path(db_url: &str) -> Result<&str, InvalidDbUrl> {
    let invalid = || InvalidDbUrl {
        raw: db_url.to_string(),
    };
    let path = db_url.strip_prefix("sqlite://").ok_or_else(invalid)?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(invalid());
    }
    Ok(path)
}

/// Create the database file and its parent directories if missing.
pub fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = Path::new(sqlite_file_path(db_url)?);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_and_full_urls_pass_through() {
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/q.sqlite3".into()),
            "sqlite:///tmp/q.sqlite3"
        );
    }

    #[test]
    fn bare_absolute_path_gets_scheme() {
        assert_eq!(
            normalize_sqlite_url("/var/lib/q.sqlite3".into()),
            "sqlite:///var/lib/q.sqlite3"
        );
        assert_eq!(
            normalize_sqlite_url("sqlite:/var/lib/q.sqlite3".into()),
            "sqlite:///var/lib/q.sqlite3"
        );
    }

    #[test]
    fn relative_path_is_made_absolute() {
        let url = normalize_sqlite_url("dev.sqlite3".into());
        let path = url.strip_prefix("sqlite://").unwrap();
        assert!(Path::new(path).is_absolute());
        assert!(path.ends_with("dev.sqlite3"));
    }

    #[test]
    fn file_path_drops_query_and_rejects_empty() {
        assert_eq!(sqlite_file_path("sqlite:///tmp/q.db?mode=rwc"), Ok("/tmp/q.db"));
        assert!(sqlite_file_path("sqlite://").is_err());
        assert!(sqlite_file_path("postgres://x").is_err());
    }

    #[test]
    fn prepare_creates_missing_file() {
        let dir = std::env::temp_dir().join(format!("quantum-app-{}", std::process::id()));
        let file = dir.join("nested").join("q.sqlite3");
        let url = format!("sqlite://{}", file.display());
        prepare_sqlite_file(&url).unwrap();
        assert!(file.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
