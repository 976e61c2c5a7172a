use std::env;

use crate::error::DbInfraError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile - file-backed store
    Prod,
    /// Test database profile - in-memory unless overridden; enforces safety rules
    Test,
}

/// Builds a SQLite connection URL from environment variables based on profile
pub fn db_url(profile: DbProfile) -> Result<String, DbInfraError> {
    match profile {
        DbProfile::Prod => {
            let path =
                env::var("AIRPORTS_DB_PATH").unwrap_or_else(|_| "db/airports.db".to_string());
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbProfile::Test => match env::var("TEST_DB_PATH") {
            Ok(path) => {
                // Enforce safety: a file-backed test DB must end with "_test.db"
                if !path.ends_with("_test.db") {
                    return Err(DbInfraError::config(format!(
                        "Test profile requires database path to end with '_test.db', but got: '{path}'"
                    )));
                }
                Ok(format!("sqlite://{path}?mode=rwc"))
            }
            Err(_) => Ok("sqlite::memory:".to_string()),
        },
    }
}

/// True when the URL points at an in-memory SQLite database.
pub fn is_memory_url(url: &str) -> bool {
    url.starts_with("sqlite::memory:")
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::{db_url, is_memory_url, DbProfile};

    fn clear_test_env() {
        env::remove_var("AIRPORTS_DB_PATH");
        env::remove_var("TEST_DB_PATH");
    }

    #[test]
    #[serial]
    fn test_db_url_prod_default_path() {
        clear_test_env();
        let url = db_url(DbProfile::Prod).unwrap();
        assert_eq!(url, "sqlite://db/airports.db?mode=rwc");
    }

    #[test]
    #[serial]
    fn test_db_url_prod_custom_path() {
        clear_test_env();
        env::set_var("AIRPORTS_DB_PATH", "/var/lib/airports/airports.db");
        let url = db_url(DbProfile::Prod).unwrap();
        assert_eq!(url, "sqlite:///var/lib/airports/airports.db?mode=rwc");
        clear_test_env();
    }

    #[test]
    #[serial]
    fn test_db_url_test_defaults_to_memory() {
        clear_test_env();
        let url = db_url(DbProfile::Test).unwrap();
        assert_eq!(url, "sqlite::memory:");
        assert!(is_memory_url(&url));
    }

    #[test]
    #[serial]
    fn test_db_url_test_file_path() {
        clear_test_env();
        env::set_var("TEST_DB_PATH", "/tmp/airports_test.db");
        let url = db_url(DbProfile::Test).unwrap();
        assert_eq!(url, "sqlite:///tmp/airports_test.db?mode=rwc");
        assert!(!is_memory_url(&url));
        clear_test_env();
    }

    #[test]
    #[serial]
    fn test_db_url_test_invalid_path() {
        clear_test_env();
        env::set_var("TEST_DB_PATH", "/tmp/airports.db"); // Invalid: doesn't end with _test.db

        let result = db_url(DbProfile::Test);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("_test.db"));

        clear_test_env();
    }
}
