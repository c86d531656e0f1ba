use crate::TraineeError;

pub const DEFAULT_BASE_URL: &str = "https://traineeapp.azurewebsites.net";

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, TraineeError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, TraineeError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let base_url = match get("TRAINEE_API_BASE_URL") {
            Some(url) if url.trim().is_empty() => {
                return Err(TraineeError::Config("TRAINEE_API_BASE_URL is empty".into()));
            }
            Some(url) => url,
            None => DEFAULT_BASE_URL.into(),
        };
        Ok(Self { base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_defaults_base_url() {
        let cfg = Config::from_env_with(|_| None).expect("cfg");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn from_env_reads_override() {
        let get = |k: &str| match k {
            "TRAINEE_API_BASE_URL" => Some("http://localhost:8080".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.base_url, "http://localhost:8080");
    }

    #[test]
    fn from_env_rejects_empty_override() {
        let get = |k: &str| match k {
            "TRAINEE_API_BASE_URL" => Some("  ".into()),
            _ => None,
        };
        assert!(Config::from_env_with(get).is_err());
    }
}
