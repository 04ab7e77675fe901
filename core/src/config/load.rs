use super::types::{ENV_FORMAT, ENV_JSONFILE, ENV_JUNITFILE, ENV_TEST_DIRECTORY};

/// Defaults taken from the environment. Flags given on the command line win
/// over these; empty values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub format: Option<String>,
    pub json_file: Option<String>,
    pub junit_file: Option<String>,
    pub test_directory: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            format: non_empty(ENV_FORMAT),
            json_file: non_empty(ENV_JSONFILE),
            junit_file: non_empty(ENV_JUNITFILE),
            test_directory: non_empty(ENV_TEST_DIRECTORY),
        }
    }
}
