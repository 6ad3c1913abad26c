use thiserror::Error;

/// An environment variable required by the application is not set.
#[derive(Debug, Error)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// Reads an environment variable, returning a structured error if it's missing.
///
/// This is a thin wrapper around `std::env::var` that provides a more
/// ergonomic and specific error type for missing variables.
pub fn get_env_var(name: &str) -> Result<String, MissingEnvVarError> {
    std::env::var(name).map_err(|_| MissingEnvVarError(name.to_string()))
}

/// Reads an environment variable, falling back to `default` when it is unset.
///
/// Intended for optional overrides (endpoint URLs, tuning knobs) where a
/// missing variable is not an error.
pub fn get_env_var_or(name: &str, default: &str) -> String {
    get_env_var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_is_a_structured_error() {
        let err = get_env_var("SHARED_UTILS_TEST_UNSET_VAR").unwrap_err();
        assert_eq!(err.0, "SHARED_UTILS_TEST_UNSET_VAR");
    }

    #[test]
    fn missing_var_falls_back_to_default() {
        let value = get_env_var_or("SHARED_UTILS_TEST_UNSET_VAR", "fallback");
        assert_eq!(value, "fallback");
    }
}
