use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

/// Resolves the runtime environment from `ENV`, falling back on the build
/// profile when the variable is unset or unrecognized.
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match std::env::var("ENV") {
        Ok(v) => v.parse().unwrap_or(default_env),
        Err(_) => default_env,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_environments() {
        assert_eq!("development".parse(), Ok(Environment::Development));
        assert_eq!("Production".parse(), Ok(Environment::Production));
        assert!("staging".parse::<Environment>().is_err());
    }
}
