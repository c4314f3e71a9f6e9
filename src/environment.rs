use crate::consts::cli_consts;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the deployments of the roster API the browser can read from.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// The public class roster API.
    #[default]
    Production,
    /// A copy of the API running on this machine.
    Local,
}

impl Environment {
    /// Returns the roster endpoint associated with the environment.
    pub fn roster_url(&self) -> String {
        match self {
            Environment::Production => cli_consts::DEFAULT_ROSTER_URL.to_string(),
            Environment::Local => cli_consts::LOCAL_ROSTER_URL.to_string(),
        }
    }

    /// Returns the origin that relative media paths are resolved against.
    pub fn media_origin(&self) -> String {
        match self {
            Environment::Production => cli_consts::DEFAULT_MEDIA_ORIGIN.to_string(),
            Environment::Local => cli_consts::LOCAL_MEDIA_ORIGIN.to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "local" => Ok(Environment::Local),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "Production"),
            Environment::Local => write!(f, "Local"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.roster_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment_names() {
        assert_eq!("production".parse(), Ok(Environment::Production));
        assert_eq!("PROD".parse(), Ok(Environment::Production));
        assert_eq!(" local ".parse(), Ok(Environment::Local));
        assert_eq!("staging".parse::<Environment>(), Err(()));
    }

    #[test]
    fn test_default_is_production() {
        let env = Environment::default();
        assert_eq!(env.roster_url(), cli_consts::DEFAULT_ROSTER_URL);
        assert_eq!(env.media_origin(), "https://dvonb.xyz");
    }
}
