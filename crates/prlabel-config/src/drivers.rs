use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Invalid driver kind: {kind}")]
    InvalidDriverKind { kind: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ApiDriver {
    Null,
    #[default]
    GitHub,
}

impl FromStr for ApiDriver {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "null" => Ok(Self::Null),
            "github" => Ok(Self::GitHub),
            _ => Err(DriverError::InvalidDriverKind { kind: s.into() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_api_driver() {
        assert_eq!(ApiDriver::from_str("GitHub").unwrap(), ApiDriver::GitHub);
        assert_eq!(ApiDriver::from_str("null").unwrap(), ApiDriver::Null);
        assert!(ApiDriver::from_str("gitlab").is_err());
    }
}
