use thiserror::Error;

/// Errors reported by the Life engine.
/// Reads never fail; only construction, writes and seeding can.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LifeError {
    #[error("grid size must be positive, got {size}")]
    InvalidSize { size: i32 },
    #[error("a {size}x{size} grid does not fit in memory")]
    GridTooLarge { size: i32 },
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: i32, col: i32, size: usize },
    #[error("unknown seed pattern \"{0}\"")]
    UnknownPattern(String),
    #[error("random density {0} must be between 0.0 and 1.0")]
    InvalidDensity(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = LifeError::OutOfBounds { row: -1, col: 20, size: 20 };
        assert_eq!(err.to_string(), "cell (-1, 20) is outside the 20x20 grid");

        let err = LifeError::UnknownPattern("glider gun".into());
        assert_eq!(err.to_string(), "unknown seed pattern \"glider gun\"");
    }
}
