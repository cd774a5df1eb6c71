use scanseg_core::ScanSegError;
use std::fmt;
use std::str::FromStr;

/// Which partition of the dataset a producer walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Indices `[0, train_boundary)`.
    #[default]
    Train,
    /// Indices `[train_boundary, len)`.
    Test,
}

impl FromStr for Mode {
    type Err = ScanSegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("train") {
            Ok(Mode::Train)
        } else if s.eq_ignore_ascii_case("test") {
            Ok(Mode::Test)
        } else {
            Err(ScanSegError::Configuration(format!(
                "unknown mode '{}', expected 'train' or 'test'",
                s
            )))
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Train => write!(f, "train"),
            Mode::Test => write!(f, "test"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!("train".parse::<Mode>().unwrap(), Mode::Train);
        assert_eq!("Test".parse::<Mode>().unwrap(), Mode::Test);
        assert_eq!("TRAIN".parse::<Mode>().unwrap(), Mode::Train);
    }

    #[test]
    fn test_mode_parse_keeps_surrounding_whitespace() {
        for raw in [" train", "test ", " TRAIN "] {
            assert!(
                matches!(raw.parse::<Mode>(), Err(ScanSegError::Configuration(_))),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_mode_parse_unknown() {
        match "validation".parse::<Mode>() {
            Err(ScanSegError::Configuration(msg)) => assert!(msg.contains("validation")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_mode_display_roundtrip() {
        for mode in [Mode::Train, Mode::Test] {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_mode_default_is_train() {
        assert_eq!(Mode::default(), Mode::Train);
    }
}
