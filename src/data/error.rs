use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// PlotError – every way loading or extraction can fail
// ---------------------------------------------------------------------------

/// Fatal errors of the load → extract pipeline. None of them is recoverable:
/// the binaries report the error and exit before anything is drawn.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The data file is missing, unreadable or not valid UTF-8.
    #[error("cannot read data file {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header or data row is too short for the selected mode.
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },

    /// A token that should be a number is not.
    #[error("line {line}, column {column}: '{token}' is not a number")]
    NumericConversion {
        line: usize,
        column: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    /// A ratio column divides by zero.
    #[error("line {line}, column {column}: ratio denominator is zero")]
    ZeroDenominator { line: usize, column: usize },
}

impl PlotError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        PlotError::Format {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_location() {
        let err = PlotError::format(2, "header has 3 columns, 6 required");
        assert_eq!(err.to_string(), "line 2: header has 3 columns, 6 required");

        let source = "abc".parse::<f64>().unwrap_err();
        let err = PlotError::NumericConversion {
            line: 7,
            column: 4,
            token: "abc".to_string(),
            source,
        };
        assert_eq!(err.to_string(), "line 7, column 4: 'abc' is not a number");

        let err = PlotError::ZeroDenominator { line: 5, column: 2 };
        assert_eq!(err.to_string(), "line 5, column 2: ratio denominator is zero");
    }
}
