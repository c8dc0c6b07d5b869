//! Error codes for generator diagnostics.
//!
//! Format: E#### where the first digit indicates the phase:
//! - E1xxx: Operation resolution and formatting
//! - E2xxx: Driver input and selection

use std::fmt;

/// Error codes for all generator diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Required parameter follows an optional one
    E1001,
    /// Handler argument type has neither a declaration nor a primitive signature
    E1002,
    /// Handler type has no declaration or no dispatch operation
    E1003,
    /// Module annotation is not in the module alias table
    E1004,
    /// A requested interface is not declared
    E2001,
}

impl ErrorCode {
    /// All codes, for lookup and exhaustiveness checks.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E2001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E2001 => "E2001",
        }
    }

    /// One-line description used by `--explain`-style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "optional parameters cannot precede required ones",
            ErrorCode::E1002 => "handler argument type cannot be bound",
            ErrorCode::E1003 => "handler type has no dispatch operation",
            ErrorCode::E1004 => "unmapped module annotation",
            ErrorCode::E2001 => "requested interface is not declared",
        }
    }

    /// Check if this is a driver error (E2xxx range).
    pub fn is_driver_error(&self) -> bool {
        matches!(self, ErrorCode::E2001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
