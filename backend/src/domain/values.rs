//! Validated identifier and name primitives shared by the record types.

use std::fmt;

/// Validation failures raised by identifier and name constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueValidationError {
    /// Identifier was not a positive integer.
    InvalidId,
    /// Name was empty once trimmed.
    EmptyName,
    /// Name exceeded the allowed number of characters.
    NameTooLong { max: usize },
}

impl fmt::Display for ValueValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "identifier must be a positive integer"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
        }
    }
}

impl std::error::Error for ValueValidationError {}

/// Define a store-assigned, positive integer identifier.
macro_rules! define_record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i32);

        impl $name {
            /// Validate a raw identifier.
            pub fn new(raw: i32) -> Result<Self, $crate::domain::ValueValidationError> {
                if raw > 0 {
                    Ok(Self(raw))
                } else {
                    Err($crate::domain::ValueValidationError::InvalidId)
                }
            }

            /// Raw integer value.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::ValueValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| $crate::domain::ValueValidationError::InvalidId)?;
                Self::new(raw)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = $crate::domain::ValueValidationError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

/// Define a bounded, non-blank display name.
macro_rules! define_record_name {
    ($(#[$meta:meta])* $name:ident, max = $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            /// Maximum number of characters accepted.
            pub const MAX_CHARS: usize = $max;

            /// Validate and construct a name.
            pub fn new(raw: impl Into<String>) -> Result<Self, $crate::domain::ValueValidationError> {
                let raw = raw.into();
                if raw.trim().is_empty() {
                    return Err($crate::domain::ValueValidationError::EmptyName);
                }
                if raw.chars().count() > Self::MAX_CHARS {
                    return Err($crate::domain::ValueValidationError::NameTooLong {
                        max: Self::MAX_CHARS,
                    });
                }
                Ok(Self(raw))
            }

            /// Borrow the name.
            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

pub(crate) use define_record_id;
pub(crate) use define_record_name;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::domain::{ProjectId, ProjectName, UserName, ValueValidationError};

    #[rstest]
    #[case("7", Ok(7))]
    #[case(" 12 ", Ok(12))]
    #[case("0", Err(ValueValidationError::InvalidId))]
    #[case("-3", Err(ValueValidationError::InvalidId))]
    #[case("abc", Err(ValueValidationError::InvalidId))]
    #[case("", Err(ValueValidationError::InvalidId))]
    fn ids_parse_positive_integers(
        #[case] raw: &str,
        #[case] expected: Result<i32, ValueValidationError>,
    ) {
        let parsed = raw.parse::<ProjectId>().map(ProjectId::get);
        assert_eq!(parsed, expected);
    }

    #[rstest]
    fn names_reject_blank_input() {
        assert_eq!(UserName::new("   "), Err(ValueValidationError::EmptyName));
    }

    #[rstest]
    fn names_enforce_character_limit() {
        let at_limit = "é".repeat(ProjectName::MAX_CHARS);
        assert!(ProjectName::new(at_limit).is_ok());

        let over = "x".repeat(ProjectName::MAX_CHARS + 1);
        assert_eq!(
            ProjectName::new(over),
            Err(ValueValidationError::NameTooLong {
                max: ProjectName::MAX_CHARS
            })
        );
    }
}
