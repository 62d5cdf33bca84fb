//! Newtype ids for type-safe entity references.
//!
//! Ids are positive integers assigned by the owning store. Wrapping them per
//! entity type keeps a `ProductId` from ever being handed to a user lookup.
//! Parsing from a route-style string rejects anything that is not a positive
//! integer, so malformed identifiers never reach a store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a new id from a raw value.
            #[must_use]
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the underlying value.
            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().parse::<u32>() {
                    Ok(n) if n > 0 => Ok(Self(n)),
                    _ => Err(AppError::InvalidId(s.to_string())),
                }
            }
        }
    };
}

define_id!(ProductId);
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_integers() {
        assert_eq!("7".parse::<ProductId>().unwrap(), ProductId::new(7));
        assert_eq!(" 12 ".parse::<UserId>().unwrap(), UserId::new(12));
    }

    #[test]
    fn rejects_zero_negative_and_garbage() {
        for raw in ["0", "-3", "abc", "", "1.5"] {
            let parsed = raw.parse::<ProductId>();
            assert_eq!(parsed, Err(AppError::InvalidId(raw.to_string())));
        }
    }

    #[test]
    fn displays_the_raw_value() {
        assert_eq!(UserId::new(42).to_string(), "42");
    }
}
