//! Strongly-typed identifier value objects.
//!
//! All entities use store-assigned integer surrogate keys. The newtypes keep
//! an album id from being passed where a user id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! serial_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wraps a raw store key.
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Returns the raw store key.
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }
    };
}

serial_id!(
    /// Identifier of an album in the catalog.
    AlbumId
);

serial_id!(
    /// Identifier of a user account.
    UserId
);

serial_id!(
    /// Identifier of a contact message.
    ContactId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn album_id_parses_from_path_segment() {
        let id: AlbumId = "42".parse().unwrap();
        assert_eq!(id.as_i32(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn id_rejects_non_numeric_input() {
        assert!("abc".parse::<UserId>().is_err());
        assert!("".parse::<ContactId>().is_err());
        assert!("1.5".parse::<AlbumId>().is_err());
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&AlbumId::new(7)).unwrap();
        assert_eq!(json, "7");

        let id: UserId = serde_json::from_str("12").unwrap();
        assert_eq!(id, UserId::new(12));
    }

    #[test]
    fn ids_order_by_raw_value() {
        assert!(AlbumId::new(1) < AlbumId::new(2));
    }
}
