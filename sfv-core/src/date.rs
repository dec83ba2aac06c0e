use crate::{Error, Integer};
use std::convert::TryFrom;
use std::fmt;

/// A structured field value [date], an RFC 9651 extension.
///
/// Wire form is `@` followed by a signed integer of seconds since the Unix
/// epoch, sharing `Integer`'s range.
///
/// Gated behind the `sf-date-item` feature; parsing and serialization reject
/// `@...` wire forms unless the feature is enabled, per the forward-compatible
/// treatment of this extension.
///
/// [date]: <https://httpwg.org/specs/rfc9651.html#date>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(Integer);

impl Date {
    /// Creates a `Date` from seconds since the Unix epoch.
    pub fn from_unix_seconds(seconds: i64) -> Result<Self, Error> {
        Integer::try_from(seconds)
            .map(Date)
            .map_err(|_| Error::out_of_range())
    }

    /// Returns the number of seconds since the Unix epoch.
    pub fn unix_seconds(&self) -> i64 {
        i64::from(self.0)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let date = Date::from_unix_seconds(1_659_578_233).unwrap();
        assert_eq!(date.to_string(), "@1659578233");
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Date::from_unix_seconds(2_000_000_000_000_000).is_err());
    }
}
