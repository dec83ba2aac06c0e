use std::borrow::Cow;
use std::fmt;

/// The distinct kinds of [`Error`] this crate can produce.
///
/// Matching on this lets a caller distinguish, say, a malformed key from a
/// grammar violation during parsing, rather than pattern-matching on a
/// display string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Kind {
    /// Grammar violation encountered while parsing a field value.
    Syntax,
    /// A constructor received a value outside a bare item's character set.
    InvalidCharacter,
    /// A numeric value fell outside the range RFC 8941 permits.
    OutOfRange,
    /// A parameter or dictionary key failed the key grammar.
    InvalidKey,
    /// Misuse of an API, such as inserting a parameterized item into
    /// [`Parameters`][crate::Parameters].
    InvalidArgument,
    /// A container index lookup fell outside the container's bounds.
    IndexOutOfRange,
    /// A map lookup found no entry for the given key.
    NotFound,
    /// An in-place-syntax facade attempted to mutate an immutable value.
    ///
    /// The core never produces this variant itself; it exists for
    /// adapters (see spec §7) that expose indexed-write syntax on top of
    /// the immutable containers.
    ForbiddenOperation,
    /// Serialization failed because a value's invariants had been
    /// bypassed through unsafe construction.
    Serialization,
}

impl Kind {
    fn default_message(self) -> &'static str {
        match self {
            Kind::Syntax => "invalid syntax",
            Kind::InvalidCharacter => "invalid character",
            Kind::OutOfRange => "out of range",
            Kind::InvalidKey => "invalid key",
            Kind::InvalidArgument => "invalid argument",
            Kind::IndexOutOfRange => "index out of range",
            Kind::NotFound => "not found",
            Kind::ForbiddenOperation => "forbidden operation on an immutable value",
            Kind::Serialization => "serialization error",
        }
    }
}

/// An error that can occur in this crate.
///
/// The most common type of error is a grammar violation during parsing
/// ([`Kind::Syntax`]), but the other variants of [`Kind`] can also occur,
/// for example when constructing a [`Key`][crate::Key] from a string that
/// doesn't match the key grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: Kind,
    msg: Cow<'static, str>,
    offset: Option<usize>,
}

impl Error {
    pub(crate) fn new(kind: Kind, msg: &'static str) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(msg),
            offset: None,
        }
    }

    pub(crate) fn with_offset(kind: Kind, msg: &'static str, offset: usize) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(msg),
            offset: Some(offset),
        }
    }

    pub(crate) fn custom(kind: Kind, msg: impl fmt::Display) -> Self {
        Self {
            kind,
            msg: Cow::Owned(msg.to_string()),
            offset: None,
        }
    }

    pub(crate) fn out_of_range() -> Self {
        Self::new(Kind::OutOfRange, Kind::OutOfRange.default_message())
    }

    pub(crate) fn invalid_character() -> Self {
        Self::new(Kind::InvalidCharacter, Kind::InvalidCharacter.default_message())
    }

    pub(crate) fn invalid_key(key: impl fmt::Display) -> Self {
        Self::custom(Kind::InvalidKey, format_args!("invalid key: {key}"))
    }

    pub(crate) fn invalid_argument(reason: &'static str) -> Self {
        Self::new(Kind::InvalidArgument, reason)
    }

    pub(crate) fn index_out_of_range(index: i64, len: usize) -> Self {
        Self::custom(
            Kind::IndexOutOfRange,
            format_args!("index {index} out of range for length {len}"),
        )
    }

    pub(crate) fn not_found(key: impl fmt::Display) -> Self {
        Self::custom(Kind::NotFound, format_args!("key not found: {key}"))
    }

    // Not constructed by the core itself today; kept so an in-place-syntax
    // adapter (see `Kind::ForbiddenOperation`'s doc) has a ready-made
    // constructor rather than reaching into `Error::new` directly.
    #[allow(dead_code)]
    pub(crate) fn forbidden_operation() -> Self {
        Self::new(Kind::ForbiddenOperation, Kind::ForbiddenOperation.default_message())
    }

    // Not reachable through the public API: every container validates its
    // contents at construction, so serialization can't currently fail. Kept
    // for the same reason as `forbidden_operation` above.
    #[allow(dead_code)]
    pub(crate) fn serialization(reason: &'static str) -> Self {
        Self::new(Kind::Serialization, reason)
    }

    /// The structured kind of this error, for matching without parsing
    /// [`Display`][fmt::Display] output.
    pub fn kind(&self) -> Kind {
        self.kind.clone()
    }

    /// The byte offset into the original input at which this error was
    /// detected, if the error occurred during parsing.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.offset {
            None => f.write_str(&self.msg),
            Some(offset) => write!(f, "{} at byte offset {}", self.msg, offset),
        }
    }
}

impl std::error::Error for Error {}
