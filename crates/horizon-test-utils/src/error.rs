use std::fmt;
use thiserror::Error;

/// The kind of container whose size was checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// An ordered, indexable sequence.
    List,
    /// An order-irrelevant grouping queried by membership.
    Collection,
    /// A key to value association.
    Map,
    /// A fixed-length array.
    Array,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Collection => write!(f, "collection"),
            Self::Map => write!(f, "map"),
            Self::Array => write!(f, "array"),
        }
    }
}

/// Error returned by the `check_*` helpers when an assertion does not hold.
///
/// Values are stored pre-rendered (see [`crate::config::AssertConfig`]) so the
/// error stays independent of the element types being compared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionError {
    /// The sequence ran out before every expected element was seen
    #[error("the iterator contains only {consumed} elements but {expected} were expected")]
    SequenceExhausted { consumed: usize, expected: usize },

    /// A positional comparison failed
    #[error("element at index {index} does not match: expected {expected} but was {actual}")]
    ElementMismatch {
        index: usize,
        expected: String,
        actual: String,
    },

    /// The sequence still had elements after the expected ones
    #[error("the iterator contains more than the {expected} expected elements, next element: {next}")]
    UnexpectedElement { expected: usize, next: String },

    /// The container reported a different size
    #[error("the size of the {kind} does not match the expected one: expected {expected} but was {actual}")]
    SizeMismatch {
        kind: ContainerKind,
        expected: usize,
        actual: usize,
    },

    /// A collection membership test failed
    #[error("the collection: {collection} does not contain the element: {element}")]
    MissingElement { collection: String, element: String },

    /// A map lookup found no entry
    #[error("the map {map} does not contain the key: {key}")]
    MissingKey { map: String, key: String },

    /// A map entry holds another value
    #[error("the value of the key {key} does not match: expected {expected} but was {actual}")]
    ValueMismatch {
        key: String,
        expected: String,
        actual: String,
    },

    /// The error message lacks the expected text
    #[error("the message was expected to contain '{expected}' but does not. Message: {message}")]
    MessageMismatch { expected: String, message: String },

    /// There was no message to inspect at all
    #[error("the message was expected to contain '{expected}' but there was no error message{detail}")]
    MissingMessage { expected: String, detail: String },
}

impl AssertionError {
    /// Short machine-friendly name of the failure, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SequenceExhausted { .. } => "sequence_exhausted",
            Self::ElementMismatch { .. } => "element_mismatch",
            Self::UnexpectedElement { .. } => "unexpected_element",
            Self::SizeMismatch { .. } => "size_mismatch",
            Self::MissingElement { .. } => "missing_element",
            Self::MissingKey { .. } => "missing_key",
            Self::ValueMismatch { .. } => "value_mismatch",
            Self::MessageMismatch { .. } => "message_mismatch",
            Self::MissingMessage { .. } => "missing_message",
        }
    }
}
