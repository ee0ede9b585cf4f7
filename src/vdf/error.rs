use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, VdfError>;

/// Coarse classification of [`VdfError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// The byte stream is not well-formed binary VDF.
	MalformedStream,
	/// A value cannot be stored or was not the expected kind.
	TypeMismatch,
	/// The stream lacks a capability the codec requires.
	UsagePrecondition,
	/// Underlying stream or serialization failure.
	Io,
}

/// Errors produced while decoding, encoding, and editing binary VDF data.
#[derive(Debug, Error)]
pub enum VdfError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Stream position could not be queried or changed.
	#[error("stream is not seekable: {source}")]
	StreamNotSeekable {
		/// Error returned by the failed seek.
		#[source]
		source: std::io::Error,
	},
	/// Tag byte is neither a value tag nor the configured terminator.
	#[error("unknown type tag 0x{tag:02x} at offset {at}")]
	UnknownTag {
		/// Offending tag byte.
		tag: u8,
		/// Stream offset of the tag byte.
		at: u64,
	},
	/// Key or string value ran into end of stream before its terminator.
	#[error("unterminated {what} starting at offset {at}")]
	UnterminatedString {
		/// Field being read (`key`, `string`, or `wide string`).
		what: &'static str,
		/// Stream offset where the field starts.
		at: u64,
	},
	/// End of stream reached with nested tables still open.
	#[error("unterminated structure at offset {at}: {open} table(s) still open")]
	UnterminatedTable {
		/// Stream offset of end of stream.
		at: u64,
		/// Number of open tables below the root.
		open: usize,
	},
	/// Numeric payload cut short by end of stream.
	#[error("truncated {kind} value at offset {at}: need {need} bytes, got {got}")]
	TruncatedValue {
		/// Kind label of the numeric field.
		kind: &'static str,
		/// Stream offset of the payload.
		at: u64,
		/// Payload width in bytes.
		need: usize,
		/// Bytes available before end of stream.
		got: usize,
	},
	/// Strict mode found bytes after the root terminator.
	#[error("trailing data after root table at offset {at}")]
	TrailingData {
		/// Stream offset of the first unread byte.
		at: u64,
	},
	/// Key already present in a table that refuses duplicates.
	#[error("duplicate key {key:?}")]
	DuplicateKey {
		/// Duplicated key.
		key: String,
	},
	/// Value under a key is not of the expected kind.
	#[error("type mismatch for {key:?}: expected {expected}, got {got}")]
	UnexpectedKind {
		/// Key holding the value.
		key: String,
		/// Expected kind label.
		expected: &'static str,
		/// Actual kind label.
		got: &'static str,
	},
	/// Key or string contains a NUL that the null-terminated encoding cannot carry.
	#[error("{what} under key {key:?} contains an interior NUL")]
	InteriorNul {
		/// Field that failed (`key`, `text`, or `wide text`).
		what: &'static str,
		/// Key of the offending entry.
		key: String,
	},
	/// Typed JSON entry does not describe a storable value.
	#[error("invalid entry {key:?}: {reason}")]
	InvalidEntry {
		/// Key of the offending entry.
		key: String,
		/// What was wrong with it.
		reason: String,
	},
	/// JSON input or output failed.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}

impl VdfError {
	/// Classify this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::UnknownTag { .. } | Self::UnterminatedString { .. } | Self::UnterminatedTable { .. } | Self::TruncatedValue { .. } | Self::TrailingData { .. } => {
				ErrorKind::MalformedStream
			}
			Self::DuplicateKey { .. } | Self::UnexpectedKind { .. } | Self::InteriorNul { .. } | Self::InvalidEntry { .. } => ErrorKind::TypeMismatch,
			Self::StreamNotSeekable { .. } => ErrorKind::UsagePrecondition,
			Self::Io(_) | Self::Json(_) => ErrorKind::Io,
		}
	}
}
