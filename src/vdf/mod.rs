//! Binary VDF (Valve binary KeyValues) codec.
//!
//! A stream is a sequence of fields, each a tag byte, a NUL-terminated UTF-8
//! key and a tag-specific payload. Tables nest and are closed by a single
//! terminator byte; which terminator (`0x08` or `0x0B`) is used is a
//! stream-wide choice that encoder and decoder must agree on.
//!
//! | Tag  | Kind       | Payload |
//! |------|------------|---------|
//! | `00` | table      | children, then terminator |
//! | `01` | text       | UTF-8, `00` terminated |
//! | `02` | int32      | 4 bytes LE |
//! | `03` | float32    | 4 bytes LE IEEE-754 |
//! | `04` | pointer    | 4 bytes LE |
//! | `05` | wide text  | `FF FE`, UTF-16LE, aligned `00 00` terminated |
//! | `06` | color      | 4 bytes LE |
//! | `07` | uint64     | 8 bytes LE |
//! | `0A` | int64      | 8 bytes LE |

mod decode;
mod encode;
mod error;
mod reader;
mod value;
mod wire;

/// Decoding entry points and options.
pub use decode::{DecodeOptions, decode, decode_bytes};
/// Encoding entry points and options.
pub use encode::{EncodeOptions, encode, encode_to_vec};
/// Error and result aliases.
pub use error::{ErrorKind, Result, VdfError};
/// Value model.
pub use value::{Kind, Table, Value, WideString};
/// Wire tag and terminator constants.
pub use wire::{Tag, Terminator};
