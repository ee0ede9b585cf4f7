//! Binary VDF codec and Steam shortcut helpers.

/// Steam non-Steam-game shortcut records and identifiers.
pub mod shortcut;
/// Binary VDF value model, decoder, and encoder.
pub mod vdf;
