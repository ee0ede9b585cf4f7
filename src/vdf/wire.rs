/// Type tag byte introducing each field on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
	/// Nested table; no payload, children follow.
	TableOpen = 0x00,
	/// Null-terminated UTF-8 string.
	Text = 0x01,
	/// 4-byte signed integer.
	Int32 = 0x02,
	/// 4-byte IEEE-754 float.
	Float32 = 0x03,
	/// 4-byte signed integer tagged as a pointer.
	Pointer = 0x04,
	/// UTF-16LE string terminated by an aligned `00 00` unit.
	WideText = 0x05,
	/// 4-byte signed integer tagged as a color.
	Color = 0x06,
	/// 8-byte unsigned integer.
	UInt64 = 0x07,
	/// Standard table terminator.
	End = 0x08,
	/// 8-byte signed integer.
	Int64 = 0x0A,
	/// Alternate table terminator.
	EndAlt = 0x0B,
}

impl Tag {
	/// Map a raw byte to a tag.
	pub fn from_byte(byte: u8) -> Option<Self> {
		Some(match byte {
			0x00 => Self::TableOpen,
			0x01 => Self::Text,
			0x02 => Self::Int32,
			0x03 => Self::Float32,
			0x04 => Self::Pointer,
			0x05 => Self::WideText,
			0x06 => Self::Color,
			0x07 => Self::UInt64,
			0x08 => Self::End,
			0x0A => Self::Int64,
			0x0B => Self::EndAlt,
			_ => return None,
		})
	}

	/// Raw byte value.
	pub fn byte(self) -> u8 {
		self as u8
	}

	/// Whether this tag is one of the two terminator variants.
	pub fn is_terminator(self) -> bool {
		matches!(self, Self::End | Self::EndAlt)
	}
}

/// Terminator convention shared by encoder and decoder for one stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terminator {
	/// `0x08`, used by most files.
	#[default]
	Standard,
	/// `0x0B`.
	Alternate,
}

impl Terminator {
	/// Select the alternate terminator when `alternate` is set.
	pub fn from_alternate(alternate: bool) -> Self {
		if alternate { Self::Alternate } else { Self::Standard }
	}

	/// Tag written and recognized as the terminator.
	pub fn tag(self) -> Tag {
		match self {
			Self::Standard => Tag::End,
			Self::Alternate => Tag::EndAlt,
		}
	}

	/// Raw terminator byte.
	pub fn byte(self) -> u8 {
		self.tag().byte()
	}

	/// Render terminator mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Standard => "standard",
			Self::Alternate => "alternate",
		}
	}
}
