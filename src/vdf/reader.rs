use std::io::{ErrorKind as IoErrorKind, Read, Seek, SeekFrom};

use crate::vdf::{Result, VdfError};

/// Bytes requested per read while scanning for a string terminator.
pub const CHUNK_SIZE: usize = 64;

/// Byte-order mark written ahead of wide text.
pub const UTF16_BOM: u16 = 0xFEFF;

/// Position-tracking reader over a caller-owned seekable stream.
pub struct StreamReader<R> {
	inner: R,
	pos: u64,
}

impl<R: Read + Seek> StreamReader<R> {
	/// Wrap `inner`, starting at its current position.
	pub fn new(mut inner: R) -> Result<Self> {
		let pos = inner.stream_position().map_err(|source| VdfError::StreamNotSeekable { source })?;
		Ok(Self { inner, pos })
	}

	/// Absolute stream offset of the next unread byte.
	pub fn pos(&self) -> u64 {
		self.pos
	}

	/// Read one byte, or `None` at end of stream.
	pub fn read_byte(&mut self) -> Result<Option<u8>> {
		let mut byte = [0_u8; 1];
		match self.read_chunk(&mut byte)? {
			0 => Ok(None),
			_ => Ok(Some(byte[0])),
		}
	}

	/// Step back over the byte just read.
	pub fn unread_byte(&mut self) -> Result<()> {
		self.inner
			.seek(SeekFrom::Current(-1))
			.map_err(|source| VdfError::StreamNotSeekable { source })?;
		self.pos -= 1;
		Ok(())
	}

	/// Read a fixed-width little-endian payload.
	pub fn read_array<const N: usize>(&mut self, kind: &'static str) -> Result<[u8; N]> {
		let at = self.pos;
		let mut out = [0_u8; N];
		let mut got = 0;
		while got < N {
			let read = self.read_chunk(&mut out[got..])?;
			if read == 0 {
				return Err(VdfError::TruncatedValue { kind, at, need: N, got });
			}
			got += read;
		}
		Ok(out)
	}

	/// Read a signed 32-bit integer.
	pub fn read_i32_le(&mut self, kind: &'static str) -> Result<i32> {
		Ok(i32::from_le_bytes(self.read_array(kind)?))
	}

	/// Read a 32-bit float.
	pub fn read_f32_le(&mut self) -> Result<f32> {
		Ok(f32::from_le_bytes(self.read_array("float32")?))
	}

	/// Read an unsigned 64-bit integer.
	pub fn read_u64_le(&mut self) -> Result<u64> {
		Ok(u64::from_le_bytes(self.read_array("uint64")?))
	}

	/// Read a signed 64-bit integer.
	pub fn read_i64_le(&mut self) -> Result<i64> {
		Ok(i64::from_le_bytes(self.read_array("int64")?))
	}

	/// Read a NUL-terminated UTF-8 string, replacing invalid sequences.
	pub fn read_string(&mut self, what: &'static str) -> Result<String> {
		let raw = self.read_terminated(what, 1)?;
		Ok(String::from_utf8_lossy(&raw).into_owned())
	}

	/// Read a UTF-16LE string terminated by an aligned `00 00` unit.
	pub fn read_wide_string(&mut self) -> Result<Vec<u16>> {
		let raw = self.read_terminated("wide string", 2)?;
		let mut units: Vec<u16> = raw.chunks_exact(2).map(|pair| u16::from_le_bytes([pair[0], pair[1]])).collect();
		if units.first() == Some(&UTF16_BOM) {
			units.remove(0);
		}
		Ok(units)
	}

	/// Scan chunk by chunk for an all-zero unit of `unit` bytes.
	///
	/// On success the stream is left just past the terminator and the bytes
	/// before it are returned.
	fn read_terminated(&mut self, what: &'static str, unit: usize) -> Result<Vec<u8>> {
		let start = self.pos;
		let mut buf = Vec::with_capacity(CHUNK_SIZE);
		let mut scanned = 0;

		loop {
			let mut chunk = [0_u8; CHUNK_SIZE];
			let read = self.read_chunk(&mut chunk)?;
			if read == 0 {
				return Err(VdfError::UnterminatedString { what, at: start });
			}
			buf.extend_from_slice(&chunk[..read]);

			if let Some(end) = find_terminator(&buf, scanned, unit) {
				let consumed = end + unit;
				let overshoot = buf.len() - consumed;
				if overshoot > 0 {
					self.inner
						.seek(SeekFrom::Current(-(overshoot as i64)))
						.map_err(|source| VdfError::StreamNotSeekable { source })?;
				}
				self.pos = start + consumed as u64;
				buf.truncate(end);
				return Ok(buf);
			}

			scanned = buf.len() - buf.len() % unit;
		}
	}

	fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize> {
		loop {
			match self.inner.read(buf) {
				Ok(read) => {
					self.pos += read as u64;
					return Ok(read);
				}
				Err(err) if err.kind() == IoErrorKind::Interrupted => continue,
				Err(err) => return Err(err.into()),
			}
		}
	}
}

fn find_terminator(buf: &[u8], from: usize, unit: usize) -> Option<usize> {
	(from..)
		.step_by(unit)
		.take_while(|idx| idx + unit <= buf.len())
		.find(|idx| buf[*idx..*idx + unit].iter().all(|byte| *byte == 0))
}
