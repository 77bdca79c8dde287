use std::io::{
	Read,
	Result
};

use ultraviolet::vec::{
	Vec2,
	Vec3
};

pub trait ReadBinExt: Read {
	/// Reads a fixed-width, null-padded string field.
	/// The returned string stops at the first null byte.
	#[inline]
	fn read_cstr_fixed(&mut self, width: usize) -> Result<String> {
		let mut raw = vec![0; width];
		self.read_exact(&mut raw)?;

		let len = raw.iter().position(|&b| b == 0).unwrap_or(width);
		Ok(raw[..len].iter().map(|&b| b as char).collect())
	}

	/// Reads a little endian 2D vector
	#[inline]
	fn read_vec2_le(&mut self) -> Result<Vec2> {
		let mut x = [0; 4];
		let mut y = x;

		self.read_exact(&mut x)?;
		self.read_exact(&mut y)?;

		Ok(Vec2::new(f32::from_le_bytes(x), f32::from_le_bytes(y)))
	}

	/// Reads a little endian 3D vector
	#[inline]
	fn read_vec3_le(&mut self) -> Result<Vec3> {
		let mut x = [0; 4];
		let mut y = x;
		let mut z = y;

		self.read_exact(&mut x)?;
		self.read_exact(&mut y)?;
		self.read_exact(&mut z)?;

		Ok(Vec3::new(f32::from_le_bytes(x), f32::from_le_bytes(y), f32::from_le_bytes(z)))
	}
}

impl<R> ReadBinExt for R
where
	R: Read + ?Sized,
{
}
