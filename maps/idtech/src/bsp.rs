use bitflags::bitflags;

use byteorder::{
	BE,
	LE,
	ReadBytesExt
};

use std::{
	fmt::{
		self,
		Write as _
	},
	io,
	marker::PhantomData,
	ops::{
		Add,
		Mul
	}
};

use thiserror::Error;

use ultraviolet::vec::{
	Vec2,
	Vec3
};

use rmk_core::{
	io_ext::ReadBinExt,
	tag4
};

pub const MAGIC: u32 = tag4!(b"IBSP");
pub const VERSION: i32 = 46;

/// Magic + version + 17 directory entries.
pub const HEADER_SIZE: usize = 8 + LUMP_COUNT * 8;
pub const LUMP_COUNT: usize = 17;
pub const NAME_WIDTH: usize = 64;
pub const LIGHTMAP_DIM: usize = 128;
pub const LIGHTMAP_BYTES: usize = LIGHTMAP_DIM * LIGHTMAP_DIM * 3;

bitflags! {
	pub struct SurfaceFlags: u32 {
		const NODAMAGE = 0x1;
		const SLICK = 0x2;
		const SKY = 0x4;
		const LADDER = 0x8;
		const NOIMPACT = 0x10;
		const NOMARKS = 0x20;
		const FLESH = 0x40;
		const NODRAW = 0x80;
		const HINT = 0x100;
		const SKIP = 0x200;
		const NOLIGHTMAP = 0x400;
		const POINTLIGHT = 0x800;
		const METALSTEPS = 0x1000;
		const NOSTEPS = 0x2000;
		const NONSOLID = 0x4000;
		const LIGHTFILTER = 0x8000;
		const ALPHASHADOW = 0x10000;
		const NODLIGHT = 0x20000;
		const DUST = 0x40000;
	}

	pub struct ContentFlags: u32 {
		const SOLID = 0x1;
		const LAVA = 0x8;
		const SLIME = 0x10;
		const WATER = 0x20;
		const FOG = 0x40;
		const AREAPORTAL = 0x8000;
		const PLAYERCLIP = 0x10000;
		const MONSTERCLIP = 0x20000;
		const TELEPORTER = 0x40000;
		const JUMPPAD = 0x80000;
		const CLUSTERPORTAL = 0x100000;
		const DONOTENTER = 0x200000;
		const BOTCLIP = 0x400000;
		const MOVER = 0x800000;
		const ORIGIN = 0x1000000;
		const BODY = 0x2000000;
		const CORPSE = 0x4000000;
		const DETAIL = 0x8000000;
		const STRUCTURAL = 0x10000000;
		const TRANSLUCENT = 0x20000000;
		const TRIGGER = 0x40000000;
		const NODROP = 0x80000000;
	}
}

/// Directory slots of an IBSP file, in on-disk order.
///
/// Only textures, vertices, meshverts, effects, faces and lightmaps are
/// decoded here; the remaining slots stay addressable through
/// [`Header::entry`] for collision/visibility consumers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Lump {
	Entities = 0,
	Textures,
	Planes,
	Nodes,
	Leaves,
	LeafFaces,
	LeafBrushes,
	Models,
	Brushes,
	BrushSides,
	Vertices,
	MeshVerts,
	Effects,
	Faces,
	Lightmaps,
	LightVols,
	VisData,
}

impl Lump {
	pub const ALL: [Lump; LUMP_COUNT] = [
		Lump::Entities,
		Lump::Textures,
		Lump::Planes,
		Lump::Nodes,
		Lump::Leaves,
		Lump::LeafFaces,
		Lump::LeafBrushes,
		Lump::Models,
		Lump::Brushes,
		Lump::BrushSides,
		Lump::Vertices,
		Lump::MeshVerts,
		Lump::Effects,
		Lump::Faces,
		Lump::Lightmaps,
		Lump::LightVols,
		Lump::VisData,
	];

	pub fn name(self) -> &'static str {
		match self {
			Lump::Entities => "entities",
			Lump::Textures => "textures",
			Lump::Planes => "planes",
			Lump::Nodes => "nodes",
			Lump::Leaves => "leaves",
			Lump::LeafFaces => "leaffaces",
			Lump::LeafBrushes => "leafbrushes",
			Lump::Models => "models",
			Lump::Brushes => "brushes",
			Lump::BrushSides => "brushsides",
			Lump::Vertices => "vertices",
			Lump::MeshVerts => "meshverts",
			Lump::Effects => "effects",
			Lump::Faces => "faces",
			Lump::Lightmaps => "lightmaps",
			Lump::LightVols => "lightvols",
			Lump::VisData => "visdata",
		}
	}
}

#[cfg(feature = "import")]
#[derive(Debug, Error)]
pub enum BspImportError {
	#[error("I/O error")]
	IO {
		#[from]
		source: io::Error,
	},
	#[error("Not an IBSP map: {0:08X}")]
	Magic(u32),
	#[error("Unknown/unsupported version: {0}")]
	Version(i32),
	#[error("{} lump runs past the end of the buffer: {offset}+{length} > {available}", .lump.name())]
	TruncatedLump {
		lump: Lump,
		offset: u32,
		length: u32,
		available: usize,
	},
	#[error("{} lump length {length} is not a multiple of the {record_size}-byte record", .lump.name())]
	MisalignedLump {
		lump: Lump,
		length: u32,
		record_size: usize,
	},
	#[error("Record {index} is out of range for the {} lump of {count} records", .lump.name())]
	IndexOutOfRange {
		lump: Lump,
		index: u32,
		count: u32,
	},
	#[error("Unknown face type: {0}")]
	UnknownFaceKind(i32),
}

/// One directory slot: where a lump lives inside the buffer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DirEntry {
	pub offset: u32,
	pub length: u32,
}

impl DirEntry {
	#[cfg(feature = "import")]
	fn read<R>(buf: &mut R) -> Result<DirEntry, BspImportError>
	where
		R: ReadBytesExt,
	{
		Ok(DirEntry {
			offset: buf.read_u32::<LE>()?,
			length: buf.read_u32::<LE>()?,
		})
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Header {
	pub magic: u32,
	pub version: i32,
	entries: [DirEntry; LUMP_COUNT],
}

impl Header {
	#[cfg(feature = "import")]
	pub fn read<R>(buf: &mut R) -> Result<Header, BspImportError>
	where
		R: ReadBytesExt,
	{
		let magic = buf.read_u32::<BE>()?;
		if magic != MAGIC {
			return Err(BspImportError::Magic(magic));
		}

		let version = buf.read_i32::<LE>()?;
		if version != VERSION {
			return Err(BspImportError::Version(version));
		}

		let mut entries = [DirEntry { offset: 0, length: 0 }; LUMP_COUNT];
		for entry in entries.iter_mut() {
			*entry = DirEntry::read(buf)?;
		}

		Ok(Header {
			magic: magic,
			version: version,
			entries: entries,
		})
	}

	pub fn entry(&self, lump: Lump) -> DirEntry {
		self.entries[lump as usize]
	}
}

/// A fixed-width record decodable out of a lump.
#[cfg(feature = "import")]
pub trait LumpRecord: Sized {
	const SIZE: usize;

	fn read<R>(buf: &mut R) -> Result<Self, BspImportError>
	where
		R: ReadBytesExt + ReadBinExt;
}

/// Bounds-checked, typed window over one lump.
///
/// The whole-lump range and the record alignment are validated once on
/// construction; per-record access only checks the index. This is the only
/// place where directory offsets turn into records.
#[cfg(feature = "import")]
pub struct LumpView<'a, T> {
	data: &'a [u8],
	lump: Lump,
	count: u32,
	_record: PhantomData<T>,
}

#[cfg(feature = "import")]
impl<'a, T> LumpView<'a, T>
where
	T: LumpRecord,
{
	fn new(data: &'a [u8], lump: Lump, entry: DirEntry) -> Result<LumpView<'a, T>, BspImportError> {
		let end = entry.offset as u64 + entry.length as u64;
		if end > data.len() as u64 {
			return Err(BspImportError::TruncatedLump {
				lump: lump,
				offset: entry.offset,
				length: entry.length,
				available: data.len(),
			});
		}

		if entry.length as usize % T::SIZE != 0 {
			return Err(BspImportError::MisalignedLump {
				lump: lump,
				length: entry.length,
				record_size: T::SIZE,
			});
		}

		Ok(LumpView {
			data: &data[entry.offset as usize..end as usize],
			lump: lump,
			count: (entry.length as usize / T::SIZE) as u32,
			_record: PhantomData,
		})
	}

	pub fn count(&self) -> u32 {
		self.count
	}

	pub fn is_empty(&self) -> bool {
		self.count == 0
	}

	pub fn get(&self, index: u32) -> Result<T, BspImportError> {
		if index >= self.count {
			return Err(BspImportError::IndexOutOfRange {
				lump: self.lump,
				index: index,
				count: self.count,
			});
		}

		let start = index as usize * T::SIZE;
		T::read(&mut &self.data[start..start + T::SIZE])
	}

	pub fn iter(&self) -> impl Iterator<Item = Result<T, BspImportError>> + '_ {
		(0..self.count).map(move |index| self.get(index))
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Texture {
	pub name: String,
	pub flags: SurfaceFlags,
	pub contents: ContentFlags,
}

#[cfg(feature = "import")]
impl LumpRecord for Texture {
	const SIZE: usize = NAME_WIDTH + 8;

	fn read<R>(buf: &mut R) -> Result<Texture, BspImportError>
	where
		R: ReadBytesExt + ReadBinExt,
	{
		Ok(Texture {
			name: buf.read_cstr_fixed(NAME_WIDTH)?,
			flags: SurfaceFlags::from_bits_truncate(buf.read_u32::<LE>()?),
			contents: ContentFlags::from_bits_truncate(buf.read_u32::<LE>()?),
		})
	}
}

impl fmt::Display for Texture {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "  name: {}", self.name)?;
		writeln!(f, "  flags: {:?}", self.flags)?;
		writeln!(f, "  contents: {:?}", self.contents)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
	pub position: Vec3,
	pub texcoord: Vec2,
	pub lmcoord: Vec2,
	pub normal: Vec3,
	pub color: [u8; 4],
}

#[cfg(feature = "import")]
impl LumpRecord for Vertex {
	const SIZE: usize = 44;

	fn read<R>(buf: &mut R) -> Result<Vertex, BspImportError>
	where
		R: ReadBytesExt + ReadBinExt,
	{
		Ok(Vertex {
			position: buf.read_vec3_le()?,
			texcoord: buf.read_vec2_le()?,
			lmcoord: buf.read_vec2_le()?,
			normal: buf.read_vec3_le()?,
			color: {
				let mut rgba = [0; 4];
				buf.read_exact(&mut rgba)?;
				rgba
			},
		})
	}
}

impl Add for Vertex {
	type Output = Vertex;

	fn add(self, rhs: Vertex) -> Vertex {
		let mut color = [0; 4];
		for (channel, (a, b)) in color.iter_mut().zip(self.color.iter().zip(rhs.color.iter())) {
			*channel = a.saturating_add(*b);
		}

		Vertex {
			position: self.position + rhs.position,
			texcoord: self.texcoord + rhs.texcoord,
			lmcoord: self.lmcoord + rhs.lmcoord,
			normal: self.normal + rhs.normal,
			color: color,
		}
	}
}

impl Mul<f32> for Vertex {
	type Output = Vertex;

	fn mul(self, rhs: f32) -> Vertex {
		let mut color = [0; 4];
		for (channel, c) in color.iter_mut().zip(self.color.iter()) {
			*channel = ((*c as f32) * rhs).clamp(0.0, 255.0) as u8;
		}

		Vertex {
			position: self.position * rhs,
			texcoord: self.texcoord * rhs,
			lmcoord: self.lmcoord * rhs,
			normal: self.normal * rhs,
			color: color,
		}
	}
}

impl fmt::Display for Vertex {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let p = self.position;
		let n = self.normal;
		writeln!(f, "  position: ({}, {}, {})", p.x, p.y, p.z)?;
		writeln!(f, "  texcoord: ({}, {})", self.texcoord.x, self.texcoord.y)?;
		writeln!(f, "  lmcoord: ({}, {})", self.lmcoord.x, self.lmcoord.y)?;
		writeln!(f, "  normal: ({}, {}, {})", n.x, n.y, n.z)?;
		writeln!(f, "  color: {:?}", self.color)
	}
}

/// Geometry interpretation of a face.
///
/// All four kinds share the same 104-byte storage; the on-disk type field
/// decides which trailing fields carry meaning, so the meaningless ones are
/// not exposed on the decoded value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FaceKind {
	/// Flat vertex fan.
	Polygon {
		first_vertex: i32,
		num_vertices: i32,
		first_meshvert: i32,
		num_meshverts: i32,
	},
	/// Bezier control grid, `size[0]` x `size[1]` control points.
	Patch {
		first_vertex: i32,
		num_vertices: i32,
		size: [i32; 2],
	},
	/// Indexed triangle list through the meshverts lump.
	Mesh {
		first_vertex: i32,
		num_vertices: i32,
		first_meshvert: i32,
		num_meshverts: i32,
	},
	/// Screen-aligned quad; no geometry of its own.
	Billboard,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
	pub texture: i32,
	/// Index into the effects lump; -1 on disk means none.
	pub effect: Option<i32>,
	pub lm_index: i32,
	pub lm_start: [i32; 2],
	pub lm_size: [i32; 2],
	pub lm_origin: Vec3,
	pub lm_vecs: [Vec3; 2],
	pub normal: Vec3,
	pub kind: FaceKind,
}

#[cfg(feature = "import")]
impl LumpRecord for Face {
	const SIZE: usize = 104;

	fn read<R>(buf: &mut R) -> Result<Face, BspImportError>
	where
		R: ReadBytesExt + ReadBinExt,
	{
		let texture = buf.read_i32::<LE>()?;
		let effect = match buf.read_i32::<LE>()? {
			-1 => None,
			index => Some(index),
		};
		let kind_tag = buf.read_i32::<LE>()?;
		let first_vertex = buf.read_i32::<LE>()?;
		let num_vertices = buf.read_i32::<LE>()?;
		let first_meshvert = buf.read_i32::<LE>()?;
		let num_meshverts = buf.read_i32::<LE>()?;
		let lm_index = buf.read_i32::<LE>()?;
		let lm_start = [buf.read_i32::<LE>()?, buf.read_i32::<LE>()?];
		let lm_size = [buf.read_i32::<LE>()?, buf.read_i32::<LE>()?];
		let lm_origin = buf.read_vec3_le()?;
		let lm_vecs = [buf.read_vec3_le()?, buf.read_vec3_le()?];
		let normal = buf.read_vec3_le()?;
		let size = [buf.read_i32::<LE>()?, buf.read_i32::<LE>()?];

		let kind = match kind_tag {
			1 => FaceKind::Polygon {
				first_vertex: first_vertex,
				num_vertices: num_vertices,
				first_meshvert: first_meshvert,
				num_meshverts: num_meshverts,
			},
			2 => FaceKind::Patch {
				first_vertex: first_vertex,
				num_vertices: num_vertices,
				size: size,
			},
			3 => FaceKind::Mesh {
				first_vertex: first_vertex,
				num_vertices: num_vertices,
				first_meshvert: first_meshvert,
				num_meshverts: num_meshverts,
			},
			4 => FaceKind::Billboard,
			tag => return Err(BspImportError::UnknownFaceKind(tag)),
		};

		Ok(Face {
			texture: texture,
			effect: effect,
			lm_index: lm_index,
			lm_start: lm_start,
			lm_size: lm_size,
			lm_origin: lm_origin,
			lm_vecs: lm_vecs,
			normal: normal,
			kind: kind,
		})
	}
}

impl fmt::Display for Face {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "  texture: {}", self.texture)?;
		writeln!(f, "  effect: {}", self.effect.unwrap_or(-1))?;

		match self.kind {
			FaceKind::Polygon { first_vertex, num_vertices, first_meshvert, num_meshverts } => {
				writeln!(f, "  type: polygon")?;
				writeln!(f, "  vertex: {} n_vertices: {}", first_vertex, num_vertices)?;
				writeln!(f, "  meshvert: {} n_meshverts: {}", first_meshvert, num_meshverts)?;
			},
			FaceKind::Patch { first_vertex, num_vertices, size } => {
				writeln!(f, "  type: patch")?;
				writeln!(f, "  vertex: {} n_vertices: {}", first_vertex, num_vertices)?;
				writeln!(f, "  size: {}x{}", size[0], size[1])?;
			},
			FaceKind::Mesh { first_vertex, num_vertices, first_meshvert, num_meshverts } => {
				writeln!(f, "  type: mesh")?;
				writeln!(f, "  vertex: {} n_vertices: {}", first_vertex, num_vertices)?;
				writeln!(f, "  meshvert: {} n_meshverts: {}", first_meshvert, num_meshverts)?;
			},
			FaceKind::Billboard => {
				writeln!(f, "  type: billboard")?;
			},
		}

		let o = self.lm_origin;
		let n = self.normal;
		writeln!(f, "  lm_index: {}", self.lm_index)?;
		writeln!(f, "  lm_start: {:?} lm_size: {:?}", self.lm_start, self.lm_size)?;
		writeln!(f, "  lm_origin: ({}, {}, {})", o.x, o.y, o.z)?;
		writeln!(f, "  lm_vecs: ({}, {}, {}) ({}, {}, {})",
			self.lm_vecs[0].x, self.lm_vecs[0].y, self.lm_vecs[0].z,
			self.lm_vecs[1].x, self.lm_vecs[1].y, self.lm_vecs[1].z)?;
		writeln!(f, "  normal: ({}, {}, {})", n.x, n.y, n.z)
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Effect {
	pub name: String,
	pub brush: i32,
	pub unknown: i32, // always 5?
}

#[cfg(feature = "import")]
impl LumpRecord for Effect {
	const SIZE: usize = NAME_WIDTH + 8;

	fn read<R>(buf: &mut R) -> Result<Effect, BspImportError>
	where
		R: ReadBytesExt + ReadBinExt,
	{
		Ok(Effect {
			name: buf.read_cstr_fixed(NAME_WIDTH)?,
			brush: buf.read_i32::<LE>()?,
			unknown: buf.read_i32::<LE>()?,
		})
	}
}

impl fmt::Display for Effect {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "  name: {}", self.name)?;
		writeln!(f, "  brush: {}", self.brush)
	}
}

/// Vertex index offset, relative to the first vertex of the owning face.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MeshVert {
	pub offset: i32,
}

#[cfg(feature = "import")]
impl LumpRecord for MeshVert {
	const SIZE: usize = 4;

	fn read<R>(buf: &mut R) -> Result<MeshVert, BspImportError>
	where
		R: ReadBytesExt + ReadBinExt,
	{
		Ok(MeshVert {
			offset: buf.read_i32::<LE>()?,
		})
	}
}

impl fmt::Display for MeshVert {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "  offset: {}", self.offset)
	}
}

/// Raw 128x128 RGB texel block, no header, no compression.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lightmap {
	pub map: Vec<u8>,
}

#[cfg(feature = "import")]
impl LumpRecord for Lightmap {
	const SIZE: usize = LIGHTMAP_BYTES;

	fn read<R>(buf: &mut R) -> Result<Lightmap, BspImportError>
	where
		R: ReadBytesExt + ReadBinExt,
	{
		let mut map = vec![0; LIGHTMAP_BYTES];
		buf.read_exact(&mut map)?;

		Ok(Lightmap {
			map: map,
		})
	}
}

/// A parsed map: the validated header plus the borrowed file buffer.
///
/// Immutable after construction; share the backing bytes (e.g. behind an
/// `Arc<[u8]>`) to read from several threads at once.
pub struct BspMap<'a> {
	data: &'a [u8],
	header: Header,
}

impl<'a> BspMap<'a> {
	#[cfg(feature = "import")]
	pub fn read(data: &'a [u8]) -> Result<BspMap<'a>, BspImportError> {
		let header = Header::read(&mut &data[..])?;

		Ok(BspMap {
			data: data,
			header: header,
		})
	}

	pub fn header(&self) -> &Header {
		&self.header
	}

	pub fn entry(&self, lump: Lump) -> DirEntry {
		self.header.entry(lump)
	}

	#[cfg(feature = "import")]
	fn lump_view<T>(&self, lump: Lump) -> Result<LumpView<'a, T>, BspImportError>
	where
		T: LumpRecord,
	{
		LumpView::new(self.data, lump, self.header.entry(lump))
	}

	#[cfg(feature = "import")]
	pub fn textures(&self) -> Result<LumpView<'a, Texture>, BspImportError> {
		self.lump_view(Lump::Textures)
	}

	#[cfg(feature = "import")]
	pub fn vertices(&self) -> Result<LumpView<'a, Vertex>, BspImportError> {
		self.lump_view(Lump::Vertices)
	}

	#[cfg(feature = "import")]
	pub fn mesh_verts(&self) -> Result<LumpView<'a, MeshVert>, BspImportError> {
		self.lump_view(Lump::MeshVerts)
	}

	#[cfg(feature = "import")]
	pub fn effects(&self) -> Result<LumpView<'a, Effect>, BspImportError> {
		self.lump_view(Lump::Effects)
	}

	#[cfg(feature = "import")]
	pub fn faces(&self) -> Result<LumpView<'a, Face>, BspImportError> {
		self.lump_view(Lump::Faces)
	}

	#[cfg(feature = "import")]
	pub fn lightmaps(&self) -> Result<LumpView<'a, Lightmap>, BspImportError> {
		self.lump_view(Lump::Lightmaps)
	}

	/// Renders the header: magic, version and every directory slot.
	pub fn describe(&self) -> String {
		let mut out = String::new();
		let _ = writeln!(out, "map {{");
		let _ = writeln!(out, " magic: {}", String::from_utf8_lossy(&self.header.magic.to_be_bytes()));
		let _ = writeln!(out, " version: {}", self.header.version);

		for lump in Lump::ALL {
			let entry = self.header.entry(lump);
			let _ = writeln!(out, " {}: offset {}, length {}", lump.name(), entry.offset, entry.length);
		}

		let _ = writeln!(out, "}}");
		out
	}

	/// Renders one lump as byte range, record count and the decoded first
	/// and last record. Sampling keeps the output bounded however large the
	/// map is.
	#[cfg(feature = "import")]
	fn describe_sampled<T>(&self, lump: Lump) -> Result<String, BspImportError>
	where
		T: LumpRecord + fmt::Display,
	{
		let entry = self.header.entry(lump);
		let view = self.lump_view::<T>(lump)?;

		let mut out = String::new();
		let _ = writeln!(out, "{} {{", lump.name());
		let _ = writeln!(out, "  offset: {} length: {}", entry.offset, entry.length);
		let _ = writeln!(out, "  num: {}", view.count());

		if !view.is_empty() {
			let _ = write!(out, "{}", view.get(0)?);
		}
		if view.count() > 1 {
			let _ = write!(out, "{}", view.get(view.count() - 1)?);
		}

		let _ = writeln!(out, "}}");
		Ok(out)
	}

	#[cfg(feature = "import")]
	pub fn describe_textures(&self) -> Result<String, BspImportError> {
		self.describe_sampled::<Texture>(Lump::Textures)
	}

	#[cfg(feature = "import")]
	pub fn describe_vertices(&self) -> Result<String, BspImportError> {
		self.describe_sampled::<Vertex>(Lump::Vertices)
	}

	#[cfg(feature = "import")]
	pub fn describe_mesh_verts(&self) -> Result<String, BspImportError> {
		self.describe_sampled::<MeshVert>(Lump::MeshVerts)
	}

	#[cfg(feature = "import")]
	pub fn describe_effects(&self) -> Result<String, BspImportError> {
		self.describe_sampled::<Effect>(Lump::Effects)
	}

	#[cfg(feature = "import")]
	pub fn describe_faces(&self) -> Result<String, BspImportError> {
		self.describe_sampled::<Face>(Lump::Faces)
	}

	/// Structural summary for sanity-checking a freshly parsed buffer:
	/// the header block plus sampled vertex and face lumps.
	#[cfg(feature = "import")]
	pub fn report(&self) -> Result<String, BspImportError> {
		let mut out = self.describe();
		out.push_str(&self.describe_vertices()?);
		out.push_str(&self.describe_faces()?);
		Ok(out)
	}
}
