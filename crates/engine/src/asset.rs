//! Sprite assets.
//!
//! The terminal views only need a sprite's footprint, but loading decodes the
//! whole image so a file with broken pixel data fails at startup, not later.

use std::path::Path;

use anyhow::{bail, Context, Result};

/// Sprite bundled with the binaries.
pub const BUNDLED_BUNNY: &[u8] = include_bytes!("../../../assets/bunny.png");

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    name: String,
    width: u32,
    height: u32,
}

impl Sprite {
    /// Decode PNG bytes.
    pub fn from_png_bytes(name: &str, bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 8 || bytes[..8] != PNG_SIGNATURE {
            bail!("{}: not a PNG file", name);
        }

        let mut reader = png::Decoder::new(bytes)
            .read_info()
            .with_context(|| format!("{}: truncated or invalid PNG header", name))?;
        let mut pixels = vec![0; reader.output_buffer_size()];
        let frame = reader
            .next_frame(&mut pixels)
            .with_context(|| format!("{}: corrupt PNG image data", name))?;

        if frame.width == 0 || frame.height == 0 {
            bail!("{}: zero-sized image ({}x{})", name, frame.width, frame.height);
        }

        Ok(Self {
            name: name.to_string(),
            width: frame.width,
            height: frame.height,
        })
    }

    /// Read and parse a PNG from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("error opening image: {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_png_bytes(&name, &bytes).context("error decoding image data")
    }

    /// The sprite shipped in `assets/bunny.png`.
    pub fn bundled_bunny() -> Result<Self> {
        Self::from_png_bytes("bunny.png", BUNDLED_BUNNY)
    }

    /// Load from `path` when given, else the bundled bunny.
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::bundled_bunny(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_bunny_dimensions() {
        let sprite = Sprite::bundled_bunny().unwrap();
        assert_eq!(sprite.name(), "bunny.png");
        assert_eq!((sprite.width(), sprite.height()), (26, 37));
    }

    #[test]
    fn rejects_non_png() {
        let err = Sprite::from_png_bytes("x", b"GIF89a......").unwrap_err();
        assert!(err.to_string().contains("not a PNG"));
    }

    #[test]
    fn rejects_truncated_header() {
        let err = Sprite::from_png_bytes("x", &BUNDLED_BUNNY[..20]).unwrap_err();
        assert!(err.to_string().contains("truncated"));
    }

    #[test]
    fn rejects_corrupt_pixel_data() {
        let mut bytes = BUNDLED_BUNNY.to_vec();
        let idat = bytes
            .windows(4)
            .position(|w| w == b"IDAT")
            .expect("bundled sprite has an IDAT chunk");
        // Chunk data starts right after the type; scramble a run of it.
        for b in bytes.iter_mut().skip(idat + 4).take(16) {
            *b ^= 0xA5;
        }

        let err = Sprite::from_png_bytes("bunny.png", &bytes).unwrap_err();
        assert!(err.to_string().starts_with("bunny.png:"), "{:#}", err);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Sprite::load("/definitely/not/here.png").unwrap_err();
        assert!(format!("{:#}", err).contains("error opening image"));
    }
}
