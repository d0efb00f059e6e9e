use miette::Diagnostic;
use thiserror::Error;

/// Main error type for idxtex operations
#[derive(Error, Diagnostic, Debug)]
pub enum IdxError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(idxtex::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(idxtex::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unsupported image format in {path}: {found}")]
    #[diagnostic(
        code(idxtex::format),
        help("Re-export the image as 8-bit RGBA (four channels)")
    )]
    Format {
        path: std::path::PathBuf,
        found: String,
    },

    #[error("Transparency colour {key:#08x} does not appear in the image")]
    #[diagnostic(
        code(idxtex::missing_transparency),
        help("Check the declared key; colours compare on their low 24 bits (0xBBGGRR)")
    )]
    MissingTransparencyColor { key: u32 },

    #[error("Palette has {count} colours, at most {max} fit a one-byte index")]
    #[diagnostic(code(idxtex::palette_overflow))]
    PaletteOverflow { count: usize, max: usize },

    #[error("Pixel {offset} has colour {colour:#08x} which is not in the palette")]
    #[diagnostic(code(idxtex::unknown_colour))]
    UnknownColor { colour: u32, offset: usize },

    #[error("Sheet {dimension} {size} is not a multiple of tile {dimension} {tile}")]
    #[diagnostic(code(idxtex::irregular_sheet))]
    IrregularSheetDimensions {
        dimension: &'static str,
        size: u32,
        tile: u32,
    },

    #[error("Image is {actual_w}x{actual_h}, expected {expected_w}x{expected_h}")]
    #[diagnostic(code(idxtex::size_mismatch))]
    SizeMismatch {
        expected_w: u32,
        expected_h: u32,
        actual_w: u32,
        actual_h: u32,
    },

    #[error("Index buffer holds {actual} entries, geometry requires {expected}")]
    #[diagnostic(code(idxtex::shape_mismatch))]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Asset '{asset}': {cause}")]
    #[diagnostic(code(idxtex::asset))]
    Asset {
        asset: String,
        cause: Box<IdxError>,
    },
}

impl IdxError {
    /// Attach the name of the asset being compiled.
    pub fn in_asset(self, asset: impl Into<String>) -> Self {
        IdxError::Asset {
            asset: asset.into(),
            cause: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, IdxError>;
