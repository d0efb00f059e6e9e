use std::path::PathBuf;

use clap::Args;

use crate::compile::load_image;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::types::{parse_colour_key, Colour, Palette, PaletteBuilder};

/// Print the palette an image would compile to
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// PNG file to inspect
    #[arg(required = true)]
    pub file: PathBuf,

    /// Transparency key to pin at index 0 (0xAABBGGRR or #RRGGBB)
    #[arg(long)]
    pub transparency: Option<String>,
}

pub fn run(args: InspectArgs, printer: &Printer) -> Result<()> {
    let path = &args.file;
    let key = args.transparency.as_deref().map(parse_colour_key).transpose()?;

    let image = load_image(path)?;
    let palette = PaletteBuilder::new()
        .with_transparency(key)
        .build(image.pixels())?;

    printer.status(
        "Sampled",
        &format!(
            "{} from {} ({}x{})",
            plural(palette.len(), "colour", "colours"),
            display_path(path),
            image.width(),
            image.height()
        ),
    );

    for line in palette_lines(&palette) {
        println!("{}", line);
    }

    Ok(())
}

/// One line per entry: index, packed 24-bit value, and `#RRGGBB`.
fn palette_lines(palette: &Palette) -> Vec<String> {
    palette
        .entries()
        .iter()
        .enumerate()
        .map(|(i, &entry)| {
            let colour = Colour::from_packed(entry | 0xFF00_0000);
            format!("{:3}: {:#08x} {}", i, entry, colour)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn test_palette_lines() {
        let palette = PaletteBuilder::new()
            .with_transparency(Some(0xFFFF_00FF))
            .build(&[0xFF00_00FF, 0xFFFF_00FF])
            .unwrap();

        assert_eq!(
            palette_lines(&palette),
            vec!["  0: 0xff00ff #FF00FF", "  1: 0x0000ff #FF0000"]
        );
    }

    #[test]
    fn test_run_inspect() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bullet.png");
        RgbaImage::from_pixel(4, 4, Rgba([255, 0, 255, 255]))
            .save(&path)
            .unwrap();

        let args = InspectArgs {
            file: path,
            transparency: Some("#FF00FF".to_string()),
        };
        run(args, &Printer::plain()).unwrap();
    }

    #[test]
    fn test_run_inspect_missing_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bullet.png");
        RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let args = InspectArgs {
            file: path,
            transparency: Some("#FF00FF".to_string()),
        };
        assert!(run(args, &Printer::plain()).is_err());
    }
}
