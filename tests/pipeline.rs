//! End-to-end tests: PNG on disk -> artifact -> emitted source.

use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use idxtex::types::rgb24;
use idxtex::{
    compile_asset, load_image, render, AssetSpec, CSourceEncoder, IdxError, MemorySink,
};

const CYAN: [u8; 4] = [0, 255, 255, 255];
const CYAN_KEY: u32 = 0xFFFF_FF00;

/// Deterministic pseudo-random sheet drawing from `ncolours` colours.
fn noisy_sheet(path: &Path, width: u32, height: u32, ncolours: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        if (x + y) % 7 == 0 {
            return Rgba(CYAN);
        }
        let n = (x.wrapping_mul(2_654_435_761) ^ y.wrapping_mul(40_503)) % ncolours;
        Rgba([n as u8, (n >> 8) as u8 ^ 0x40, 0x80, 255])
    });
    img.save(path).unwrap();
}

fn distinct_colours(path: &Path, count: u32) {
    let img = RgbaImage::from_fn(count, 1, |x, _| Rgba([x as u8, (x >> 8) as u8, 7, 255]));
    img.save(path).unwrap();
}

#[test]
fn round_trip_every_pixel() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sheet.png");
    noisy_sheet(&path, 114, 118, 40);

    let spec = AssetSpec::sheet("player", "sheet.png", 57, 59).with_transparency(CYAN_KEY);
    let artifact = compile_asset(&spec, dir.path()).unwrap();
    let image = load_image(&path).unwrap();
    let grid = artifact.grid;

    for y in 0..image.height() {
        for x in 0..image.width() {
            let (tx, xx) = (x / grid.tile_w, x % grid.tile_w);
            let (ty, yy) = (y / grid.tile_h, y % grid.tile_h);
            let pos = (((ty * grid.cols + tx) * grid.tile_h + yy) * grid.tile_w + xx) as usize;
            let index = artifact.indices[pos] as usize;
            assert_eq!(
                artifact.palette.get(index),
                Some(rgb24(image.get(x, y).unwrap())),
                "pixel ({x}, {y})"
            );
        }
    }
}

#[test]
fn player_sheet_tiling_arithmetic() {
    let dir = tempdir().unwrap();
    noisy_sheet(&dir.path().join("sheet.png"), 114, 118, 12);

    let spec = AssetSpec::sheet("player", "sheet.png", 57, 59).with_transparency(CYAN_KEY);
    let artifact = compile_asset(&spec, dir.path()).unwrap();

    assert_eq!((artifact.grid.cols, artifact.grid.rows), (2, 2));
    assert_eq!(artifact.ntiles(), 4);
    assert_eq!(artifact.indices.len(), 13_452);
}

#[test]
fn transparency_is_index_zero() {
    let dir = tempdir().unwrap();
    // Key first appears late in the pixel stream
    let mut img = RgbaImage::from_pixel(12, 12, Rgba([9, 9, 9, 255]));
    img.put_pixel(11, 11, Rgba([255, 0, 255, 255]));
    img.put_pixel(5, 5, Rgba([1, 2, 3, 255]));
    img.save(dir.path().join("bullet.png")).unwrap();

    let spec = AssetSpec::texture("bullet", "bullet.png", 12, 12).with_transparency(0xFFFF_00FF);
    let artifact = compile_asset(&spec, dir.path()).unwrap();

    assert_eq!(artifact.palette.entries(), &[0xFF_00FF, 0x09_0909, 0x03_0201]);
    assert_eq!(artifact.indices[11 * 12 + 11], 0);
}

#[test]
fn compiling_twice_is_byte_identical() {
    let dir = tempdir().unwrap();
    noisy_sheet(&dir.path().join("sheet.png"), 114, 118, 200);

    let spec = AssetSpec::sheet("player", "sheet.png", 57, 59).with_transparency(CYAN_KEY);
    let encoder = CSourceEncoder::new(Some("gloom/types.h".to_string()));

    let mut first = MemorySink::new();
    let mut second = MemorySink::new();
    render::emit(&compile_asset(&spec, dir.path()).unwrap(), &encoder, &mut first).unwrap();
    render::emit(&compile_asset(&spec, dir.path()).unwrap(), &encoder, &mut second).unwrap();

    assert_eq!(first.files, second.files);
}

#[test]
fn palette_bound_255_ok_256_overflows() {
    let dir = tempdir().unwrap();
    distinct_colours(&dir.path().join("c255.png"), 255);
    distinct_colours(&dir.path().join("c256.png"), 256);

    let ok = AssetSpec::texture("c255", "c255.png", 255, 1);
    assert_eq!(compile_asset(&ok, dir.path()).unwrap().palette_len(), 255);

    let over = AssetSpec::texture("c256", "c256.png", 256, 1);
    match compile_asset(&over, dir.path()).unwrap_err() {
        IdxError::Asset { cause, .. } => {
            assert!(matches!(*cause, IdxError::PaletteOverflow { count: 256, .. }))
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn two_tile_sheet_is_not_interleaved() {
    let dir = tempdir().unwrap();
    // Left tile: column stripes of colour A/B; right tile: solid C
    let img = RgbaImage::from_fn(8, 4, |x, _| match x {
        0..=3 if x % 2 == 0 => Rgba([10, 0, 0, 255]),
        0..=3 => Rgba([20, 0, 0, 255]),
        _ => Rgba([30, 0, 0, 255]),
    });
    img.save(dir.path().join("pair.png")).unwrap();

    let spec = AssetSpec::sheet("pair", "pair.png", 4, 4);
    let artifact = compile_asset(&spec, dir.path()).unwrap();

    let left: Vec<u8> = [0, 1, 0, 1].repeat(4);
    assert_eq!(artifact.tile(0).unwrap(), left.as_slice());
    assert_eq!(artifact.tile(1).unwrap(), vec![2u8; 16].as_slice());
}

#[test]
fn irregular_sheet_rejected_without_output() {
    let dir = tempdir().unwrap();
    noisy_sheet(&dir.path().join("sheet.png"), 115, 118, 8);

    let spec = AssetSpec::sheet("player", "sheet.png", 57, 59);
    let err = compile_asset(&spec, dir.path()).unwrap_err();

    match err {
        IdxError::Asset { asset, cause } => {
            assert_eq!(asset, "player");
            assert!(matches!(
                *cause,
                IdxError::IrregularSheetDimensions {
                    dimension: "width",
                    size: 115,
                    tile: 57
                }
            ));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
