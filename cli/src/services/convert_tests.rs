use std::fs::{self, File};

use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use oled_framebuffer::Format;
use oled_image::InvertStage;
use tempfile::TempDir;

use super::*;

/// Write a solid grayscale PNG and return its path.
fn write_solid_png(dir: &TempDir, name: &str, width: u32, height: u32, value: u8) -> PathBuf {
    let path = dir.path().join(name);
    GrayImage::from_pixel(width, height, Luma([value]))
        .save(&path)
        .unwrap();
    path
}

/// Write a GIF with one solid 32x32 frame per `(value, delay_ms)` pair.
fn write_gif(dir: &TempDir, name: &str, frames: &[(u8, u32)]) -> PathBuf {
    let path = dir.path().join(name);
    let mut encoder = GifEncoder::new(File::create(&path).unwrap());
    for &(value, ms) in frames {
        let buffer = RgbaImage::from_pixel(32, 32, Rgba([value, value, value, 255]));
        encoder
            .encode_frame(Frame::from_parts(
                buffer,
                0,
                0,
                Delay::from_numer_denom_ms(ms, 1),
            ))
            .unwrap();
    }
    drop(encoder);
    path
}

fn body_lines(src: &str) -> Vec<&str> {
    src.lines().filter(|l| l.trim_start().starts_with("0x")).collect()
}

#[test]
fn test_still_black_c_buffer() {
    let dir = TempDir::new().unwrap();
    let input = write_solid_png(&dir, "black.png", 256, 256, 0);
    let config = ConvertConfig::new(&input)
        .with_output(dir.path().join("black"))
        .with_buffer(Format::C);

    let report = run(&config).unwrap();
    let path = report.buffer_path.unwrap();
    assert_eq!(path, dir.path().join("black_fb.c"));

    let src = fs::read_to_string(&path).unwrap();
    assert!(src.contains("const uint8_t framebuffer[1024] = {"));
    let lines = body_lines(&src);
    assert_eq!(lines.len(), 64);
    for line in lines {
        assert_eq!(line.matches("0x").count(), 16);
        assert_eq!(line.matches("0x00").count(), 16);
    }
    assert!(report.image_path.is_none());
}

#[test]
fn test_still_white_inverted_before_dither_is_black() {
    // Source inversion turns white content black; the padding stays black.
    let dir = TempDir::new().unwrap();
    let input = write_solid_png(&dir, "white.png", 256, 256, 255);
    let config = ConvertConfig::new(&input)
        .with_output(dir.path().join("white"))
        .with_buffer(Format::C)
        .with_invert(true);

    let report = run(&config).unwrap();
    let src = fs::read_to_string(report.buffer_path.unwrap()).unwrap();
    assert_eq!(src.matches("0x00").count(), 1024);
    assert_eq!(src.matches("0xFF").count(), 0);
}

#[test]
fn test_still_white_without_padding_is_all_ff() {
    let dir = TempDir::new().unwrap();
    let input = write_solid_png(&dir, "wide.png", 128, 64, 255);
    let config = ConvertConfig::new(&input)
        .with_output(dir.path().join("wide"))
        .with_buffer(Format::Asm);

    let report = run(&config).unwrap();
    let path = report.buffer_path.unwrap();
    assert_eq!(path, dir.path().join("wide_fb.S"));

    let src = fs::read_to_string(&path).unwrap();
    assert_eq!(src.lines().count(), 64);
    assert_eq!(src.matches("0xFF").count(), 1024);
    assert!(!src.contains("0x40"));
}

#[test]
fn test_still_image_and_buffer() {
    let dir = TempDir::new().unwrap();
    let input = write_solid_png(&dir, "logo.png", 300, 120, 0);
    let config = ConvertConfig::new(&input)
        .with_output(dir.path().join("logo"))
        .with_image(true)
        .with_buffer(Format::Asm);

    let report = run(&config).unwrap();
    let image_path = report.image_path.unwrap();
    assert_eq!(image_path, dir.path().join("logo_128x64.png"));
    assert!(report.buffer_path.unwrap().exists());

    let png = image::open(&image_path).unwrap().to_luma8();
    assert_eq!(png.dimensions(), (128, 64));
    assert!(png.pixels().all(|p| p.0[0] == 0));
}

#[test]
fn test_still_dithered_invert_stage_whitens_padding() {
    let dir = TempDir::new().unwrap();
    let input = write_solid_png(&dir, "black.png", 64, 64, 0);
    let config = ConvertConfig::new(&input)
        .with_output(dir.path().join("black"))
        .with_image(true)
        .with_invert(true)
        .with_invert_stage(InvertStage::Dithered);

    let report = run(&config).unwrap();
    let png = image::open(report.image_path.unwrap()).unwrap().to_luma8();
    assert!(png.pixels().all(|p| p.0[0] == 255));
}

#[test]
fn test_animated_asm_buffer() {
    let dir = TempDir::new().unwrap();
    let input = write_gif(&dir, "anim.gif", &[(0, 100), (255, 150), (0, 200)]);
    let config = ConvertConfig::new(&input)
        .with_output(dir.path().join("anim"))
        .with_animated(true)
        .with_buffer(Format::Asm);

    let report = run(&config).unwrap();
    assert_eq!(report.frame_count, 3);
    let path = report.buffer_path.unwrap();
    assert_eq!(path, dir.path().join("anim_fb.S"));

    let src = fs::read_to_string(&path).unwrap();
    assert!(src.contains("n_frames: .hword 3"));
    assert!(src.contains("durations:\n    .hword 100, 150, 200\n"));
    for i in 0..3 {
        assert!(src.contains(&format!("frame_{i:03}:\n    .byte 0x40\n")));
    }
    assert_eq!(src.matches(".byte 0x40\n").count(), 3);
}

#[test]
fn test_animated_c_buffer() {
    let dir = TempDir::new().unwrap();
    let input = write_gif(&dir, "anim.gif", &[(0, 100), (0, 250)]);
    let config = ConvertConfig::new(&input)
        .with_output(dir.path().join("anim"))
        .with_animated(true)
        .with_buffer(Format::C);

    let report = run(&config).unwrap();
    let src = fs::read_to_string(report.buffer_path.unwrap()).unwrap();
    assert!(src.contains("const uint16_t n_frames = 2;"));
    assert!(src.contains("const uint16_t durations[2] = {\n    100, 250,\n};"));
    assert!(src.contains("const uint8_t framebuffer[2][1024] = {"));
    assert_eq!(body_lines(&src).len(), 128);
}

#[test]
fn test_animated_frames_directory() {
    let dir = TempDir::new().unwrap();
    let input = write_gif(&dir, "anim.gif", &[(0, 100), (255, 150), (0, 200)]);
    let frames_dir = dir.path().join("frames_out");
    let config = ConvertConfig::new(&input)
        .with_output(&frames_dir)
        .with_animated(true)
        .with_image(true);

    let report = run(&config).unwrap();
    assert_eq!(report.frames_dir.as_deref(), Some(frames_dir.as_path()));
    assert!(report.buffer_path.is_none());

    for i in 0..3 {
        let png = image::open(frames_dir.join(format!("frame_{i:03}.png"))).unwrap();
        assert_eq!((png.width(), png.height()), (128, 64));
    }
    let listing = fs::read_to_string(frames_dir.join("durations.txt")).unwrap();
    assert_eq!(listing, "frame_000: 100\nframe_001: 150\nframe_002: 200\n");
}

#[test]
fn test_animated_invert_defaults_to_dithered_stage() {
    // Black frames inverted after dithering come out fully lit.
    let dir = TempDir::new().unwrap();
    let input = write_gif(&dir, "anim.gif", &[(0, 100)]);
    let config = ConvertConfig::new(&input)
        .with_output(dir.path().join("anim"))
        .with_animated(true)
        .with_invert(true)
        .with_buffer(Format::C);

    let report = run(&config).unwrap();
    let src = fs::read_to_string(report.buffer_path.unwrap()).unwrap();
    assert_eq!(src.matches("0xFF").count(), 1024);
}

#[test]
fn test_animated_long_duration_matches_in_listing_and_table() {
    let dir = TempDir::new().unwrap();
    let input = write_gif(&dir, "slow.gif", &[(0, 70_000), (0, 100)]);
    let config = ConvertConfig::new(&input)
        .with_output(dir.path().join("slow"))
        .with_animated(true)
        .with_image(true)
        .with_buffer(Format::C);

    let report = run(&config).unwrap();
    let listing = fs::read_to_string(report.frames_dir.unwrap().join("durations.txt")).unwrap();
    assert_eq!(listing, "frame_000: 65535\nframe_001: 100\n");

    let src = fs::read_to_string(report.buffer_path.unwrap()).unwrap();
    assert!(src.contains("const uint16_t durations[2] = {\n    65535, 100,\n};"));
}

#[test]
fn test_animated_still_jpeg_is_single_frame() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("still.jpg");
    RgbImage::from_pixel(64, 32, Rgb([0, 0, 0])).save(&input).unwrap();

    let still = ConvertConfig::new(&input)
        .with_output(dir.path().join("still"))
        .with_buffer(Format::Asm);
    assert!(run(&still).unwrap().buffer_path.is_some());

    let animated = ConvertConfig::new(&input)
        .with_output(dir.path().join("anim"))
        .with_animated(true)
        .with_buffer(Format::Asm);
    let report = run(&animated).unwrap();
    assert_eq!(report.frame_count, 1);

    let src = fs::read_to_string(report.buffer_path.unwrap()).unwrap();
    assert!(src.contains("n_frames: .hword 1"));
    assert!(src.contains("durations:\n    .hword 100\n"));
    assert_eq!(src.matches(".byte 0x40\n").count(), 1);
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let config = ConvertConfig::new(dir.path().join("nope.png"))
        .with_output(dir.path().join("nope"))
        .with_image(true);

    let err = run(&config).unwrap_err();
    assert!(matches!(err, ConvertError::Image(ImageEngineError::Io(_))));
    assert!(!dir.path().join("nope_128x64.png").exists());
}

#[test]
fn test_unwritable_output_reports_path() {
    let dir = TempDir::new().unwrap();
    let input = write_solid_png(&dir, "black.png", 16, 16, 0);
    let config = ConvertConfig::new(&input)
        .with_output(dir.path().join("missing-dir").join("black"))
        .with_buffer(Format::C);

    let err = run(&config).unwrap_err();
    match err {
        ConvertError::Write { path, .. } => {
            assert_eq!(path, dir.path().join("missing-dir").join("black_fb.c"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_pack_frames_saturates_long_durations() {
    let frames = vec![
        NormalizedFrame {
            bitmap: Bitmap::display(false),
            duration_ms: 70_000,
        },
        NormalizedFrame {
            bitmap: Bitmap::display(true),
            duration_ms: 40,
        },
    ];
    let packed = pack_frames(&frames).unwrap();
    assert_eq!(packed[0].duration_ms, u16::MAX);
    assert_eq!(packed[1].duration_ms, 40);
}

#[test]
fn test_pack_frames_rejects_wrong_size() {
    let frames = vec![NormalizedFrame {
        bitmap: Bitmap::filled(10, 10, false),
        duration_ms: 100,
    }];
    assert!(matches!(
        pack_frames(&frames),
        Err(ConvertError::Framebuffer(FramebufferError::DimensionMismatch { .. }))
    ));
}
