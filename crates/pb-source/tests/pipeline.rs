use pb_braille::Transcoder;
use pb_core::config::{Polarity, ResizeFilter};
use pb_core::error::CoreError;
use pb_core::frame::Bitmap;
use pb_core::size::CellSize;
use pb_core::traits::Source;
use pb_source::image::ImageSource;
use pb_source::resize::{Resizer, target_dimensions};

fn write_png(dir: &std::path::Path, name: &str, w: u32, h: u32, rgb: [u8; 3]) -> std::path::PathBuf {
    let path = dir.join(name);
    image::RgbImage::from_pixel(w, h, image::Rgb(rgb))
        .save(&path)
        .unwrap();
    path
}

#[test]
fn white_png_transcodes_to_full_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "white.png", 64, 48, [255, 255, 255]);
    let source = ImageSource::new(&path).unwrap();

    let mut t = Transcoder::new(Resizer::new(ResizeFilter::CatmullRom), Polarity::Negative);
    let bitmap = source.bitmap();
    let text = t.transcode_request(Some(&*bitmap), "8").unwrap();

    // scale = max(32, 16) / 8 = 4 → 16×12 pixels → 8 cells × 4 rows.
    assert_eq!(text.row_count(), 4);
    assert!(text.lines().iter().all(|l| l == "⠿⠿⠿⠿⠿⠿⠿⠿"));
    assert!(text.to_string().ends_with("⠿\n"));
}

#[test]
fn black_png_transcodes_to_blank_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "black.png", 30, 30, [0, 0, 0]);
    let source = ImageSource::new(&path).unwrap();

    let mut t = Transcoder::new(Resizer::default(), Polarity::Negative);
    let bitmap = source.bitmap();
    let text = t.transcode_request(Some(&*bitmap), "5").unwrap();

    // scale = 15 / 5 = 3 → 10×10 pixels → 5 columns, 4 rows (ragged).
    assert_eq!(text.row_count(), 4);
    assert_eq!(text.column_count(), 5);
    assert!(text.to_string().chars().all(|c| c == '⠀' || c == '\n'));
}

#[test]
fn grid_shape_follows_rescaled_dimensions() {
    let mut t = Transcoder::new(Resizer::default(), Polarity::Negative);
    for (w, h, n) in [(17, 9, 3), (5, 40, 7), (123, 77, 20), (1, 1, 1)] {
        let size = CellSize::new(n).unwrap();
        let (rw, rh) = target_dimensions(w, h, size).unwrap();
        let text = t.transcode(&Bitmap::new(w, h), size).unwrap();
        assert_eq!(text.row_count(), rh.div_ceil(3) as usize, "{w}×{h} @ {n}");
        assert!(
            text.lines()
                .iter()
                .all(|l| l.chars().count() == rw.div_ceil(2) as usize),
            "{w}×{h} @ {n}"
        );
    }
}

#[test]
fn thin_image_gets_exactly_size_rows() {
    let mut t = Transcoder::new(Resizer::default(), Polarity::Negative);
    let text = t.transcode(&Bitmap::new(1, 11), CellSize::new(3).unwrap()).unwrap();
    assert_eq!(text.row_count(), 3);
    assert_eq!(text.column_count(), 1);
}

#[test]
fn half_split_image_keeps_sides() {
    // Left half black, right half white, already at target size.
    let mut bmp = Bitmap::new(4, 3);
    for y in 0..3 {
        for x in 2..4 {
            bmp.set_pixel(x, y, (255, 255, 255));
        }
    }
    let mut t = Transcoder::new(Resizer::default(), Polarity::Negative);
    // scale = max(2, 1) / 2 = 1 → unchanged 4×3.
    let text = t.transcode(&bmp, CellSize::new(2).unwrap()).unwrap();
    assert_eq!(text.to_string(), "⠀⠿\n");
}

#[test]
fn invalid_size_is_reported_without_output() {
    let mut t = Transcoder::new(Resizer::default(), Polarity::Negative);
    let bmp = Bitmap::new(4, 4);
    for size in ["0", "-5", "douze"] {
        let err = t.transcode_request(Some(&bmp), size).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSize { .. }));
    }
}
