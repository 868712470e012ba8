use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pb_braille::binarize::binarize;
use pb_braille::encode::encode_cells;
use pb_core::config::Polarity;
use pb_core::frame::Bitmap;

fn gradient(width: u32, height: u32) -> Bitmap {
    let mut bmp = Bitmap::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = ((x ^ y) & 0xFF) as u8;
            bmp.set_pixel(x, y, (v, v.wrapping_mul(3), 255 - v));
        }
    }
    bmp
}

fn bench_encode(c: &mut Criterion) {
    let bmp = gradient(320, 240);
    let bin = binarize(&bmp);

    c.bench_function("binarize_320x240", |b| {
        b.iter(|| binarize(black_box(&bmp)));
    });
    c.bench_function("encode_cells_320x240", |b| {
        b.iter(|| encode_cells(black_box(&bin), Polarity::Negative));
    });
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
