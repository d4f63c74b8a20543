/// Colour of logical pixel `(i, j)`.
///
/// Dark and bright tones alternate in a checkerboard so that every pair of
/// horizontally or vertically adjacent logical pixels differs strongly in
/// luma; a small hue shift keeps the palette from being purely two-tone.
pub fn logical_color(i: usize, j: usize) -> [u8; 3] {
    let shade = ((i * 7 + j * 13) % 5) as u8;
    if (i + j) % 2 == 0 {
        [20 + shade * 10, 30 + shade * 7, 40 + shade * 5]
    } else {
        [200 + shade * 10, 190 + shade * 8, 170 + shade * 12]
    }
}

/// Logical pixel-art image of `cols × rows` pixels, RGB row-major.
pub fn pixel_art_rgb(cols: usize, rows: usize) -> Vec<u8> {
    assert!(cols > 0 && rows > 0, "image dimensions must be positive");
    let mut img = Vec::with_capacity(cols * rows * 3);
    for j in 0..rows {
        for i in 0..cols {
            img.extend_from_slice(&logical_color(i, j));
        }
    }
    img
}

/// Nearest-neighbour resize of an RGB image to `out_w × out_h`.
pub fn resize_nearest(
    src: &[u8],
    cols: usize,
    rows: usize,
    out_w: usize,
    out_h: usize,
) -> Vec<u8> {
    assert_eq!(src.len(), cols * rows * 3, "source buffer size mismatch");
    let mut out = Vec::with_capacity(out_w * out_h * 3);
    for y in 0..out_h {
        let sy = y * rows / out_h;
        for x in 0..out_w {
            let sx = x * cols / out_w;
            let off = (sy * cols + sx) * 3;
            out.extend_from_slice(&src[off..off + 3]);
        }
    }
    out
}

/// Integer nearest-neighbour upscale with per-axis factors.
pub fn upscale_rgb(src: &[u8], cols: usize, rows: usize, kx: usize, ky: usize) -> Vec<u8> {
    resize_nearest(src, cols, rows, cols * kx, rows * ky)
}

/// Single-colour image.
pub fn solid_rgb(width: usize, height: usize, color: [u8; 3]) -> Vec<u8> {
    color
        .iter()
        .copied()
        .cycle()
        .take(width * height * 3)
        .collect()
}

/// Blend every pixel that sits on a cell border with its left/upper
/// neighbour, imitating the soft edges of bilinear rescaling.
pub fn soften_cell_edges(img: &mut [u8], width: usize, height: usize, k: usize) {
    let src = img.to_vec();
    for y in 0..height {
        for x in 0..width {
            let on_x = x % k == 0 && x > 0;
            let on_y = y % k == 0 && y > 0;
            if !(on_x || on_y) {
                continue;
            }
            let nx = if on_x { x - 1 } else { x };
            let ny = if on_y { y - 1 } else { y };
            for c in 0..3 {
                let a = src[(y * width + x) * 3 + c] as u16;
                let b = src[(ny * width + nx) * 3 + c] as u16;
                img[(y * width + x) * 3 + c] = ((a + b) / 2) as u8;
            }
        }
    }
}
