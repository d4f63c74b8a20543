//! 3×3 Sobel gradients with reflect padding.
//!
//! Borders mirror without repeating the edge sample (`-1 → 1`, `w → w-2`),
//! so a flat border produces zero response and image edges never read as
//! grid lines.
use crate::image::{GrayImage, ImageView, ImageViewMut};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Horizontal and vertical derivative fields.
#[derive(Clone, Debug)]
pub struct Sobel {
    pub gx: GrayImage,
    pub gy: GrayImage,
}

#[inline]
fn reflect(i: isize, n: usize) -> usize {
    let last = n as isize - 1;
    let mut i = i;
    if i < 0 {
        i = -i;
    } else if i > last {
        i = 2 * last - i;
    }
    i.clamp(0, last) as usize
}

/// Sobel derivatives of `gray`.
pub fn sobel_reflect(gray: &GrayImage) -> Sobel {
    let (w, h) = (gray.w, gray.h);
    let mut gx = GrayImage::new(w, h);
    let mut gy = GrayImage::new(w, h);
    if gray.is_empty() {
        return Sobel { gx, gy };
    }

    for y in 0..h {
        let yi = y as isize;
        let rows = [
            gray.row(reflect(yi - 1, h)),
            gray.row(y),
            gray.row(reflect(yi + 1, h)),
        ];
        let out_gx = gx.row_mut(y);
        for x in 0..w {
            let xi = x as isize;
            let cols = [reflect(xi - 1, w), x, reflect(xi + 1, w)];
            let mut sum_x = 0.0;
            for (ky, row) in rows.iter().enumerate() {
                let k = &SOBEL_KERNEL_X[ky];
                sum_x += row[cols[0]] * k[0] + row[cols[1]] * k[1] + row[cols[2]] * k[2];
            }
            out_gx[x] = sum_x;
        }
        let out_gy = gy.row_mut(y);
        for x in 0..w {
            let xi = x as isize;
            let cols = [reflect(xi - 1, w), x, reflect(xi + 1, w)];
            let mut sum_y = 0.0;
            for (ky, row) in rows.iter().enumerate() {
                let k = &SOBEL_KERNEL_Y[ky];
                sum_y += row[cols[0]] * k[0] + row[cols[1]] * k[1] + row[cols[2]] * k[2];
            }
            out_gy[x] = sum_y;
        }
    }

    Sobel { gx, gy }
}
