use ndarray::Array2;

/// tan(22.5 deg), the boundary between horizontal and diagonal gradients.
const TAN_22_5: f32 = 0.414_213_56;

/// Edge classification of a pixel after non-maximum suppression.
#[derive(Clone, Copy, PartialEq, Eq)]
enum EdgeClass {
    None,
    Weak,
    Strong,
}

/// Canny edge detection on an 8-bit gray plane.
///
/// Pipeline: 3x3 Sobel (replicated border) -> L1 magnitude `|gx| + |gy|` ->
/// non-maximum suppression along the quantized gradient direction ->
/// hysteresis with 8-connectivity. Pixels above `high` seed edges; pixels
/// above `low` join an edge only when connected to a seed.
///
/// Returns a binary plane of the same size: 255 on edges, 0 elsewhere.
pub fn canny(gray: &Array2<u8>, low: f32, high: f32) -> Array2<u8> {
    let (h, w) = gray.dim();
    let (gx, gy) = sobel(gray);
    let magnitude = Array2::from_shape_fn((h, w), |(row, col)| {
        (gx[[row, col]].abs() + gy[[row, col]].abs()) as f32
    });

    let mut classes = Array2::from_elem((h, w), EdgeClass::None);
    let mut seeds: Vec<(usize, usize)> = Vec::new();
    let mag_at = |row: isize, col: isize| -> f32 {
        if row < 0 || col < 0 || row >= h as isize || col >= w as isize {
            0.0
        } else {
            magnitude[[row as usize, col as usize]]
        }
    };

    for row in 0..h {
        for col in 0..w {
            let m = magnitude[[row, col]];
            if m <= low {
                continue;
            }
            let dx = gx[[row, col]];
            let dy = gy[[row, col]];
            let (r, c) = (row as isize, col as isize);
            let xs = dx.abs() as f32;
            let ys = dy.abs() as f32;
            let tg22x = xs * TAN_22_5;

            let is_max = if ys < tg22x {
                m > mag_at(r, c - 1) && m >= mag_at(r, c + 1)
            } else if ys > tg22x + 2.0 * xs {
                m > mag_at(r - 1, c) && m >= mag_at(r + 1, c)
            } else {
                let s: isize = if (dx < 0) != (dy < 0) { -1 } else { 1 };
                m > mag_at(r - 1, c - s) && m > mag_at(r + 1, c + s)
            };

            if !is_max {
                continue;
            }
            if m > high {
                classes[[row, col]] = EdgeClass::Strong;
                seeds.push((row, col));
            } else {
                classes[[row, col]] = EdgeClass::Weak;
            }
        }
    }

    // Hysteresis: grow strong edges into connected weak pixels.
    while let Some((row, col)) = seeds.pop() {
        for dr in -1..=1_isize {
            for dc in -1..=1_isize {
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                if nr < 0 || nc < 0 || nr >= h as isize || nc >= w as isize {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                if classes[[nr, nc]] == EdgeClass::Weak {
                    classes[[nr, nc]] = EdgeClass::Strong;
                    seeds.push((nr, nc));
                }
            }
        }
    }

    classes.mapv(|class| if class == EdgeClass::Strong { 255 } else { 0 })
}

/// 3x3 Sobel derivatives with replicated borders.
///
/// Kernels:
///   gx: [-1 0 1; -2 0 2; -1 0 1]
///   gy: [-1 -2 -1; 0 0 0; 1 2 1]
pub fn sobel(gray: &Array2<u8>) -> (Array2<i32>, Array2<i32>) {
    let (h, w) = gray.dim();
    let mut gx = Array2::<i32>::zeros((h, w));
    let mut gy = Array2::<i32>::zeros((h, w));
    if h == 0 || w == 0 {
        return (gx, gy);
    }

    let px = |row: isize, col: isize| -> i32 {
        let r = row.clamp(0, h as isize - 1) as usize;
        let c = col.clamp(0, w as isize - 1) as usize;
        gray[[r, c]] as i32
    };

    for row in 0..h as isize {
        for col in 0..w as isize {
            let x = -px(row - 1, col - 1) + px(row - 1, col + 1) - 2 * px(row, col - 1)
                + 2 * px(row, col + 1)
                - px(row + 1, col - 1)
                + px(row + 1, col + 1);
            let y = -px(row - 1, col - 1) - 2 * px(row - 1, col) - px(row - 1, col + 1)
                + px(row + 1, col - 1)
                + 2 * px(row + 1, col)
                + px(row + 1, col + 1);
            gx[[row as usize, col as usize]] = x;
            gy[[row as usize, col as usize]] = y;
        }
    }

    (gx, gy)
}
