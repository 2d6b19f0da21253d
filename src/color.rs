//! Color arithmetic shared by the block compressors.

/// Convert RGB888 to RGB565 (16-bit packed).
///
/// RGB565 format:
/// - Bits 15-11: Red (5 bits)
/// - Bits 10-5: Green (6 bits)
/// - Bits 4-0: Blue (5 bits)
pub fn rgb888_to_rgb565(r: u8, g: u8, b: u8) -> u16 {
    let r5 = (r >> 3) as u16;
    let g6 = (g >> 2) as u16;
    let b5 = (b >> 3) as u16;
    (r5 << 11) | (g6 << 5) | b5
}

/// Convert RGB565 back to RGB888, replicating the top bits into the low bits
/// so the full 8-bit range is covered.
pub fn rgb565_to_rgb888(color: u16) -> [u8; 3] {
    let r5 = (color >> 11) & 0x1F;
    let g6 = (color >> 5) & 0x3F;
    let b5 = color & 0x1F;

    [
        ((r5 << 3) | (r5 >> 2)) as u8,
        ((g6 << 2) | (g6 >> 4)) as u8,
        ((b5 << 3) | (b5 >> 2)) as u8,
    ]
}

/// Squared distance between two RGB colors with perceptual channel weights
/// (R=3, G=6, B=1).
pub fn color_distance_squared(a: &[u8; 4], b: &[u8; 3]) -> u32 {
    let dr = (a[0] as i32 - b[0] as i32) * 3;
    let dg = (a[1] as i32 - b[1] as i32) * 6;
    let db = a[2] as i32 - b[2] as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// Interpolate between two RGB565 colors at one-third steps.
///
/// - t=0: 100% c0
/// - t=1: 67% c0, 33% c1
/// - t=2: 33% c0, 67% c1
/// - t=3: 100% c1
pub fn interpolate_rgb565(c0: u16, c1: u16, t: u8) -> [u8; 3] {
    let rgb0 = rgb565_to_rgb888(c0);
    let rgb1 = rgb565_to_rgb888(c1);

    match t {
        0 => rgb0,
        1 => [
            ((2 * rgb0[0] as u16 + rgb1[0] as u16) / 3) as u8,
            ((2 * rgb0[1] as u16 + rgb1[1] as u16) / 3) as u8,
            ((2 * rgb0[2] as u16 + rgb1[2] as u16) / 3) as u8,
        ],
        2 => [
            ((rgb0[0] as u16 + 2 * rgb1[0] as u16) / 3) as u8,
            ((rgb0[1] as u16 + 2 * rgb1[1] as u16) / 3) as u8,
            ((rgb0[2] as u16 + 2 * rgb1[2] as u16) / 3) as u8,
        ],
        3 => rgb1,
        _ => panic!("Invalid interpolation parameter: {}", t),
    }
}

/// Midpoint of two RGB565 colors, used by the BC1 punch-through palette.
pub fn midpoint_rgb565(c0: u16, c1: u16) -> [u8; 3] {
    let rgb0 = rgb565_to_rgb888(c0);
    let rgb1 = rgb565_to_rgb888(c1);
    [
        ((rgb0[0] as u16 + rgb1[0] as u16) / 2) as u8,
        ((rgb0[1] as u16 + rgb1[1] as u16) / 2) as u8,
        ((rgb0[2] as u16 + rgb1[2] as u16) / 2) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb565_primaries() {
        assert_eq!(rgb888_to_rgb565(0, 0, 0), 0x0000);
        assert_eq!(rgb888_to_rgb565(255, 255, 255), 0xFFFF);
        assert_eq!(rgb888_to_rgb565(255, 0, 0), 0xF800);
        assert_eq!(rgb888_to_rgb565(0, 255, 0), 0x07E0);
        assert_eq!(rgb888_to_rgb565(0, 0, 255), 0x001F);
    }

    #[test]
    fn test_rgb565_truncates_not_rounds() {
        // 0b0000_0111 truncates to 0 in 5 bits even though it is close to 8
        assert_eq!(rgb888_to_rgb565(7, 0, 0), 0x0000);
        assert_eq!(rgb888_to_rgb565(8, 0, 0), 0x0800);
    }

    #[test]
    fn test_rgb565_roundtrip_extremes() {
        assert_eq!(rgb565_to_rgb888(0x0000), [0, 0, 0]);
        assert_eq!(rgb565_to_rgb888(0xFFFF), [255, 255, 255]);
        assert_eq!(rgb565_to_rgb888(0xF800), [255, 0, 0]);
    }

    #[test]
    fn test_rgb565_precision_loss() {
        let original = [123u8, 234, 56];
        let packed = rgb888_to_rgb565(original[0], original[1], original[2]);
        let restored = rgb565_to_rgb888(packed);

        assert!((original[0] as i16 - restored[0] as i16).abs() <= 4);
        assert!((original[1] as i16 - restored[1] as i16).abs() <= 2);
        assert!((original[2] as i16 - restored[2] as i16).abs() <= 4);
    }

    #[test]
    fn test_color_distance_identical() {
        assert_eq!(color_distance_squared(&[128, 64, 192, 255], &[128, 64, 192]), 0);
    }

    #[test]
    fn test_color_distance_green_weighted() {
        let black = [0, 0, 0, 255];
        let dist_green = color_distance_squared(&black, &[0, 100, 0]);
        let dist_blue = color_distance_squared(&black, &[0, 0, 100]);
        assert!(dist_green > dist_blue);
    }

    #[test]
    fn test_interpolate_endpoints() {
        let c0 = rgb888_to_rgb565(255, 0, 0);
        let c1 = rgb888_to_rgb565(0, 0, 255);
        assert_eq!(interpolate_rgb565(c0, c1, 0), [255, 0, 0]);
        assert_eq!(interpolate_rgb565(c0, c1, 3), [0, 0, 255]);
    }

    #[test]
    fn test_interpolate_thirds() {
        let c0 = rgb888_to_rgb565(255, 255, 255);
        let c1 = rgb888_to_rgb565(0, 0, 0);
        let one_third = interpolate_rgb565(c0, c1, 1);
        let two_thirds = interpolate_rgb565(c0, c1, 2);
        assert!(one_third[0] >= 168 && one_third[0] <= 172);
        assert!(two_thirds[0] >= 83 && two_thirds[0] <= 87);
    }

    #[test]
    fn test_midpoint() {
        let c0 = rgb888_to_rgb565(255, 255, 255);
        let c1 = rgb888_to_rgb565(0, 0, 0);
        let mid = midpoint_rgb565(c0, c1);
        assert!(mid[0] >= 126 && mid[0] <= 128);
    }
}
