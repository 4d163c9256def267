/// Standard six-sector HSV to RGB conversion.
///
/// `hue` is in degrees, `saturation` and `value` in `[0, 1]`; `value` above one
/// is clamped. Channels come back scaled to `[0, 255]` but are not rounded. A
/// hue outside `[0, 360)` contributes no chroma.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> [f64; 3] {
    let value = value.min(1.0);
    let sector = hue / 60.0;
    let chroma = value * saturation;
    let x = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());

    let [r, g, b] = match sector {
        s if (0.0..1.0).contains(&s) => [chroma, x, 0.0],
        s if (1.0..2.0).contains(&s) => [x, chroma, 0.0],
        s if (2.0..3.0).contains(&s) => [0.0, chroma, x],
        s if (3.0..4.0).contains(&s) => [0.0, x, chroma],
        s if (4.0..5.0).contains(&s) => [x, 0.0, chroma],
        s if (5.0..6.0).contains(&s) => [chroma, 0.0, x],
        _ => [0.0, 0.0, 0.0],
    };

    let m = value - chroma;

    [(r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [255.0, 0.0, 0.0]);
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), [0.0, 255.0, 0.0]);
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), [0.0, 0.0, 255.0]);
    }

    #[test]
    fn test_secondary_hues() {
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), [255.0, 255.0, 0.0]);
        assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0), [0.0, 255.0, 255.0]);
        assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0), [255.0, 0.0, 255.0]);
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        assert_eq!(hsv_to_rgb(200.0, 0.0, 0.5), [127.5, 127.5, 127.5]);
    }

    #[test]
    fn test_value_is_clamped_to_one() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 7.0), hsv_to_rgb(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_hue_past_full_turn_has_no_chroma() {
        assert_eq!(hsv_to_rgb(400.0, 1.0, 1.0), [0.0, 0.0, 0.0]);
        assert_eq!(hsv_to_rgb(-10.0, 1.0, 0.5), [0.0, 0.0, 0.0]);
    }
}
