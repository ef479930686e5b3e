/// Deterministic, backend-independent text width estimate.
pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// Clamps a box origin so `[origin, origin + size]` stays inside `[0, limit]`.
///
/// A box larger than the limit is pinned to `0`.
pub(super) fn clamp_box_origin(origin: f64, size: f64, limit: f64) -> f64 {
    origin.min(limit - size).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::{clamp_box_origin, estimate_label_text_width_px};

    #[test]
    fn box_origin_is_pulled_back_inside_limit() {
        assert_eq!(clamp_box_origin(-20.0, 50.0, 300.0), 0.0);
        assert_eq!(clamp_box_origin(280.0, 50.0, 300.0), 250.0);
        assert_eq!(clamp_box_origin(100.0, 50.0, 300.0), 100.0);
        assert_eq!(clamp_box_origin(100.0, 500.0, 300.0), 0.0);
    }

    #[test]
    fn text_width_is_never_narrower_than_one_glyph_box() {
        assert_eq!(estimate_label_text_width_px(".", 10.0), 10.0);
    }
}
