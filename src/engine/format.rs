//! Color formatter: the display and clipboard renderings of an RGB triplet.

/// Label text for a color, e.g. `RGB(255, 0, 128)`.
pub fn format_display(r: u8, g: u8, b: u8) -> String {
    format!("RGB({r}, {g}, {b})")
}

/// Clipboard text for a color, e.g. `255,0,128`.
pub fn format_clipboard(r: u8, g: u8, b: u8) -> String {
    format!("{r},{g},{b}")
}

/// Derive the clipboard text from whatever the label currently shows by
/// dropping every character that is not a digit or a comma.
///
/// Works for both the post-update format (`RGB(10, 20, 30)`) and the initial
/// placeholder (`RGB:(0,0,0)`).
pub fn clipboard_text_from_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_comma_space_and_no_padding() {
        assert_eq!(format_display(255, 0, 128), "RGB(255, 0, 128)");
        assert_eq!(format_display(0, 0, 0), "RGB(0, 0, 0)");
        assert_eq!(format_display(7, 42, 9), "RGB(7, 42, 9)");
    }

    #[test]
    fn clipboard_has_no_spaces() {
        assert_eq!(format_clipboard(10, 20, 30), "10,20,30");
        assert_eq!(format_clipboard(0, 5, 255), "0,5,255");
    }

    #[test]
    fn every_channel_value_is_substituted_literally() {
        for v in 0..=u8::MAX {
            let (r, g, b) = (v, v.wrapping_mul(7), u8::MAX - v);
            assert_eq!(format_display(r, g, b), format!("RGB({r}, {g}, {b})"));
            assert_eq!(format_clipboard(r, g, b), format!("{r},{g},{b}"));
        }
    }

    #[test]
    fn label_is_stripped_to_digits_and_commas() {
        assert_eq!(clipboard_text_from_label("RGB(10, 20, 30)"), "10,20,30");
        assert_eq!(clipboard_text_from_label("RGB:(0,0,0)"), "0,0,0");
        assert_eq!(clipboard_text_from_label("¡Copiado!"), "");
    }

    #[test]
    fn stripped_display_equals_clipboard_format() {
        for v in [0u8, 1, 99, 100, 254, 255] {
            assert_eq!(
                clipboard_text_from_label(&format_display(v, 255 - v, v / 2)),
                format_clipboard(v, 255 - v, v / 2)
            );
        }
    }
}
