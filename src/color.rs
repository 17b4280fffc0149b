// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    // Deep red and a pale grey, every particle gets one of these
    pub const PALETTE: [Color; 2] = [Color::from_u32(0x900f0fff), Color::from_u32(0xf2f2f2ff)];

    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // CSS color string for canvas fill/stroke styles
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            self.a as f64 / 255.0
        )
    }

    pub fn with_alpha(self, alpha: f64) -> Color {
        Color {
            a: (alpha.max(0.0).min(1.0) * 255.0).round() as u8,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_rrggbbaa() {
        let c = Color::from_u32(0x900f0f80);
        assert_eq!(c, Color { r: 0x90, g: 0x0f, b: 0x0f, a: 0x80 });
    }

    #[test]
    fn css_string_uses_unit_alpha() {
        assert_eq!(Color::PALETTE[0].to_css(), "rgba(144, 15, 15, 1.000)");
        assert_eq!(Color::from_u32(0x00000000).to_css(), "rgba(0, 0, 0, 0.000)");
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(Color::PALETTE[1].with_alpha(2.0).a, 255);
        assert_eq!(Color::PALETTE[1].with_alpha(-1.0).a, 0);
        assert_eq!(Color::PALETTE[1].with_alpha(0.4).a, 102);
    }
}
