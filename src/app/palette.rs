use ggez::graphics::Color;

/// Board colors
pub struct Palette {
    pub background_color: Color,
    pub border_color: Color,
    pub border_thickness: f32,
    pub snake_color: Color,
    pub apple_color: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background_color: Color::BLACK,
            border_color: Color::from_rgb(93, 216, 228),
            border_thickness: 1.,
            snake_color: Color::from_rgb(0, 255, 0),
            apple_color: Color::from_rgb(255, 0, 0),
        }
    }
}
