//! Color presets

use typeward_contract::combinators::{product, product_n, range, regex};

preset! {
    /// `(r, g, b)` with each channel in `0..=255`.
    pub fn rgb() = "RGB",
        product_n(range(0, 255).expect("channel range"), 3).expect("RGB is well formed");

    /// `(hue, saturation, lightness)`: degrees in `0..=360`, percentages in
    /// `0..=100`.
    pub fn hsl() = "HSL",
        product([
            range(0, 360).expect("hue range").into(),
            range(0, 100).expect("saturation range").into(),
            range(0, 100).expect("lightness range").into(),
        ])
        .expect("HSL is well formed");

    /// `#rgb` or `#rrggbb`.
    pub fn hex() = "HEX",
        regex(r"#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})").expect("HEX pattern compiles");
}
