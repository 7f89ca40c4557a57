//! Fixed RGB palette shared by every pattern mode

use rand::Rng;

/// 8-bit RGB color
pub type Color = [u8; 3];

/// Border color, also the initial value of every canvas pixel
pub const BLACK: Color = [0, 0, 0];
/// Palette red
pub const RED: Color = [255, 0, 0];
/// Palette green
pub const GREEN: Color = [0, 255, 0];
/// Palette blue
pub const BLUE: Color = [0, 0, 255];

/// Cell colors in palette order
pub const PALETTE: [Color; 3] = [RED, GREEN, BLUE];

/// Draw one palette color uniformly at random
pub fn random_color<R: Rng>(rng: &mut R) -> Color {
    match rng.random_range(0..3_u8) {
        0 => RED,
        1 => GREEN,
        _ => BLUE,
    }
}
