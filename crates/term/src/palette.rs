//! Terminal colors for block color ids.

use crate::fb::Rgb;
use crate::types::BlockColor;

/// RGB used to draw a block of the given color.
pub fn block_rgb(color: BlockColor) -> Rgb {
    match color {
        BlockColor::SkyBlue => Rgb::new(102, 191, 255),
        BlockColor::Pink => Rgb::new(255, 109, 194),
        BlockColor::Gold => Rgb::new(255, 203, 0),
        BlockColor::Lime => Rgb::new(0, 158, 47),
        BlockColor::Orange => Rgb::new(255, 161, 0),
        BlockColor::Purple => Rgb::new(200, 122, 255),
        BlockColor::Beige => Rgb::new(211, 176, 131),
        BlockColor::Violet => Rgb::new(135, 60, 190),
        BlockColor::Maroon => Rgb::new(190, 33, 55),
        BlockColor::DarkBlue => Rgb::new(0, 82, 172),
    }
}
