use crate::PixelOffset;

/// Height of the caret drawn under the card. The caret tip, not the card edge, touches the anchor.
pub const CARET_HEIGHT: f64 = 3.0;

/// Centers an element of the given measured size horizontally on the anchor and lifts it so the
/// caret tip sits exactly on the anchored pixel.
pub fn pixel_position_offset(width: f64, height: f64) -> PixelOffset {
    PixelOffset {
        x: -(width / 2.0),
        y: -(height + CARET_HEIGHT),
    }
}

/// Signature of an offset hook handed to the map host.
pub type PixelOffsetFn = fn(f64, f64) -> PixelOffset;
