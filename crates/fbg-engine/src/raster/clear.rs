use crate::paint::Color;
use crate::surface::Framebuffer;

/// Fills the whole framebuffer with `color`.
///
/// The first scanline is written pixel by pixel through the channel offsets;
/// every following row is a bulk copy of it. Non-channel bytes of the first
/// row are carried down unchanged.
pub fn clear(fb: &mut Framebuffer, color: Color) {
    let encoded = fb.format().encode(color);
    for x in 0..fb.width() {
        fb.put(x, 0, &encoded);
    }

    for y in 1..fb.height() {
        fb.copy_row(0, y);
    }
}
