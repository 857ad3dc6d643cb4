//! Integer scan conversion onto a [`Surface`](crate::Surface).
//!
//! Every routine writes through the surface's clipped pixel store, so
//! shapes may extend past the edges: off-surface pixels are dropped.

mod line;
mod shapes;
mod triangle;

use crate::pixel::Color;
use crate::surface::Surface;

pub(crate) use line::Segment;

impl Surface {
    /// Plot a pixel given in wide coordinates, dropping anything that
    /// does not fit `i32`.
    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set_pixel(x, y, color);
        }
    }

    /// Horizontal run covering columns `x0..=x1` (either order) of row `y`.
    ///
    /// Same pixels as `draw_line(x0, y, x1, y)`, clipped before iterating.
    fn span(&mut self, x0: i64, x1: i64, y: i64, color: Color) {
        let Ok(y) = i32::try_from(y) else {
            return;
        };
        if y < 0 || y >= self.height() as i32 {
            return;
        }
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let lo = lo.max(0);
        let hi = hi.min(i64::from(self.width()) - 1);
        for x in lo..=hi {
            // lo..=hi lies inside 0..width, which fits i32.
            self.set_pixel(x as i32, y, color);
        }
    }
}
