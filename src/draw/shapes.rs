use crate::pixel::{Color, Point};
use crate::surface::Surface;

impl Surface {
    /// Outline of the `w` x `h` rectangle whose top-left pixel is (x, y).
    ///
    /// The outline covers columns `x..=x + w - 1` and rows
    /// `y..=y + h - 1`. Nothing is drawn when `w` or `h` is not positive.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        self.draw_line(x, y, right, y, color);
        self.draw_line(x, y, x, bottom, color);
        self.draw_line(right, y, right, bottom, color);
        self.draw_line(x, bottom, right, bottom, color);
    }

    /// Solid `w` x `h` rectangle with top-left pixel (x, y); same extent
    /// as [`Surface::draw_rect`].
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let (x, y) = (i64::from(x), i64::from(y));
        let right = x + i64::from(w) - 1;
        let bottom = y + i64::from(h) - 1;
        let top = y.max(0);
        let bottom = bottom.min(i64::from(self.height()) - 1);
        for row in top..=bottom {
            self.span(x, right, row, color);
        }
    }

    /// Circle outline of radius `r` around (xc, yc), midpoint algorithm.
    ///
    /// `r == 0` plots the centre only; a negative radius draws nothing.
    pub fn draw_circle(&mut self, xc: i32, yc: i32, r: i32, color: Color) {
        let (cx, cy) = (i64::from(xc), i64::from(yc));
        if self.misses_box(cx, cy, i64::from(r)) {
            return;
        }
        walk_circle(r, |x, y| {
            self.plot(cx + x, cy + y, color);
            self.plot(cx - x, cy + y, color);
            self.plot(cx + x, cy - y, color);
            self.plot(cx - x, cy - y, color);
            self.plot(cx + y, cy + x, color);
            self.plot(cx - y, cy + x, color);
            self.plot(cx + y, cy - x, color);
            self.plot(cx - y, cy - x, color);
        });
    }

    /// Solid disc of radius `r` around (xc, yc). Each midpoint step joins
    /// its symmetric points with four horizontal chords.
    pub fn fill_circle(&mut self, xc: i32, yc: i32, r: i32, color: Color) {
        let (cx, cy) = (i64::from(xc), i64::from(yc));
        if self.misses_box(cx, cy, i64::from(r)) {
            return;
        }
        walk_circle(r, |x, y| {
            self.span(cx - x, cx + x, cy + y, color);
            self.span(cx - x, cx + x, cy - y, color);
            self.span(cx - y, cx + y, cy + x, color);
            self.span(cx - y, cx + y, cy - x, color);
        });
    }

    /// True when the square of half-side `r` around (cx, cy) lies
    /// entirely off the surface.
    fn misses_box(&self, cx: i64, cy: i64, r: i64) -> bool {
        let (w, h) = (i64::from(self.width()), i64::from(self.height()));
        cx + r < 0 || cy + r < 0 || cx - r >= w || cy - r >= h
    }

    /// [`Surface::draw_rect`] with the top-left corner and size given as
    /// points (`size.x` is the width, `size.y` the height).
    pub fn draw_rect_at(&mut self, top_left: impl Into<Point>, size: impl Into<Point>, color: Color) {
        let (p, size) = (top_left.into(), size.into());
        self.draw_rect(p.x, p.y, size.x, size.y, color);
    }

    /// [`Surface::fill_rect`] with the top-left corner and size given as points.
    pub fn fill_rect_at(&mut self, top_left: impl Into<Point>, size: impl Into<Point>, color: Color) {
        let (p, size) = (top_left.into(), size.into());
        self.fill_rect(p.x, p.y, size.x, size.y, color);
    }

    pub fn draw_circle_at(&mut self, center: impl Into<Point>, r: i32, color: Color) {
        let c = center.into();
        self.draw_circle(c.x, c.y, r, color);
    }

    pub fn fill_circle_at(&mut self, center: impl Into<Point>, r: i32, color: Color) {
        let c = center.into();
        self.fill_circle(c.x, c.y, r, color);
    }
}

/// Visit the (x, y) offsets of one octant of a radius-`r` circle,
/// starting at (0, r). The caller reflects them into the other seven.
fn walk_circle(r: i32, mut visit: impl FnMut(i64, i64)) {
    if r < 0 {
        return;
    }
    if r == 0 {
        visit(0, 0);
        return;
    }

    let mut x: i64 = 0;
    let mut y = i64::from(r);
    let mut d = 3 - 2 * y;
    visit(x, y);
    while y >= x {
        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
        visit(x, y);
    }
}
