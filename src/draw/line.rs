use crate::pixel::{Color, Point};
use crate::surface::Surface;

/// A line in canonical orientation.
///
/// Endpoints are ordered so the major axis coordinate increases: x for
/// shallow lines (`|dx| >= |dy|`), y for steep ones. Step `i` of the
/// Bresenham walk sits at `start + i` on the major axis and
/// `start + minor_inc * offset(i)` on the minor axis.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Segment {
    start: Point,
    steep: bool,
    minor_inc: i64,
    major: i64,
    minor: i64,
}

impl Segment {
    pub(crate) fn new(from: Point, to: Point) -> Self {
        let dx = i64::from(to.x) - i64::from(from.x);
        let dy = i64::from(to.y) - i64::from(from.y);
        let steep = dx.abs() < dy.abs();

        let reversed = if steep { dy < 0 } else { dx < 0 };
        let (start, dx, dy) = if reversed { (to, -dx, -dy) } else { (from, dx, dy) };

        let (major, minor) = if steep { (dy, dx) } else { (dx, dy) };
        Self {
            start,
            steep,
            minor_inc: if minor < 0 { -1 } else { 1 },
            major,
            minor: minor.abs(),
        }
    }

    /// Minor-axis offset reached after `step` steps.
    ///
    /// Closed form of the error walk: `ceil((2 * minor * step - major) / (2 * major))`.
    fn offset(&self, step: i64) -> i64 {
        if self.major == 0 {
            return 0;
        }
        let (major, minor) = (i128::from(self.major), i128::from(self.minor));
        let n = 2 * minor * i128::from(step) + major - 1;
        // Bounded by `minor` for steps on the line.
        n.div_euclid(2 * major) as i64
    }

    /// Error term before taking step `step + 1`, given the offset at `step`.
    fn error(&self, step: i64, offset: i64) -> i64 {
        let (major, minor) = (i128::from(self.major), i128::from(self.minor));
        let e = 2 * minor * (i128::from(step) + 1) - major - 2 * major * i128::from(offset);
        // Always within (2 * (minor - major), 2 * minor].
        e as i64
    }

    /// First step whose offset reaches `q`. Only meaningful for shallow,
    /// non-horizontal lines.
    fn first_step_at(&self, q: i64) -> i64 {
        if q <= 0 {
            return 0;
        }
        let (major, minor) = (i128::from(self.major), i128::from(self.minor));
        ((2 * major * i128::from(q) - major) / (2 * minor)) as i64 + 1
    }

    fn point(&self, step: i64, offset: i64) -> Point {
        let (sx, sy) = (i64::from(self.start.x), i64::from(self.start.y));
        let (x, y) = if self.steep {
            (sx + self.minor_inc * offset, sy + step)
        } else {
            (sx + step, sy + self.minor_inc * offset)
        };
        // Every step lies between the two endpoints.
        Point::new(x as i32, y as i32)
    }

    /// Steps `first..=last` of the walk.
    fn steps(self, first: i64, last: i64) -> LinePoints {
        let offset = self.offset(first);
        LinePoints {
            error: self.error(first, offset),
            segment: self,
            step: first,
            last,
            offset,
        }
    }

    /// Every point of the line.
    #[cfg(test)]
    fn points(self) -> LinePoints {
        self.steps(0, self.major)
    }

    /// The points whose major coordinate falls inside a `width` x
    /// `height` surface. At most `width` or `height` points are visited.
    pub(crate) fn clipped(self, width: u32, height: u32) -> LinePoints {
        let (start, limit) = if self.steep {
            (i64::from(self.start.y), i64::from(height))
        } else {
            (i64::from(self.start.x), i64::from(width))
        };
        let first = (-start).clamp(0, self.major + 1);
        let last = (limit - 1 - start).min(self.major);
        self.steps(first, last)
    }

    /// Leftmost and rightmost x of the points on row `y`, or `None` when
    /// the line does not reach that row.
    pub(crate) fn row_extent(&self, y: i64) -> Option<(i64, i64)> {
        let (sx, sy) = (i64::from(self.start.x), i64::from(self.start.y));
        if self.steep {
            let step = y - sy;
            if !(0..=self.major).contains(&step) {
                return None;
            }
            let x = sx + self.minor_inc * self.offset(step);
            return Some((x, x));
        }

        let q = (y - sy) * self.minor_inc;
        if !(0..=self.minor).contains(&q) {
            return None;
        }
        if self.minor == 0 {
            return Some((sx, sx + self.major));
        }
        let first = self.first_step_at(q);
        let last = (self.first_step_at(q + 1) - 1).min(self.major);
        Some((sx + first, sx + last))
    }
}

/// Pixels of the Bresenham line between two points, one per major-axis
/// step, both endpoints included. Horizontal and vertical lines fall out
/// as lines whose error term never turns positive.
#[derive(Clone, Debug)]
pub(crate) struct LinePoints {
    segment: Segment,
    step: i64,
    last: i64,
    offset: i64,
    error: i64,
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.step > self.last {
            return None;
        }
        let point = self.segment.point(self.step, self.offset);

        if self.step < self.last {
            let Segment { major, minor, .. } = self.segment;
            if self.error > 0 {
                self.offset += 1;
                self.error += 2 * (minor - major);
            } else {
                self.error += 2 * minor;
            }
        }
        self.step += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last - self.step + 1).max(0);
        let n = usize::try_from(remaining).unwrap_or(usize::MAX);
        (n, usize::try_from(remaining).ok())
    }
}

impl Surface {
    /// Draw a 1-pixel line from (x0, y0) to (x1, y1), both ends included.
    ///
    /// Only the part of the line that crosses the surface is walked.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.draw_line_between(Point::new(x0, y0), Point::new(x1, y1), color);
    }

    /// [`Surface::draw_line`] taking its endpoints as points.
    pub fn draw_line_between(&mut self, from: impl Into<Point>, to: impl Into<Point>, color: Color) {
        let segment = Segment::new(from.into(), to.into());
        for p in segment.clipped(self.width(), self.height()) {
            self.set_pixel(p.x, p.y, color);
        }
    }
}
