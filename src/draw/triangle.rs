use super::Segment;
use crate::pixel::{Color, Point};
use crate::surface::Surface;

impl Surface {
    /// Triangle outline: the three edges drawn with [`Surface::draw_line`].
    pub fn draw_triangle(
        &mut self,
        v1: impl Into<Point>,
        v2: impl Into<Point>,
        v3: impl Into<Point>,
        color: Color,
    ) {
        let (v1, v2, v3) = (v1.into(), v2.into(), v3.into());
        self.draw_line_between(v1, v2, color);
        self.draw_line_between(v1, v3, color);
        self.draw_line_between(v2, v3, color);
    }

    /// Solid triangle.
    ///
    /// Vertices are sorted by y and the shape is split at the middle
    /// vertex's row. Rows above it join the long edge to the upper short
    /// edge, rows below it join the long edge to the lower one, with a
    /// horizontal run on every row. Edges are rasterized exactly as
    /// `draw_line` would, so the fill covers the drawn outline. Only rows
    /// inside the surface are visited.
    pub fn fill_triangle(
        &mut self,
        v1: impl Into<Point>,
        v2: impl Into<Point>,
        v3: impl Into<Point>,
        color: Color,
    ) {
        let (mut v1, mut v2, mut v3) = (v1.into(), v2.into(), v3.into());
        if v2.y < v1.y {
            core::mem::swap(&mut v1, &mut v2);
        }
        if v3.y < v1.y {
            core::mem::swap(&mut v1, &mut v3);
        }
        if v3.y < v2.y {
            core::mem::swap(&mut v2, &mut v3);
        }

        let long = Segment::new(v1, v3);
        let upper = Segment::new(v1, v2);
        let lower = Segment::new(v2, v3);

        let middle = i64::from(v2.y);
        let top = i64::from(v1.y).max(0);
        let bottom = i64::from(v3.y).min(i64::from(self.height()) - 1);
        for y in top..=bottom {
            // The long edge spans every row from v1 to v3.
            let Some(across) = long.row_extent(y) else {
                continue;
            };
            if y <= middle {
                self.join_extents(across, upper.row_extent(y), y, color);
            }
            if y >= middle {
                self.join_extents(across, lower.row_extent(y), y, color);
            }
        }
    }

    fn join_extents(&mut self, a: (i64, i64), b: Option<(i64, i64)>, y: i64, color: Color) {
        let Some(b) = b else {
            return;
        };
        self.span(a.0.min(b.0), a.1.max(b.1), y, color);
    }
}
