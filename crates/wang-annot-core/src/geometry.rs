//! Integer geometry types used by Wang annotation marks.
//!
//! Wang marks store their geometry in FULLSIZE image units, which map 1:1 to
//! image pixels. [`Bounds`] is the on-wire `LRECT`, [`Point`] an `AN_POINTS`
//! entry, and [`PixelRect`] the left/top/width/height form handed to sinks.

/// A point in image pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift the point by the given offsets.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

/// Mark bounding rectangle as stored on the wire (left, top, right, bottom).
///
/// For lines the rectangle may really be two points, so no ordering between
/// the edges is assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build bounds from the four raw integers in wire order.
    pub fn from_array(raw: [i32; 4]) -> Self {
        Self::new(raw[0], raw[1], raw[2], raw[3])
    }

    pub fn width(&self) -> i32 {
        self.right.wrapping_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.wrapping_sub(self.top)
    }

    /// The left/top/width/height form handed to annotation sinks.
    pub fn to_pixel_rect(&self) -> PixelRect {
        PixelRect {
            left: self.left,
            top: self.top,
            width: self.width(),
            height: self.height(),
        }
    }

    /// Translate a point given relative to the upper-left corner of these
    /// bounds into image-absolute coordinates.
    pub fn to_image(&self, relative: Point) -> Point {
        relative.offset(self.left, self.top)
    }
}

/// A rectangle in image pixel space, as left/top/width/height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

/// Page size in pixels and inches, supplied by the host image reader.
///
/// Sinks that place annotations on a physical page use this to convert the
/// pixel geometry they receive into inches.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageGeometry {
    pub width_pixels: u32,
    pub height_pixels: u32,
    pub width_inches: f64,
    pub height_inches: f64,
}

impl PageGeometry {
    pub fn new(width_pixels: u32, height_pixels: u32, width_inches: f64, height_inches: f64) -> Self {
        Self {
            width_pixels,
            height_pixels,
            width_inches,
            height_inches,
        }
    }

    /// Convert a horizontal pixel coordinate or length to inches.
    ///
    /// Returns `0.0` for a page with no horizontal extent.
    pub fn to_inches_horizontal(&self, pixels: i32) -> f64 {
        if self.width_pixels == 0 {
            return 0.0;
        }
        f64::from(pixels) / f64::from(self.width_pixels) * self.width_inches
    }

    /// Convert a vertical pixel coordinate or length to inches.
    ///
    /// Returns `0.0` for a page with no vertical extent.
    pub fn to_inches_vertical(&self, pixels: i32) -> f64 {
        if self.height_pixels == 0 {
            return 0.0;
        }
        f64::from(pixels) / f64::from(self.height_pixels) * self.height_inches
    }

    /// Convert an image point to an `(x, y)` pair in inches.
    pub fn point_to_inches(&self, point: Point) -> (f64, f64) {
        (
            self.to_inches_horizontal(point.x),
            self.to_inches_vertical(point.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_dimensions() {
        let bounds = Bounds::new(10, 10, 110, 60);
        assert_eq!(bounds.width(), 100);
        assert_eq!(bounds.height(), 50);
    }

    #[test]
    fn bounds_from_wire_order() {
        let bounds = Bounds::from_array([485, 202, 1001, 667]);
        assert_eq!(bounds.left, 485);
        assert_eq!(bounds.top, 202);
        assert_eq!(bounds.right, 1001);
        assert_eq!(bounds.bottom, 667);
    }

    #[test]
    fn bounds_to_pixel_rect() {
        let rect = Bounds::new(81, 50, 1318, 205).to_pixel_rect();
        assert_eq!(
            rect,
            PixelRect {
                left: 81,
                top: 50,
                width: 1237,
                height: 155,
            }
        );
    }

    #[test]
    fn inverted_bounds_give_negative_extent() {
        let bounds = Bounds::new(100, 100, 40, 20);
        assert_eq!(bounds.width(), -60);
        assert_eq!(bounds.height(), -80);
    }

    #[test]
    fn relative_point_to_image() {
        let bounds = Bounds::new(320, 68, 1180, 784);
        assert_eq!(bounds.to_image(Point::new(0, 0)), Point::new(320, 68));
        assert_eq!(bounds.to_image(Point::new(729, 446)), Point::new(1049, 514));
    }

    #[test]
    fn page_geometry_converts_to_inches() {
        let page = PageGeometry::new(1700, 2200, 8.5, 11.0);
        assert!((page.to_inches_horizontal(850) - 4.25).abs() < 1e-9);
        assert!((page.to_inches_vertical(200) - 1.0).abs() < 1e-9);
        let (x, y) = page.point_to_inches(Point::new(1700, 2200));
        assert!((x - 8.5).abs() < 1e-9);
        assert!((y - 11.0).abs() < 1e-9);
    }

    #[test]
    fn page_geometry_without_extent() {
        let page = PageGeometry::new(0, 0, 8.5, 11.0);
        assert_eq!(page.to_inches_horizontal(100), 0.0);
        assert_eq!(page.to_inches_vertical(100), 0.0);
    }
}
