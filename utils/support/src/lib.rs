//! Small validated value types shared by the carousel crates.

use derive_more::Display;
use serde::Deserialize;
use thiserror::Error;

/// Why a length could not be used as a viewport dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("`{axis}` must be a finite number")]
    NonFinite { axis: &'static str },
    #[error("`{axis}` must not be negative")]
    Negative { axis: &'static str },
}

/// Unchecked two-dimensional extent, as reported by a host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Display, Deserialize)]
#[display("{width}x{height}")]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

fn checked_dimension(axis: &'static str, value: f64) -> Result<f64, GeometryError> {
    if !value.is_finite() {
        return Err(GeometryError::NonFinite { axis });
    }
    if value < 0.0 {
        return Err(GeometryError::Negative { axis });
    }
    Ok(value)
}

/// Viewport extent with finite, non-negative dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Display)]
#[display("{_0}")]
pub struct ViewportSize(Size);

impl ViewportSize {
    pub fn try_new(size: Size) -> Result<Self, GeometryError> {
        checked_dimension("width", size.width)?;
        checked_dimension("height", size.height)?;
        Ok(Self(size))
    }

    pub const fn width(self) -> f64 {
        self.0.width
    }

    pub const fn height(self) -> f64 {
        self.0.height
    }

    pub const fn as_size(self) -> Size {
        self.0
    }
}

impl TryFrom<Size> for ViewportSize {
    type Error = GeometryError;

    fn try_from(value: Size) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ViewportSize> for Size {
    fn from(value: ViewportSize) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Display)]
#[display("({x}, {y})")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Placement of one item inside the scrolling content.
#[derive(Debug, Clone, Copy, PartialEq, Display)]
#[display("{origin} {size}")]
pub struct Frame {
    pub origin: Point,
    pub size: Size,
}

impl Frame {
    /// Frame of the `ordinal`-th item of a horizontal strip of
    /// viewport-sized pages.
    pub fn horizontal_page(ordinal: i64, viewport: ViewportSize) -> Self {
        Self {
            origin: Point {
                x: ordinal as f64 * viewport.width(),
                y: 0.0,
            },
            size: viewport.as_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Size::new(f64::NAN, 1.0), GeometryError::NonFinite { axis: "width" })]
    #[case(Size::new(1.0, f64::INFINITY), GeometryError::NonFinite { axis: "height" })]
    #[case(Size::new(-1.0, 1.0), GeometryError::Negative { axis: "width" })]
    #[case(Size::new(1.0, -0.5), GeometryError::Negative { axis: "height" })]
    fn viewport_rejects_unusable_dimensions(#[case] size: Size, #[case] expected: GeometryError) {
        assert_eq!(ViewportSize::try_new(size), Err(expected));
    }

    #[test]
    fn viewport_accepts_zero_area() -> Result<(), GeometryError> {
        let viewport = ViewportSize::try_new(Size::new(0.0, 0.0))?;
        assert_eq!(viewport.as_size(), Size::default());
        Ok(())
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(3, 300.0)]
    #[case(-1, -100.0)]
    fn horizontal_page_is_linear_in_ordinal(
        #[case] ordinal: i64,
        #[case] expected_x: f64,
    ) -> Result<(), GeometryError> {
        let viewport = ViewportSize::try_new(Size::new(100.0, 40.0))?;
        let frame = Frame::horizontal_page(ordinal, viewport);
        assert_eq!(
            frame,
            Frame {
                origin: Point {
                    x: expected_x,
                    y: 0.0
                },
                size: Size::new(100.0, 40.0),
            }
        );
        Ok(())
    }

    #[test]
    fn size_deserializes_from_json() -> Result<(), serde_json::Error> {
        let size: Size = serde_json::from_str(r#"{"width": 320.0, "height": 480.0}"#)?;
        assert_eq!(size, Size::new(320.0, 480.0));
        assert_eq!(size.to_string(), "320x480");
        Ok(())
    }

    #[test]
    fn error_messages_name_the_axis() {
        assert_eq!(
            GeometryError::Negative { axis: "height" }.to_string(),
            "`height` must not be negative"
        );
    }
}
