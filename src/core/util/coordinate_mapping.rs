//! Affine mapping between canvas pixels and the complex plane.
//!
//! The full frame width always spans `3 / zoom` plane units, and so does the
//! full frame height, with the viewport center at the middle of the frame.
//! Pixel `y` grows downwards and so does the imaginary part.

use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::{CanvasPosition, Point};
use crate::core::data::viewport::ViewportState;

#[must_use]
pub fn pixel_to_complex(
    position: CanvasPosition,
    size: FrameSize,
    viewport: &ViewportState,
) -> Complex {
    let width = f64::from(size.width());
    let height = f64::from(size.height());
    let span = viewport.plane_span();
    let center = viewport.center();

    Complex {
        real: center.real + (position.x - width / 2.0) * span / width,
        imag: center.imag + (position.y - height / 2.0) * span / height,
    }
}

/// Convenience for integer pixel positions used by the render loop.
#[must_use]
pub fn point_to_complex(point: Point, size: FrameSize, viewport: &ViewportState) -> Complex {
    pixel_to_complex(
        CanvasPosition::new(f64::from(point.x), f64::from(point.y)),
        size,
        viewport,
    )
}

/// Inverse of [`pixel_to_complex`].
#[must_use]
pub fn complex_to_pixel(
    point: Complex,
    size: FrameSize,
    viewport: &ViewportState,
) -> CanvasPosition {
    let width = f64::from(size.width());
    let height = f64::from(size.height());
    let span = viewport.plane_span();
    let center = viewport.center();

    CanvasPosition {
        x: (point.real - center.real) * width / span + width / 2.0,
        y: (point.imag - center.imag) * height / span + height / 2.0,
    }
}

/// Position as a fraction of the frame, `(0, 0)` top-left and `(1, 1)`
/// bottom-right.
#[must_use]
pub fn pixel_to_fraction(position: CanvasPosition, size: FrameSize) -> (f64, f64) {
    (
        position.x / f64::from(size.width()),
        position.y / f64::from(size.height()),
    )
}

/// Plane point under a frame fraction. Same mapping as [`pixel_to_complex`]
/// with the frame size factored out.
#[must_use]
pub fn fraction_to_complex(fraction: (f64, f64), viewport: &ViewportState) -> Complex {
    let span = viewport.plane_span();
    let center = viewport.center();

    Complex {
        real: center.real + (fraction.0 - 0.5) * span,
        imag: center.imag + (fraction.1 - 0.5) * span,
    }
}
