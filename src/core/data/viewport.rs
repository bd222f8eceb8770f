use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;

pub const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 150;
pub const MIN_MAX_ITERATIONS: u32 = 50;
pub const MAX_MAX_ITERATIONS: u32 = 1000;
pub const MAX_ITERATIONS_STEP: u32 = 25;

/// Each click-zoom multiplies the magnification by this factor.
pub const ZOOM_FACTOR: f64 = 2.5;

/// Width of the plane visible at zoom 1 (twice the 1.5 base half-width).
pub const BASE_PLANE_SPAN: f64 = 3.0;

/// Snaps a requested iteration budget onto the slider's grid.
#[must_use]
pub fn snap_max_iterations(requested: u32) -> u32 {
    let clamped = requested.clamp(MIN_MAX_ITERATIONS, MAX_MAX_ITERATIONS);
    let offset = clamped - MIN_MAX_ITERATIONS;
    let steps = (offset + MAX_ITERATIONS_STEP / 2) / MAX_ITERATIONS_STEP;

    (MIN_MAX_ITERATIONS + steps * MAX_ITERATIONS_STEP).min(MAX_MAX_ITERATIONS)
}

/// The region of the plane currently shown, plus the iteration budget and
/// colour scheme used to render it.
///
/// `zoom` starts at 1 and only ever grows through [`ViewportState::zoom_in`];
/// the only way back is [`ViewportState::reset`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportState {
    center: Complex,
    zoom: f64,
    max_iterations: u32,
    scheme: ColourSchemeKind,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            scheme: ColourSchemeKind::default(),
        }
    }
}

impl ViewportState {
    /// A zoom-1 view of `center`. The iteration budget is snapped onto the
    /// slider grid.
    #[must_use]
    pub fn new(center: Complex, max_iterations: u32, scheme: ColourSchemeKind) -> Self {
        Self {
            center,
            zoom: DEFAULT_ZOOM,
            max_iterations: snap_max_iterations(max_iterations),
            scheme,
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn scheme(&self) -> ColourSchemeKind {
        self.scheme
    }

    /// Plane distance covered by the full width (and height) of the frame.
    #[must_use]
    pub fn plane_span(&self) -> f64 {
        BASE_PLANE_SPAN / self.zoom
    }

    pub fn set_center(&mut self, center: Complex) {
        self.center = center;
    }

    /// Returns the value actually stored after clamping and snapping.
    pub fn set_max_iterations(&mut self, requested: u32) -> u32 {
        self.max_iterations = snap_max_iterations(requested);
        self.max_iterations
    }

    pub fn set_scheme(&mut self, scheme: ColourSchemeKind) {
        self.scheme = scheme;
    }

    pub fn zoom_in(&mut self) {
        self.zoom *= ZOOM_FACTOR;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn readout(&self) -> ViewportReadout {
        ViewportReadout::from(self)
    }
}

/// Text shown next to the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportReadout {
    pub center_real: String,
    pub center_imag: String,
    pub magnification: String,
}

impl From<&ViewportState> for ViewportReadout {
    fn from(viewport: &ViewportState) -> Self {
        // `{:.1}` rounds ties to even; the readout rounds them away from zero.
        let magnification = (viewport.zoom * 10.0).round() / 10.0;

        // Adding 0.0 folds -0.0 into 0.0 so the readout never shows "-0.000…".
        Self {
            center_real: format!("{:.10}", viewport.center.real + 0.0),
            center_imag: format!("{:.10}", viewport.center.imag + 0.0),
            magnification: format!("{magnification:.1}×"),
        }
    }
}
