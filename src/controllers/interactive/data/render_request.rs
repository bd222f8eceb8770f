use crate::core::data::frame_size::FrameSize;
use crate::core::data::viewport::ViewportState;

/// Immutable snapshot of everything one render pass needs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pub viewport: ViewportState,
    pub size: FrameSize,
}
