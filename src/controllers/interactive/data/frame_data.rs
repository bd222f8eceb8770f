use std::time::Duration;

use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::viewport::ViewportState;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub frame: FrameBuffer,
    /// The viewport the frame was rendered from.
    pub viewport: ViewportState,
    pub render_duration: Duration,
}
