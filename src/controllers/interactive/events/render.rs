use crate::controllers::interactive::data::frame_data::FrameData;

#[derive(Debug)]
pub enum RenderEvent {
    /// Emitted before the pixel loop of a pass starts, for loading indicators.
    Started { generation: u64 },
    Frame(FrameData),
}
