/// Custom user events for the GUI event loop.
///
/// These events allow the render worker to wake the main UI thread.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A render event is waiting in the presenter adapter.
    Wake,
}
