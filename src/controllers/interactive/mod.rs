//! Interactive exploration: the pointer/slider state machine, the
//! single-flight render worker, and the [`Explorer`] tying them together.
//!
//! # Architecture
//!
//! Ports & adapters, as in the rest of the crate:
//! - **Input**: [`InputEvent`]s from whatever host drives the explorer
//! - **Output**: a [`RenderPresenterPort`] receiving [`RenderEvent`]s
//! - **Core**: `compute_frame` from `core/` does the actual rendering

pub mod data;
pub mod events;
pub mod explorer;
pub mod interaction;
pub mod ports;
pub mod render_worker;

pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use events::input::InputEvent;
pub use events::render::RenderEvent;
pub use explorer::Explorer;
pub use interaction::{InteractionController, InteractionEffect};
pub use ports::presenter::RenderPresenterPort;
pub use render_worker::RenderWorker;
