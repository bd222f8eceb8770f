pub mod colour;
pub mod complex;
pub mod frame_buffer;
pub mod frame_size;
pub mod point;
pub mod viewport;
