pub mod generate_frame_buffer;
pub mod ports;
