pub mod object_input_stream;
pub mod object_output_stream;
pub mod type_descriptor;

// "OBJS" in ASCII.
pub const STREAM_MAGIC: u32 = 0x4F42_4A53;
pub const STREAM_VERSION: u16 = 1;
pub const STREAM_HEADER_SIZE: usize = 6;
