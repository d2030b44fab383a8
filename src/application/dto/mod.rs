mod icon_stream;

pub use icon_stream::IconStream;
