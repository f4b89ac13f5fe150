/// Transmission layer modules
pub mod pipeline;
pub mod receiver;
pub mod sender;
pub mod text_processor;

pub use pipeline::*;
pub use receiver::*;
pub use sender::*;
pub use text_processor::*;
