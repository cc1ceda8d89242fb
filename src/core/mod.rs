pub mod buildcore;
pub mod log;
pub mod queue;
pub mod sync;
