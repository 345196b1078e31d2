
pub mod async_ext;
pub mod types;
pub mod unwind;
