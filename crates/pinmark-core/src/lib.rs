pub mod color;
pub mod config;
pub mod consts;
pub mod error;
pub mod event;
pub mod io;
pub mod marker;
pub mod render;
pub mod session;
pub mod transform;
