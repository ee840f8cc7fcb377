pub mod error;
pub mod consts;
pub mod frame;
pub mod color;
pub mod filters;
pub mod preset;
pub mod overrides;
pub mod pipeline;
pub mod schedule;
pub mod catalog;
pub mod io;
