//! Render scheduling: bridges rapidly-changing parameter state to the
//! pipeline engine.
//!
//! A [`RenderScheduler`] owns a named worker thread fed through an mpsc
//! command channel. Every parameter change bumps a shared generation
//! counter and cancels the in-flight render; the worker debounces bursts
//! of requests, renders the survivor, and delivers the result only if its
//! generation still matches the live counter (last-writer-wins by
//! issuance, not by completion order). Saving runs on a second, serialized
//! worker so full-resolution exports never block interactive previews.

pub mod messages;
pub mod scheduler;

pub use messages::{RenderCommand, RenderEvent};
pub use scheduler::RenderScheduler;
