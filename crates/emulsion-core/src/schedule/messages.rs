use std::path::PathBuf;
use std::time::Duration;

use crate::frame::Image;
use crate::preset::Preset;

/// Commands sent from the owning thread to the render worker.
pub enum RenderCommand {
    /// Replace the source image. Regenerates both capped working buffers
    /// (preview and full resolution) and invalidates in-flight renders.
    LoadSource { image: Image, generation: u64 },

    /// Render the preview buffer with the given effective preset. Bursts
    /// of these inside the debounce window collapse to the newest one.
    Render { preset: Preset, generation: u64 },

    /// Export the full-resolution buffer. Handed off to the serialized
    /// save worker; never rendered on the interactive path.
    Save { preset: Preset, path: PathBuf },
}

/// Results sent from the workers back to the event consumer.
pub enum RenderEvent {
    /// A preview render finished and its generation was still live at
    /// delivery time.
    Preview {
        image: Image,
        generation: u64,
        elapsed: Duration,
    },

    /// The engine could not produce a usable result. Carries the
    /// untouched (resized) source so the consumer never shows a stale
    /// filtered frame.
    Fallback {
        image: Image,
        generation: u64,
        reason: String,
    },

    /// A full-resolution export reached disk.
    Saved { path: PathBuf, elapsed: Duration },

    /// An export failed. Render state is untouched.
    SaveFailed { path: PathBuf, message: String },
}
