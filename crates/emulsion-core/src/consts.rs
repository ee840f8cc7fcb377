/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Small epsilon to avoid division by zero in floating-point comparisons.
pub const EPSILON: f32 = 1e-6;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Default long-edge cap (in pixels) for the interactive preview buffer.
pub const DEFAULT_PREVIEW_MAX_DIMENSION: usize = 1280;

/// Default long-edge cap (in pixels) for the full-resolution render buffer.
/// Large enough to be a no-op for typical camera output.
pub const DEFAULT_FULL_MAX_DIMENSION: usize = 8192;

/// Default debounce window for interactive render requests, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Maximum number of selective color adjustments honored per preset.
/// Matches the fixed-size uniform array of the reference shader.
pub const MAX_SELECTIVE_COLORS: usize = 8;
