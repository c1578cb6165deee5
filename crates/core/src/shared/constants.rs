/// Number of prior frames retained for averaging when no configuration is
/// supplied. A history of 1 means pairwise averaging of each frame with its
/// predecessor.
pub const DEFAULT_HISTORY_SIZE: usize = 1;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
