/// A single camera frame: contiguous byte samples in row-major order,
/// `width * height * depth` bytes long.
///
/// Frames are captured once (one copy per host callback) and treated as
/// immutable afterwards; the engine never aliases a stored frame with the
/// caller-owned buffer.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    depth: u8,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, depth: u8) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (depth as usize),
            "data length must equal width * height * depth"
        );
        Self {
            data,
            width,
            height,
            depth,
        }
    }

    /// Captures a frame by copying a caller-owned buffer.
    pub fn from_raw(buffer: &[u8], width: u32, height: u32, depth: u8) -> Self {
        Self::new(buffer.to_vec(), width, height, depth)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per pixel.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Total byte length of the frame.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
