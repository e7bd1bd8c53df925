/// Frame - one rendered image of the configurator scene
#[derive(Debug, Clone)]
pub struct Frame {
    /// Configuration revision the frame was rendered from
    pub revision: u64,
    pub width: u32,
    pub height: u32,
    /// RGBA pixels, row-major, top row first
    pub pixels: Vec<[u8; 4]>,
}

impl Frame {
    pub fn new(revision: u64, width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Self {
        Self { revision, width, height, pixels }
    }

    /// Pixel data as bytes, ready for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_are_rgba_in_row_order() {
        let frame = Frame::new(0, 2, 1, vec![[1, 2, 3, 4], [5, 6, 7, 8]]);
        assert_eq!(frame.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(frame.pixel(1, 0), Some([5, 6, 7, 8]));
        assert_eq!(frame.pixel(2, 0), None);
    }
}
