use ndarray::ArrayView3;

use crate::shared::crop::CropRect;

/// A single video frame: contiguous RGB bytes in row-major order.
///
/// Format conversion happens at I/O boundaries only; the domain layer
/// treats pixel data as opaque. Each frame carries its position in the
/// source's decode order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns a new frame containing only the pixels inside `rect`.
    ///
    /// The rectangle must already be validated against this frame's
    /// dimensions; the crop keeps the source index.
    pub fn crop(&self, rect: &CropRect) -> Frame {
        let ch = self.channels as usize;
        let src_row_len = self.width as usize * ch;
        let left = rect.left as usize * ch;
        let right = rect.right as usize * ch;

        let mut data = Vec::with_capacity(rect.width() as usize * rect.height() as usize * ch);
        for row in rect.top as usize..rect.bottom as usize {
            let start = row * src_row_len;
            data.extend_from_slice(&self.data[start + left..start + right]);
        }

        Frame::new(data, rect.width(), rect.height(), self.channels, self.index)
    }

    /// Views the pixel data as `(height, width, channels)`.
    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_frame(width: u32, height: u32) -> Frame {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for row in 0..height {
            for col in 0..width {
                let v = (row * width + col) as u8;
                data.extend_from_slice(&[v, v, v]);
            }
        }
        Frame::new(data, width, height, 3, 0)
    }

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 12]; // 2x2x3
        let frame = Frame::new(data.clone(), 2, 2, 3, 5);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.channels(), 3);
        assert_eq!(frame.index(), 5);
        assert_eq!(frame.data(), &data[..]);
    }

    #[test]
    fn test_clone_is_independent() {
        let frame = Frame::new(vec![100u8; 12], 2, 2, 3, 0);
        let cloned = frame.clone();
        assert_eq!(frame, cloned);
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * channels")]
    fn test_mismatched_data_length_panics_in_debug() {
        let data = vec![0u8; 10]; // wrong size for 2x2x3
        Frame::new(data, 2, 2, 3, 0);
    }

    #[test]
    fn test_as_ndarray_shape() {
        let frame = Frame::new(vec![0u8; 24], 4, 2, 3, 0);
        let arr = frame.as_ndarray();
        assert_eq!(arr.shape(), &[2, 4, 3]); // (height, width, channels)
    }

    #[test]
    fn test_as_ndarray_pixel_access() {
        // 2x2 RGB: set pixel (row=1, col=0) to red
        let mut data = vec![0u8; 12];
        data[6] = 255;
        let frame = Frame::new(data, 2, 2, 3, 0);
        let arr = frame.as_ndarray();
        assert_eq!(arr[[1, 0, 0]], 255);
        assert_eq!(arr[[1, 0, 1]], 0);
        assert_eq!(arr[[1, 0, 2]], 0);
    }

    #[test]
    fn test_crop_full_rect_is_identity() {
        let frame = gradient_frame(4, 3);
        let cropped = frame.crop(&CropRect::full(4, 3));
        assert_eq!(cropped, frame);
    }

    #[test]
    fn test_crop_dimensions() {
        let frame = gradient_frame(10, 8);
        let rect = CropRect {
            left: 2,
            top: 1,
            right: 9,
            bottom: 6,
        };
        let cropped = frame.crop(&rect);
        assert_eq!(cropped.width(), 7);
        assert_eq!(cropped.height(), 5);
        assert_eq!(cropped.data().len(), 7 * 5 * 3);
    }

    #[test]
    fn test_crop_selects_expected_pixels() {
        let frame = gradient_frame(4, 4);
        let rect = CropRect {
            left: 1,
            top: 2,
            right: 3,
            bottom: 4,
        };
        let cropped = frame.crop(&rect);
        let arr = cropped.as_ndarray();
        // Source pixel (row=2, col=1) has value 2*4+1 = 9
        assert_eq!(arr[[0, 0, 0]], 9);
        // Source pixel (row=3, col=2) has value 3*4+2 = 14
        assert_eq!(arr[[1, 1, 0]], 14);
    }

    #[test]
    fn test_crop_preserves_index() {
        let frame = Frame::new(vec![0u8; 4 * 4 * 3], 4, 4, 3, 42);
        let cropped = frame.crop(&CropRect {
            left: 0,
            top: 0,
            right: 2,
            bottom: 2,
        });
        assert_eq!(cropped.index(), 42);
    }
}
