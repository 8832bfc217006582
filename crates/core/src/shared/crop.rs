use crate::shared::error::RepairError;

/// Static pixel bounds applied to every frame before detection and before
/// writing. Half-open on the right/bottom: a pixel `(x, y)` is inside when
/// `left <= x < right` and `top <= y < bottom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    /// The identity rectangle covering a full frame.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            left: 0,
            top: 0,
            right: width,
            bottom: height,
        }
    }

    /// Checks the bounds invariant against the source dimensions.
    ///
    /// Validated once at pipeline start; `Frame::crop` relies on it.
    pub fn validate(&self, width: u32, height: u32) -> Result<(), RepairError> {
        if self.left >= self.right || self.right > width {
            return Err(RepairError::Input(format!(
                "crop columns {}..{} out of bounds for width {width}",
                self.left, self.right
            )));
        }
        if self.top >= self.bottom || self.bottom > height {
            return Err(RepairError::Input(format!(
                "crop rows {}..{} out of bounds for height {height}",
                self.top, self.bottom
            )));
        }
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_full_covers_frame() {
        let rect = CropRect::full(1920, 1080);
        assert_eq!(rect.left, 0);
        assert_eq!(rect.top, 0);
        assert_eq!(rect.width(), 1920);
        assert_eq!(rect.height(), 1080);
        assert!(rect.validate(1920, 1080).is_ok());
    }

    #[test]
    fn test_interior_rect_is_valid() {
        let rect = CropRect {
            left: 0,
            top: 0,
            right: 1680,
            bottom: 866,
        };
        assert!(rect.validate(1920, 1080).is_ok());
        assert_eq!(rect.width(), 1680);
        assert_eq!(rect.height(), 866);
    }

    #[rstest]
    #[case::zero_width(5, 0, 5, 10)]
    #[case::inverted_columns(8, 0, 5, 10)]
    #[case::zero_height(0, 5, 10, 5)]
    #[case::inverted_rows(0, 8, 10, 5)]
    #[case::right_exceeds_width(0, 0, 11, 10)]
    #[case::bottom_exceeds_height(0, 0, 10, 11)]
    fn test_invalid_rects_rejected(
        #[case] left: u32,
        #[case] top: u32,
        #[case] right: u32,
        #[case] bottom: u32,
    ) {
        let rect = CropRect {
            left,
            top,
            right,
            bottom,
        };
        let err = rect.validate(10, 10).unwrap_err();
        assert!(matches!(err, RepairError::Input(_)));
    }
}
