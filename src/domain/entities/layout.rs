//! Geometry of the label region on icon templates.

use serde::{Deserialize, Serialize};

/// Where and how large a label is drawn.
///
/// Defaults match the bundled 256x256 templates: the label is centred on
/// x = 127 with its baseline near y = 46, shrinking from 40px down to 7px
/// until it fits in 135px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelLayout {
    /// First font size tried, in pixels.
    pub start_size: u32,
    /// Smallest font size, in pixels. Reached sizes are never shrunk further.
    pub min_size: u32,
    /// Widest label that fits the label band, in pixels.
    pub max_width: u32,
    /// Horizontal centre of the label.
    pub anchor_x: i32,
    /// Vertical anchor; the baseline sits half an ascent below it.
    pub anchor_y: i32,
    /// Text colour as RGB.
    pub color: [u8; 3],
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self {
            start_size: 40,
            min_size: 7,
            max_width: 135,
            anchor_x: 127,
            anchor_y: 46,
            color: [0xFF, 0xFF, 0xFF],
        }
    }
}

impl LabelLayout {
    /// Picks the largest size, counting down from `start_size`, whose
    /// measured width fits `max_width`, stopping at `min_size`.
    ///
    /// Returns the chosen size and the width measured at that size.
    pub fn fit_size<E>(
        &self,
        mut measure: impl FnMut(u32) -> Result<f32, E>,
    ) -> Result<(u32, f32), E> {
        let mut size = self.start_size.max(self.min_size);
        #[allow(clippy::cast_precision_loss)]
        let max_width = self.max_width as f32;
        let mut width = measure(size)?;
        while size > self.min_size && width > max_width {
            size -= 1;
            width = measure(size)?;
        }
        Ok((size, width))
    }
}
