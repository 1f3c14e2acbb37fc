use crate::core::models::PixelColor;
use crate::global_constants::LOG_TAG_PALETTE;

/// Colors committed by finished selection sessions, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: Vec<PixelColor>,
}

impl Palette {
    pub fn append(&mut self, color: PixelColor) {
        log::debug!("{} appending {}", LOG_TAG_PALETTE, color.to_hex());
        self.colors.push(color);
    }

    pub fn colors(&self) -> &[PixelColor] {
        &self.colors
    }

    pub fn get(&self, index: usize) -> Option<PixelColor> {
        self.colors.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Swatches grouped into display rows, each paired with its palette index.
    pub fn rows(&self, columns: usize) -> Vec<Vec<(usize, PixelColor)>> {
        let columns = columns.max(1);

        self.colors
            .iter()
            .copied()
            .enumerate()
            .collect::<Vec<_>>()
            .chunks(columns)
            .map(|row| row.to_vec())
            .collect()
    }
}
