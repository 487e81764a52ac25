//! Framebuffer for terminal rendering.
//!
//! A flat grid of styled character cells. The view draws into it and the
//! renderer flushes it; neither touches the terminal through the other.

use crossterm::style::Color;

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Reset every cell to the blank default.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write one cell; out-of-range coordinates are dropped.
    pub fn put(&mut self, x: u16, y: u16, ch: char, fg: Color) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { ch, fg };
        }
    }

    /// Write a string left to right, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Color) {
        for (offset, ch) in text.chars().enumerate() {
            let cx = x.saturating_add(offset as u16);
            if cx >= self.width {
                break;
            }
            self.put(cx, y, ch, fg);
        }
    }

    /// Iterate rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put(3, 1, '#', Color::Red);
        assert_eq!(
            fb.get(3, 1),
            Some(Cell {
                ch: '#',
                fg: Color::Red
            })
        );
        assert_eq!(fb.get(0, 0).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn test_out_of_range_writes_are_dropped() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put(2, 0, '#', Color::Reset);
        fb.put(0, 2, '#', Color::Reset);
        assert!(fb.rows().flatten().all(|c| c.ch == ' '));
    }

    #[test]
    fn test_put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abcdef", Color::Reset);
        let row: String = fb.rows().next().unwrap().iter().map(|c| c.ch).collect();
        assert_eq!(row, "  ab");
    }
}
