use std::num::NonZeroUsize;

/// The Brainfuck tape: a line of byte cells with a movable head.
///
/// The tape is logically unbounded in both directions. It is realized as a
/// contiguous buffer that doubles whenever the head walks off either end.
/// Growing to the right appends fresh cells; growing to the left shifts the
/// existing contents into the upper half of the doubled buffer, so every
/// written cell keeps its value and its position relative to the others.
/// The head starts at the middle of the initial buffer, leaving room to move
/// either way before any growth happens.
#[derive(Debug)]
pub struct Tape {
    cells: Vec<u8>,
    head: usize,
}

impl Tape {
    pub fn new(initial_length: NonZeroUsize) -> Self {
        let length = initial_length.get();
        Tape {
            cells: vec![0; length],
            head: length / 2,
        }
    }

    /// Value of the cell under the head. Cells never written read 0.
    pub fn read(&self) -> u8 {
        self.cells[self.head]
    }

    /// Sets the cell under the head.
    pub fn write(&mut self, value: u8) {
        self.cells[self.head] = value;
    }

    /// Adds 1 to the cell under the head, wrapping 255 back to 0.
    pub fn increment(&mut self) {
        self.cells[self.head] = self.cells[self.head].wrapping_add(1);
    }

    /// Subtracts 1 from the cell under the head, wrapping 0 back to 255.
    pub fn decrement(&mut self) {
        self.cells[self.head] = self.cells[self.head].wrapping_sub(1);
    }

    /// Moves the head one cell to the right, doubling the buffer in place
    /// when the head steps past the upper end.
    pub fn move_right(&mut self) {
        self.head += 1;
        if self.head >= self.cells.len() {
            let grown = self.cells.len() * 2;
            self.cells.resize(grown, 0);
        }
    }

    /// Moves the head one cell to the left. Stepping off the lower end
    /// doubles the buffer and relocates the contents into its upper half;
    /// the head lands on the last fresh cell, at `len / 2 - 1`.
    pub fn move_left(&mut self) {
        if self.head == 0 {
            let old_length = self.cells.len();
            let mut grown = vec![0; old_length * 2];
            grown[old_length..].copy_from_slice(&self.cells);
            self.cells = grown;
            self.head = old_length - 1;
        } else {
            self.head -= 1;
        }
    }

    /// Current head offset within the physical buffer.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Current physical buffer length.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
}
