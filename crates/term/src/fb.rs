//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Alpha-blend `over` on top of `self` (`alpha` 0 = self, 255 = over).
    ///
    /// Terminals have no per-cell alpha, so fades and translucent highlights
    /// are baked into the colour.
    pub fn blend(self, over: Rgb, alpha: u8) -> Rgb {
        let a = alpha as u16;
        let mix = |base: u8, top: u8| -> u8 {
            ((base as u16 * (255 - a) + top as u16 * a + 127) / 255) as u8
        };
        Rgb::new(mix(self.r, over.r), mix(self.g, over.g), mix(self.b, over.b))
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
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
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Write `s` horizontally centred in the span `x..x+w`.
    pub fn put_str_centered(&mut self, x: u16, w: u16, y: u16, s: &str, style: CellStyle) {
        let len = s.chars().count() as u16;
        let cx = x.saturating_add(w.saturating_sub(len) / 2);
        self.put_str(cx, y, s, style);
    }

    /// Write a decimal number without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, mut value: u32, style: CellStyle) {
        let mut digits = [0u8; 10];
        let mut n = 0;
        loop {
            digits[n] = (value % 10) as u8;
            n += 1;
            value /= 10;
            if value == 0 {
                break;
            }
        }
        for (i, d) in digits[..n].iter().rev().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, (b'0' + d) as char, style);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Re-tint the background of every cell in the rectangle, keeping glyphs.
    pub fn tint_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb, alpha: u8) {
        for dy in 0..h {
            for dx in 0..w {
                if let Some(i) = self.idx(x.saturating_add(dx), y.saturating_add(dy)) {
                    let cell = &mut self.cells[i];
                    cell.style.bg = cell.style.bg.blend(color, alpha);
                }
            }
        }
    }

    /// Dump the glyphs as text, one line per row (handy in tests and logs).
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.cells.chunks(self.width.max(1) as usize) {
            out.extend(row.iter().map(|c| c.ch));
            out.push('\n');
        }
        out
    }
}
