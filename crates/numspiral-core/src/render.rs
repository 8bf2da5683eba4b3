//! Text rendering of spiral grids.
//!
//! One line per row. Every token is followed by the separator, so each
//! line ends with a trailing separator before the newline:
//!
//! ```
//! let text = numspiral_core::render(8).unwrap();
//! assert_eq!(text, "6 7 * \n5 0 1 \n4 3 2 \n");
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::{CellValue, Result, SpiralLayout, EMPTY_MARKER};

/// Tokens used when writing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Printed in place of empty cells
    pub marker: String,

    /// Printed after every cell
    pub separator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            marker: EMPTY_MARKER.to_string(),
            separator: " ".to_string(),
        }
    }
}

/// Writes spiral layouts as text.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Text of `layout`, formatted on demand.
    pub fn display<'a>(&'a self, layout: &'a SpiralLayout) -> Rendered<'a> {
        Rendered {
            options: &self.options,
            layout,
        }
    }

    /// Write every row of `layout` to `writer`.
    pub fn write_to<W: Write>(&self, layout: &SpiralLayout, writer: &mut W) -> io::Result<()> {
        write!(writer, "{}", self.display(layout))
    }

    /// Render `layout` into a string.
    pub fn render(&self, layout: &SpiralLayout) -> String {
        self.display(layout).to_string()
    }
}

/// A layout paired with render options, see [`Renderer::display`].
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    options: &'a RenderOptions,
    layout: &'a SpiralLayout,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.layout.rows() {
            for cell in &row {
                match cell {
                    CellValue::Number(v) => write!(f, "{}", v)?,
                    CellValue::Empty => f.write_str(&self.options.marker)?,
                }
                f.write_str(&self.options.separator)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Build the spiral for `n` and render it with the default options.
pub fn render(n: i64) -> Result<String> {
    let layout = SpiralLayout::new(n)?;
    Ok(Renderer::default().render(&layout))
}
