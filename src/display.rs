use std::io::{self, Write};

// ANSI: clear screen and move the cursor home
const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";
const BOLD_ON: &str = "\x1b[1m";
const BOLD_OFF: &str = "\x1b[0m";

/// Maximum content lines drawn under the title.
pub const MAX_CONTENT_LINES: usize = 4;

pub struct DisplayManager<W: Write> {
    out: W,
}

impl DisplayManager<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DisplayManager<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn clear_display(&mut self) -> io::Result<()> {
        self.out.write_all(CLEAR_SEQUENCE.as_bytes())?;
        self.out.flush()
    }

    pub fn render_content(&mut self, title: &str, content: &str) -> io::Result<()> {
        self.out.write_all(CLEAR_SEQUENCE.as_bytes())?;

        // Draw title (bold, at the top)
        writeln!(self.out, "{}{}{}", BOLD_ON, title, BOLD_OFF)?;

        // Draw content lines
        for line in content.lines().take(MAX_CONTENT_LINES) {
            writeln!(self.out, "{}", line)?;
        }

        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
