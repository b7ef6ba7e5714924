use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Coloured diagnostics on stderr.
pub struct Output {
    stderr: StandardStream,
}

impl Output {
    /// Color is used only when `color` is set and stderr supports it.
    pub fn new(color: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stderr: StandardStream::stderr(color_choice),
        }
    }

    fn set_color(&mut self, color: Color) {
        let _ = self
            .stderr
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    }

    fn set_dim(&mut self) {
        let _ = self.stderr.set_color(ColorSpec::new().set_dimmed(true));
    }

    fn reset(&mut self) {
        let _ = self.stderr.reset();
    }

    /// Print an error and each of its causes, one per line.
    pub fn print_error(&mut self, err: &anyhow::Error) {
        self.set_color(Color::Red);
        let _ = write!(self.stderr, "error:");
        self.reset();
        let _ = writeln!(self.stderr, " {}", err);

        for cause in err.chain().skip(1) {
            self.set_dim();
            let _ = write!(self.stderr, "  caused by:");
            self.reset();
            let _ = writeln!(self.stderr, " {}", cause);
        }
        let _ = self.stderr.flush();
    }
}
