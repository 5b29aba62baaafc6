//! Where reports are written.

/// A line-oriented sink for reports.
///
/// Sinks implement the two raw writes; the shaped helpers are shared so
/// every sink formats a report identically.
pub trait Output {
    /// Write one line of regular output.
    fn line(&mut self, text: String);

    /// Write one line of diagnostic output.
    fn diagnostic(&mut self, text: String);

    /// `Heading:`
    fn section(&mut self, name: &str) {
        self.line(format!("{name}:"));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(format!("{key}: {value}"));
    }

    fn list_item(&mut self, text: &str) {
        self.line(format!("  - {text}"));
    }

    /// A file that was (or would be) created.
    fn added_item(&mut self, text: &str) {
        self.line(format!("  + {text}"));
    }

    /// A file that was (or would be) deleted.
    fn removed_item(&mut self, text: &str) {
        self.line(format!("  - {text}"));
    }

    fn warning(&mut self, msg: &str) {
        self.diagnostic(format!("warning: {msg}"));
    }

    fn divider(&mut self, label: &str) {
        self.line(format!("── {label} ──"));
    }

    fn preformatted(&mut self, text: &str) {
        self.line(text.to_owned());
    }

    fn newline(&mut self) {
        self.line(String::new());
    }
}

/// The outcome of a command, rendered once it has finished.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// stdout for output, stderr for diagnostics.
#[derive(Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, text: String) {
        println!("{text}");
    }

    fn diagnostic(&mut self, text: String) {
        eprintln!("{text}");
    }
}

/// Keeps every line, diagnostics included, in the order written.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn line(&mut self, text: String) {
        self.lines.push(text);
    }

    fn diagnostic(&mut self, text: String) {
        self.lines.push(text);
    }
}
