use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use bucket_core::FailureReason;
use console::style;

const CLEAR_LINE: &str = "\r\x1b[K";

/// Terminal output shared by the reporter, the verbose failure logger and
/// the result printer.
///
/// The mutex is the print lock: every call writes whole lines under it, so
/// the in-place progress line is never interleaved with another line.
pub struct Console {
    out: Mutex<Box<dyn Write + Send>>,
    colors: bool,
}

impl Console {
    /// Plain output, no colour codes.
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
            colors: false,
        }
    }

    /// Coloured when stdout is a terminal that supports it.
    pub fn stdout() -> Self {
        Self::new(io::stdout()).with_colors(console::colors_enabled())
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Overwrites the current line without ending it.
    pub fn progress(&self, line: &str) {
        self.write(format_args!("{CLEAR_LINE}{line}"));
    }

    pub fn accepted(&self, bucket: &str) {
        self.write(format_args!(
            "{CLEAR_LINE}{}\n",
            style(format!("[+] {bucket}")).force_styling(self.colors).green()
        ));
    }

    pub fn failure(&self, target: &str, reason: &FailureReason) {
        self.write(format_args!(
            "{CLEAR_LINE}{}\n",
            style(format!("[-] {target} ({reason})"))
                .force_styling(self.colors)
                .red()
        ));
    }

    /// Operator message printed on its own line while a run is in progress.
    pub fn notice(&self, message: &str) {
        self.write(format_args!(
            "{CLEAR_LINE}{}\n",
            style(format!("[!] {message}"))
                .force_styling(self.colors)
                .yellow()
        ));
    }

    pub fn clear_line(&self) {
        self.write(format_args!("{CLEAR_LINE}"));
    }

    fn write(&self, args: std::fmt::Arguments<'_>) {
        let mut out = self.lock();
        // Terminal write failures are not worth aborting a run over.
        let _ = out.write_fmt(args);
        let _ = out.flush();
    }

    fn lock(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.out.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
