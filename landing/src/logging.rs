//! Tracing subscriber that writes to the browser console.
//!
//! Each formatted event is buffered and flushed as a single console call at
//! the matching level, so devtools filtering by level keeps working.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Install the global subscriber. A second call is a no-op.
pub fn init(max_level: Level) {
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_max_level(max_level)
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::with_capacity(128),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = console_line(&self.buf);
        if line.is_empty() {
            return;
        }
        let msg = JsValue::from_str(&line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&msg),
            Level::WARN => web_sys::console::warn_1(&msg),
            Level::INFO => web_sys::console::info_1(&msg),
            _ => web_sys::console::debug_1(&msg),
        }
    }
}

/// Formatted event bytes to a console message, without the trailing newline.
fn console_line(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf).trim_end_matches(['\n', '\r']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_newline() {
        assert_eq!(console_line(b" INFO mounted\n"), " INFO mounted");
        assert_eq!(console_line(b"line\r\n"), "line");
    }

    #[test]
    fn keeps_inner_newlines() {
        assert_eq!(console_line(b"a\nb\n"), "a\nb");
    }

    #[test]
    fn empty_buffer_is_empty_line() {
        assert!(console_line(b"").is_empty());
        assert!(console_line(b"\n").is_empty());
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(console_line(&[0x66, 0xff, 0x0a]), "f\u{fffd}");
    }
}
