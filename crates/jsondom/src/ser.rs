//! Rendering values as JSON text.
use core::fmt;
use std::io;

use crate::{value::number, Value};

/// Render `value` as JSON text.
///
/// With `pretty`, every element and entry goes on its own line, indented by two spaces per
/// nesting level. Object entries follow the map's iteration order.
#[must_use]
pub fn serialize(value: &Value, pretty: bool) -> String {
    let mut output = String::new();
    // Writing into a `String` never fails
    let _ = serialize_into(&mut output, value, pretty);
    output
}

/// Render `value` as JSON text into `writer`.
///
/// # Errors
///
/// Only if `writer` fails.
pub fn serialize_into<W: fmt::Write>(writer: W, value: &Value, pretty: bool) -> fmt::Result {
    let mut serializer = Serializer {
        writer,
        indent: if pretty { Some(0) } else { None },
    };
    serializer.write_value(value)
}

/// Render `value` as JSON text into an I/O stream.
///
/// # Errors
///
/// Propagates the first error reported by `writer`.
pub fn write_to<W: io::Write>(writer: W, value: &Value, pretty: bool) -> io::Result<()> {
    let mut adapter = IoAdapter {
        inner: writer,
        error: None,
    };
    match serialize_into(&mut adapter, value, pretty) {
        Ok(()) => Ok(()),
        Err(fmt::Error) => Err(adapter
            .error
            .unwrap_or_else(|| io::Error::other("formatter error"))),
    }
}

/// Bridges `fmt::Write` to `io::Write`, keeping the underlying I/O error.
struct IoAdapter<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for IoAdapter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|error| {
            self.error = Some(error);
            fmt::Error
        })
    }
}

struct Serializer<W> {
    writer: W,
    /// Current nesting depth in pretty mode, `None` for compact output.
    indent: Option<usize>,
}

impl<W: fmt::Write> Serializer<W> {
    fn write_value(&mut self, value: &Value) -> fmt::Result {
        match value {
            Value::Null => self.writer.write_str("null"),
            Value::Number(n) => number::write_number(&mut self.writer, *n),
            Value::Boolean(true) => self.writer.write_str("true"),
            Value::Boolean(false) => self.writer.write_str("false"),
            Value::String(s) => write_escaped(&mut self.writer, s),
            Value::Array(array) => {
                if array.is_empty() {
                    return self.writer.write_str("[]");
                }
                self.writer.write_char('[')?;
                self.enter();
                for (idx, item) in array.iter().enumerate() {
                    self.separator(idx)?;
                    self.write_value(item)?;
                }
                self.leave()?;
                self.writer.write_char(']')
            }
            Value::Object(object) => {
                if object.is_empty() {
                    return self.writer.write_str("{}");
                }
                self.writer.write_char('{')?;
                self.enter();
                for (idx, (key, item)) in object.iter().enumerate() {
                    self.separator(idx)?;
                    write_escaped(&mut self.writer, key)?;
                    self.writer
                        .write_str(if self.indent.is_some() { ": " } else { ":" })?;
                    self.write_value(item)?;
                }
                self.leave()?;
                self.writer.write_char('}')
            }
        }
    }

    fn enter(&mut self) {
        if let Some(depth) = self.indent.as_mut() {
            *depth += 1;
        }
    }

    fn leave(&mut self) -> fmt::Result {
        if let Some(depth) = self.indent.as_mut() {
            *depth -= 1;
            let depth = *depth;
            self.newline(depth)?;
        }
        Ok(())
    }

    /// Write whatever precedes the element at `idx`.
    fn separator(&mut self, idx: usize) -> fmt::Result {
        if idx > 0 {
            self.writer.write_char(',')?;
        }
        if let Some(depth) = self.indent {
            self.newline(depth)?;
        }
        Ok(())
    }

    fn newline(&mut self, depth: usize) -> fmt::Result {
        self.writer.write_char('\n')?;
        for _ in 0..depth {
            self.writer.write_str("  ")?;
        }
        Ok(())
    }
}

fn write_escaped<W: fmt::Write>(writer: &mut W, s: &str) -> fmt::Result {
    writer.write_char('"')?;
    let mut start = 0;
    for (idx, ch) in s.char_indices() {
        let escape = match ch {
            '"' => "\\\"",
            '\\' => "\\\\",
            '\n' => "\\n",
            '\r' => "\\r",
            '\t' => "\\t",
            '\u{08}' => "\\b",
            '\u{0c}' => "\\f",
            '\u{00}'..='\u{1f}' => "",
            _ => continue,
        };
        writer.write_str(&s[start..idx])?;
        if escape.is_empty() {
            write!(writer, "\\u{:04x}", u32::from(ch))?;
        } else {
            writer.write_str(escape)?;
        }
        start = idx + ch.len_utf8();
    }
    writer.write_str(&s[start..])?;
    writer.write_char('"')
}

/// Compact JSON text; the alternate flag (`{:#}`) renders it pretty.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pretty = f.alternate();
        serialize_into(f, self, pretty)
    }
}
