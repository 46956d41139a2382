use crate::{Value, separated_by};
use std::fmt::{self, Display, Write};
use time::{Date, Time};

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}
macro_rules! write_float {
    ($out:ident, $value:expr) => {{
        let mut buffer = ryu::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}

/// Render a value into the buffer (including proper quoting / escaping).
pub(crate) fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => write_value_none(out),
        Value::Bool(v) => write_value_bool(out, *v),
        Value::Int64(v) => write_integer!(out, *v),
        Value::Float64(v) => write_float!(out, *v),
        Value::Numeric(v) => {
            let _ = write!(out, "{}", v);
        }
        Value::String(v) => write_value_string(out, v),
        Value::Bytes(v) => write_value_blob(out, v.as_ref()),
        Value::Date(v) => {
            out.push('\'');
            write_value_date(out, v);
            out.push('\'');
        }
        Value::Timestamp(v) => {
            let date_time = v.to_utc();
            out.push('\'');
            write_value_date(out, &date_time.date());
            out.push('T');
            write_value_time(out, &date_time.time());
            out.push_str("Z'");
        }
        Value::Array(v) => {
            out.push('[');
            separated_by(out, v, |out, v| write_value(out, v), ",");
            out.push(']');
        }
        Value::Struct(fields) => {
            out.push('{');
            separated_by(
                out,
                fields,
                |out, (name, v)| {
                    if let Some(name) = name {
                        out.push_str(name);
                        out.push_str(": ");
                    }
                    write_value(out, v);
                },
                ",",
            );
            out.push('}');
        }
    };
}

/// Render NULL marker.
fn write_value_none(out: &mut String) {
    out.push_str("NULL")
}

/// Render boolean literal.
fn write_value_bool(out: &mut String, value: bool) {
    out.push_str(["false", "true"][value as usize])
}

/// Render and escape a string literal using single quotes.
fn write_value_string(out: &mut String, value: &str) {
    out.push('\'');
    let mut position = 0;
    for (i, c) in value.char_indices() {
        if c == '\'' {
            out.push_str(&value[position..i]);
            out.push_str("''");
            position = i + 1;
        } else if c == '\n' {
            out.push_str(&value[position..i]);
            out.push_str("\\n");
            position = i + 1;
        }
    }
    out.push_str(&value[position..]);
    out.push('\'');
}

/// Render a blob literal using hex escapes.
fn write_value_blob(out: &mut String, value: &[u8]) {
    out.push('\'');
    for b in value {
        let _ = write!(out, "\\x{:X}", b);
    }
    out.push('\'');
}

fn write_value_date(out: &mut String, value: &Date) {
    let _ = write!(
        out,
        "{:04}-{:02}-{:02}",
        value.year(),
        value.month() as u8,
        value.day()
    );
}

fn write_value_time(out: &mut String, value: &Time) {
    let mut subsecond = value.nanosecond();
    let mut width = 9;
    while width > 1 && subsecond % 10 == 0 {
        subsecond /= 10;
        width -= 1;
    }
    let _ = write!(
        out,
        "{:02}:{:02}:{:02}.{:0width$}",
        value.hour(),
        value.minute(),
        value.second(),
        subsecond
    );
}

impl Value {
    /// Write the diagnostic representation of this value into `out`.
    ///
    /// Total over every constructible value; the output is meant for logs and
    /// error reports, not for parsing back.
    pub fn render(&self, out: &mut String) {
        write_value(out, self);
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_value(&mut out, self);
        f.write_str(&out)
    }
}
