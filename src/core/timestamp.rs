//! Timestamp formatting utilities
//!
//! Formatters render dates with a date pattern such as
//! `yyyy-MM-dd HH:mm:ss.SSS`. The pattern is compiled once into a strftime
//! string and rendered with `chrono` in local time.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::{self, Write};

/// Pattern used by both built-in formatters unless replaced
pub const DEFAULT_DATE_PATTERN: &str = "yyyy-MM-dd HH:mm:ss.SSS";

/// Compiled date pattern
///
/// Supported pattern letters:
///
/// | Letters | Meaning                      |
/// |---------|------------------------------|
/// | `yyyy`  | four digit year (`yy`: two)  |
/// | `M`..`MMMM` | month number, abbreviated or full name |
/// | `d`, `dd` | day of month               |
/// | `H`, `HH` | hour (00-23)               |
/// | `h`, `hh` | hour (01-12)               |
/// | `m`, `mm` | minute                     |
/// | `s`, `ss` | second                     |
/// | `S`..`SSSSSSSSS` | fractional seconds  |
/// | `a`     | AM/PM marker                 |
/// | `E`..`EEEE` | weekday name             |
/// | `D`     | day of year                  |
/// | `Z`, `z`| offset, zone name            |
///
/// Text inside single quotes is copied verbatim, `''` is a literal quote.
/// Any other letter is copied verbatim.
///
/// # Examples
///
/// ```
/// use rust_named_logger::DateFormat;
///
/// let format = DateFormat::new("yyyy/MM/dd");
/// assert_eq!(format.strftime(), "%Y/%m/%d");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
    strftime: String,
}

impl DateFormat {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let strftime = compile_pattern(&pattern);
        Self { pattern, strftime }
    }

    /// The pattern this format was created from
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The equivalent strftime string handed to `chrono`
    pub fn strftime(&self) -> &str {
        &self.strftime
    }

    /// Render the given instant
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut out = String::with_capacity(self.strftime.len() + 8);
        // An unrenderable field must not abort the log call; keep what was written.
        let _ = write!(out, "{}", datetime.format(&self.strftime));
        out
    }

    /// Render the current local time
    pub fn format_now(&self) -> String {
        self.format(&Local::now())
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_PATTERN)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

fn compile_pattern(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            // '' outside a quoted run is a literal quote
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            i += 1;
            while i < chars.len() {
                if chars[i] == '\'' {
                    if chars.get(i + 1) == Some(&'\'') {
                        out.push('\'');
                        i += 2;
                        continue;
                    }
                    break;
                }
                push_literal(&mut out, chars[i]);
                i += 1;
            }
            i += 1;
            continue;
        }

        if !c.is_ascii_alphabetic() {
            push_literal(&mut out, c);
            i += 1;
            continue;
        }

        let mut run = 1;
        while chars.get(i + run) == Some(&c) {
            run += 1;
        }
        i += run;

        match field_specifier(c, run) {
            Some(directive) => out.push_str(directive),
            None => {
                for _ in 0..run {
                    push_literal(&mut out, c);
                }
            }
        }
    }

    out
}

fn field_specifier(letter: char, run: usize) -> Option<&'static str> {
    let directive = match (letter, run) {
        ('y', 2) => "%y",
        ('y', _) => "%Y",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', _) => "%B",
        ('d', 1) => "%-d",
        ('d', _) => "%d",
        ('H', 1) => "%-H",
        ('H', _) => "%H",
        ('h', 1) => "%-I",
        ('h', _) => "%I",
        ('m', 1) => "%-M",
        ('m', _) => "%M",
        ('s', 1) => "%-S",
        ('s', _) => "%S",
        ('S', 1..=3) => "%3f",
        ('S', 4..=6) => "%6f",
        ('S', _) => "%9f",
        ('a', _) => "%p",
        ('E', 1..=3) => "%a",
        ('E', _) => "%A",
        ('D', _) => "%j",
        ('Z', _) => "%z",
        ('z', _) => "%Z",
        _ => return None,
    };
    Some(directive)
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}
