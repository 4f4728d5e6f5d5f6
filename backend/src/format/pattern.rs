//! Date patterns in the familiar `yyyy-MM-dd HH:mm:ss` letter style.
//!
//! Supported letters:
//!
//! | Letter | Meaning                       | Example        |
//! |--------|-------------------------------|----------------|
//! | `y`    | year (`yy` gives two digits)  | `2024`, `24`   |
//! | `M`    | month (`MMM`/`MMMM` names)    | `03`, `Mar`    |
//! | `d`    | day of month                  | `07`           |
//! | `E`    | weekday (`EEEE` full name)    | `Thu`          |
//! | `a`    | AM/PM marker                  | `PM`           |
//! | `H`    | hour 0-23                     | `17`           |
//! | `k`    | hour 1-24                     | `24`           |
//! | `K`    | hour 0-11                     | `5`            |
//! | `h`    | hour 1-12                     | `5`            |
//! | `m`    | minute                        | `04`           |
//! | `s`    | second                        | `09`           |
//! | `S`    | millisecond                   | `045`          |
//! | `z`    | zone abbreviation             | `EST`          |
//! | `Z`    | offset `+HHMM`                | `-0500`        |
//! | `X`    | ISO offset (`XXX` = `+HH:MM`) | `Z`, `-05:00`  |
//!
//! Text between single quotes is literal; `''` is a single quote. Other
//! non-letter characters are copied through.

use std::fmt::Write;

use chrono::{DateTime, Datelike, Offset, Timelike};
use chrono_tz::Tz;

use crate::error::{FormatterError, FormatterResult};

/// Pattern whose rendering is the XSD dateTime layout with a numeric offset.
pub const XSD_DATE_TIME_PATTERN: &str = "yyyy-MM-dd'T'HH:mm:ss";

/// Default time-of-day pattern.
pub const DEFAULT_DATE_PATTERN: &str = "h:mm:ss";

const SUPPORTED_LETTERS: &str = "yMdEaHkKhmsSzZX";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Field { letter: char, width: usize },
}

/// A parsed date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    tokens: Vec<Token>,
}

impl DatePattern {
    pub fn parse(pattern: &str) -> FormatterResult<Self> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\'' {
                let mut text = String::new();
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    push_literal(&mut tokens, "'");
                    continue;
                }
                let mut closed = false;
                while let Some(q) = chars.next() {
                    if q == '\'' {
                        if chars.peek() == Some(&'\'') {
                            chars.next();
                            text.push('\'');
                        } else {
                            closed = true;
                            break;
                        }
                    } else {
                        text.push(q);
                    }
                }
                if !closed {
                    return Err(FormatterError::invalid_pattern(pattern, "unterminated quote"));
                }
                push_literal(&mut tokens, &text);
            } else if c.is_ascii_alphabetic() {
                if !SUPPORTED_LETTERS.contains(c) {
                    return Err(FormatterError::invalid_pattern(
                        pattern,
                        format!("unknown pattern letter '{}'", c),
                    ));
                }
                let mut width = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    width += 1;
                }
                tokens.push(Token::Field { letter: c, width });
            } else {
                push_literal(&mut tokens, c.encode_utf8(&mut [0; 4]));
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            tokens,
        })
    }

    /// The pattern text as given.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether this is the canonical XSD dateTime pattern.
    pub fn is_xsd_date_time(&self) -> bool {
        self.source == XSD_DATE_TIME_PATTERN
    }

    pub fn render(&self, dt: &DateTime<Tz>) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Field { letter, width } => render_field(&mut out, dt, *letter, *width),
            }
        }
        out
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self {
            source: DEFAULT_DATE_PATTERN.to_string(),
            tokens: vec![
                Token::Field { letter: 'h', width: 1 },
                Token::Literal(":".to_string()),
                Token::Field { letter: 'm', width: 2 },
                Token::Literal(":".to_string()),
                Token::Field { letter: 's', width: 2 },
            ],
        }
    }
}

fn push_literal(tokens: &mut Vec<Token>, text: &str) {
    if let Some(Token::Literal(last)) = tokens.last_mut() {
        last.push_str(text);
    } else {
        tokens.push(Token::Literal(text.to_string()));
    }
}

fn pad(out: &mut String, value: i64, width: usize) {
    if value < 0 {
        let _ = write!(out, "-{:0width$}", -value, width = width);
    } else {
        let _ = write!(out, "{:0width$}", value, width = width);
    }
}

fn render_field(out: &mut String, dt: &DateTime<Tz>, letter: char, width: usize) {
    match letter {
        'y' if width == 2 => pad(out, dt.year().rem_euclid(100) as i64, 2),
        'y' => pad(out, dt.year() as i64, width),
        'M' if width >= 4 => {
            let _ = write!(out, "{}", dt.format("%B"));
        }
        'M' if width == 3 => {
            let _ = write!(out, "{}", dt.format("%b"));
        }
        'M' => pad(out, dt.month() as i64, width),
        'd' => pad(out, dt.day() as i64, width),
        'E' if width >= 4 => {
            let _ = write!(out, "{}", dt.format("%A"));
        }
        'E' => {
            let _ = write!(out, "{}", dt.format("%a"));
        }
        'a' => out.push_str(if dt.hour() < 12 { "AM" } else { "PM" }),
        'H' => pad(out, dt.hour() as i64, width),
        'k' => pad(out, if dt.hour() == 0 { 24 } else { dt.hour() as i64 }, width),
        'K' => pad(out, (dt.hour() % 12) as i64, width),
        'h' => pad(out, dt.hour12().1 as i64, width),
        'm' => pad(out, dt.minute() as i64, width),
        's' => pad(out, dt.second() as i64, width),
        'S' => pad(out, (dt.timestamp_subsec_millis() % 1000) as i64, width),
        'z' => {
            let _ = write!(out, "{}", dt.offset());
        }
        'Z' => write_offset(out, dt, true, false),
        'X' => {
            let seconds = dt.offset().fix().local_minus_utc();
            if seconds == 0 {
                out.push('Z');
            } else if width == 1 {
                let _ = write!(out, "{}{:02}", sign(seconds), seconds.abs() / 3600);
            } else {
                write_offset(out, dt, true, width >= 3);
            }
        }
        _ => {}
    }
}

fn sign(seconds: i32) -> char {
    if seconds < 0 {
        '-'
    } else {
        '+'
    }
}

fn write_offset(out: &mut String, dt: &DateTime<Tz>, with_minutes: bool, colon: bool) {
    let seconds = dt.offset().fix().local_minus_utc();
    let abs = seconds.abs();
    let _ = write!(out, "{}{:02}", sign(seconds), abs / 3600);
    if with_minutes {
        if colon {
            out.push(':');
        }
        let _ = write!(out, "{:02}", abs % 3600 / 60);
    }
}

/// Render `dt` as `yyyy-MM-ddTHH:mm:ss±HH:MM`.
pub fn format_xsd_date_time(dt: &DateTime<Tz>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}
