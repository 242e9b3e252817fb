//! Support for Apple `.strings` string tables.
//!
//! A table is a sequence of `"key" = "value";` statements with optional
//! comments. Keys may also be bare words. Statements without an `=` are
//! skipped; unterminated strings and comments are reported as
//! [`Error::Syntax`].

use std::collections::HashMap;
use std::iter::Peekable;
use std::str::Chars;

use crate::{error::Error, traits::Parser};

/// Represents an Apple `.strings` localization file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Format {
    /// Language taken from a `//: Language: xx` header line, if any.
    ///
    /// Usually empty: the locale of a `.strings` file is given by its
    /// enclosing `.lproj` directory.
    pub language: String,
    /// All key-value pairs in file order.
    pub pairs: Vec<Pair>,
}

/// A single key-value pair in a `.strings` file, possibly with an associated comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// The key, with escapes resolved.
    pub key: String,
    /// The value, with escapes resolved.
    pub value: String,
    /// Comment immediately preceding the pair, markers included.
    ///
    /// A blank line between a comment and the pair detaches it.
    pub comment: Option<String>,
}

impl Parser for Format {
    fn from_reader<R: std::io::BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Scanner::new(&content).parse()
    }
}

struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Scanner<'a> {
    fn new(content: &'a str) -> Self {
        Scanner {
            chars: content.chars().peekable(),
            line: 1,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.chars.peek() == Some(&expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Skips whitespace, returning the number of newlines crossed.
    fn skip_whitespace(&mut self) -> usize {
        let mut newlines = 0;
        while let Some(&c) = self.chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            if c == '\n' {
                newlines += 1;
            }
            self.bump();
        }
        newlines
    }

    fn skip_inline_whitespace(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '\n' || !c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.bump() {
            if c == '\n' {
                break;
            }
        }
    }

    /// Skips past the next `;`, stopping early at the end of the line.
    fn skip_statement(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
            if c == ';' {
                break;
            }
        }
    }

    fn parse(mut self) -> Result<Format, Error> {
        let mut header = HashMap::<String, String>::new();
        let mut pairs = Vec::new();
        let mut last_comment: Option<String> = None;
        let mut last_pair_line = 0;

        loop {
            if self.skip_whitespace() > 1 {
                last_comment = None;
            }
            let Some(&c) = self.chars.peek() else {
                break;
            };

            if c == '/' {
                let trailing = self.line == last_pair_line;
                self.bump();
                if self.eat('/') {
                    let text = self.read_line_comment();
                    if trailing {
                        // Same line as the previous pair: not attached to anything.
                        continue;
                    }
                    if let Some(rest) = text.strip_prefix(':') {
                        // Header line, e.g. "//: Language: English"
                        if let Some((key, value)) = rest.split_once(':') {
                            header.insert(key.trim().to_string(), value.trim().to_string());
                        }
                    } else {
                        last_comment = Some(format!("//{}", text.trim_end()));
                    }
                } else if self.eat('*') {
                    let text = self.read_block_comment()?;
                    if !trailing {
                        last_comment = Some(text);
                    }
                } else {
                    self.skip_line();
                }
                continue;
            }

            let comment = last_comment.take();
            let Some(key) = self.read_token()? else {
                self.skip_statement();
                continue;
            };
            let crossed_line = self.skip_whitespace() > 0;
            if !self.eat('=') {
                if !crossed_line {
                    self.skip_line();
                }
                continue;
            }
            self.skip_whitespace();
            let Some(value) = self.read_token()? else {
                self.skip_statement();
                continue;
            };
            last_pair_line = self.line;
            self.skip_inline_whitespace();
            self.eat(';');

            pairs.push(Pair {
                key,
                value,
                comment,
            });
        }

        Ok(Format {
            language: header.remove("Language").unwrap_or_default(),
            pairs,
        })
    }

    fn read_line_comment(&mut self) -> String {
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            if c == '\n' {
                break;
            }
            text.push(c);
            self.bump();
        }
        text
    }

    fn read_block_comment(&mut self) -> Result<String, Error> {
        let start = self.line;
        let mut text = String::from("/*");
        while let Some(c) = self.bump() {
            text.push(c);
            if c == '*' && self.eat('/') {
                text.push('/');
                return Ok(text);
            }
        }
        Err(Error::syntax_error(start, "unterminated comment"))
    }

    /// Reads a quoted string or a bare word. `None` if neither starts here.
    fn read_token(&mut self) -> Result<Option<String>, Error> {
        match self.chars.peek() {
            Some('"') => {
                self.bump();
                self.read_quoted().map(Some)
            }
            Some(&c) if is_bare_char(c) => {
                let mut word = String::new();
                while let Some(&c) = self.chars.peek() {
                    if !is_bare_char(c) {
                        break;
                    }
                    word.push(c);
                    self.bump();
                }
                Ok(Some(word))
            }
            _ => Ok(None),
        }
    }

    fn read_quoted(&mut self) -> Result<String, Error> {
        let start = self.line;
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(Error::syntax_error(start, "unterminated string")),
                Some('"') => return Ok(out),
                Some('\\') => self.read_escape(&mut out)?,
                Some(c) => out.push(c),
            }
        }
    }

    fn read_escape(&mut self, out: &mut String) -> Result<(), Error> {
        let line = self.line;
        match self.bump() {
            None => Err(Error::syntax_error(line, "unterminated string")),
            Some('n') => {
                out.push('\n');
                Ok(())
            }
            Some('t') => {
                out.push('\t');
                Ok(())
            }
            Some('r') => {
                out.push('\r');
                Ok(())
            }
            Some('0') => {
                out.push('\0');
                Ok(())
            }
            Some('U') | Some('u') => {
                let unit = self.read_hex4(line)?;
                let code = if (0xD800..0xDC00).contains(&unit) {
                    // High surrogate: expect a low surrogate escape next.
                    if !(self.eat('\\') && (self.eat('U') || self.eat('u'))) {
                        return Err(Error::syntax_error(line, "unpaired surrogate escape"));
                    }
                    let low = self.read_hex4(line)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(Error::syntax_error(line, "unpaired surrogate escape"));
                    }
                    0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
                } else {
                    unit
                };
                let c = char::from_u32(code).ok_or_else(|| {
                    Error::syntax_error(line, format!("invalid unicode escape {:04X}", code))
                })?;
                out.push(c);
                Ok(())
            }
            // `\"`, `\\`, `\'` and anything unknown stand for themselves.
            Some(c) => {
                out.push(c);
                Ok(())
            }
        }
    }

    fn read_hex4(&mut self, line: usize) -> Result<u32, Error> {
        let mut value = 0u32;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| Error::syntax_error(line, "malformed unicode escape"))?;
            value = value * 16 + digit;
        }
        Ok(value)
    }
}

fn is_bare_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '-' | '$' | ':')
}

impl Format {
    /// Finds the last pair with `key`; later duplicates win.
    pub fn find(&self, key: &str) -> Option<&Pair> {
        self.pairs.iter().rev().find(|pair| pair.key == key)
    }
}
