//! The decoding engine: value dispatch, structural parsing, and the scalar
//! scanners.
//!
//! Everything below the public entry points works with bare [`Reason`]s; the
//! byte offset is attached exactly once, when [`parse`] catches the first
//! failure and pairs it with the live cursor position. The cursor's failing
//! position is preserved on the error path, never reset.


use alloc::{string::String, vec::Vec};

use crate::{
    cursor::{Cursor, is_whitespace},
    error::{ParseError, Reason},
    factory::{JsonFactory, ValueFactory},
    number::{self, Number},
    options::ParserOptions,
    value::Value,
};

/// Decodes one JSON document from `bytes`, materializing every value through
/// `factory`.
///
/// The input must be a complete UTF-8 document already resident in memory
/// (no byte-order mark). Leading and trailing whitespace is tolerated; any
/// other byte outside the single root value fails with
/// [`Reason::InvalidSyntax`]. Unless
/// [`allow_fragments`](ParserOptions::allow_fragments) is set, the root must
/// be an object or array.
///
/// # Errors
///
/// Returns a [`ParseError`] pairing the failure [`Reason`] with the byte
/// offset at which it was detected. Empty input fails with
/// [`Reason::EmptyStream`] at offset 0.
pub fn parse<F: JsonFactory>(
    bytes: &[u8],
    options: ParserOptions,
    factory: &F,
) -> Result<F::Value, ParseError> {
    if bytes.is_empty() {
        return Err(ParseError {
            offset: 0,
            reason: Reason::EmptyStream,
        });
    }

    let mut core = Core {
        cursor: Cursor::new(bytes),
        scratch: Vec::new(),
        skip_null: options.skip_null,
        factory,
    };

    match core.parse_document(options.allow_fragments) {
        Ok(value) => Ok(value),
        Err(reason) => Err(ParseError {
            offset: core.cursor.offset(),
            reason,
        }),
    }
}

/// Decodes one JSON document into the crate's own [`Value`] tree.
///
/// Convenience wrapper around [`parse`] with [`ValueFactory`].
///
/// # Errors
///
/// See [`parse`].
pub fn parse_value(bytes: &[u8], options: ParserOptions) -> Result<Value, ParseError> {
    parse(bytes, options, &ValueFactory)
}

/// One parsed value plus the dispatch facts its parent needs.
struct Parsed<T> {
    value: T,
    /// Objects and arrays may stand alone at the root; bare scalars may not.
    top_level: bool,
    /// Drives `skip_null` in the enclosing structural parser.
    was_null: bool,
}

impl<T> Parsed<T> {
    fn composite(value: T) -> Self {
        Self {
            value,
            top_level: true,
            was_null: false,
        }
    }

    fn scalar(value: T) -> Self {
        Self {
            value,
            top_level: false,
            was_null: false,
        }
    }
}

/// Overflow-checked multiply-by-10 / add-digit accumulation step.
#[inline]
fn push_digit(acc: u64, digit: u64) -> Result<u64, Reason> {
    acc.checked_mul(10)
        .and_then(|acc| acc.checked_add(digit))
        .ok_or(Reason::NumberOverflow)
}

struct Core<'a, F: JsonFactory> {
    cursor: Cursor<'a>,
    /// Reusable accumulation buffer for string scanning.
    scratch: Vec<u8>,
    skip_null: bool,
    factory: &'a F,
}

impl<F: JsonFactory> Core<'_, F> {
    fn parse_document(&mut self, allow_fragments: bool) -> Result<F::Value, Reason> {
        self.cursor.skip_whitespace();

        let root = self.parse_value()?;
        if !root.top_level && !allow_fragments {
            return Err(Reason::FragmentedJson);
        }

        // parse_value consumed trailing whitespace; anything left is junk.
        if !self.cursor.at_end() {
            return Err(Reason::InvalidSyntax);
        }

        Ok(root.value)
    }

    /// Dispatches on the next significant byte.
    ///
    /// Postcondition on success: whitespace after the value has been
    /// consumed.
    fn parse_value(&mut self) -> Result<Parsed<F::Value>, Reason> {
        let parsed = match self.cursor.peek() {
            Some(b'{') => {
                let members = self.parse_object()?;
                Parsed::composite(self.factory.new_object(members))
            }
            Some(b'[') => {
                let elements = self.parse_array()?;
                Parsed::composite(self.factory.new_array(elements))
            }
            Some(b'"') => {
                let string = self.parse_string()?;
                Parsed::scalar(self.factory.new_string(string))
            }
            Some(b'-' | b'0'..=b'9') => {
                let num = self.parse_number()?;
                Parsed::scalar(self.factory.new_number(num))
            }
            Some(b'f') => {
                self.cursor.advance_unchecked();
                self.expect_literal(b"alse")?;
                Parsed::scalar(self.factory.new_bool(false))
            }
            Some(b't') => {
                self.cursor.advance_unchecked();
                self.expect_literal(b"rue")?;
                Parsed::scalar(self.factory.new_bool(true))
            }
            Some(b'n') => {
                self.cursor.advance_unchecked();
                self.expect_literal(b"ull")?;
                Parsed {
                    value: self.factory.new_null(),
                    top_level: false,
                    was_null: true,
                }
            }
            Some(_) => return Err(Reason::InvalidSyntax),
            None => return Err(Reason::EndOfStream),
        };

        self.cursor.skip_whitespace();
        Ok(parsed)
    }

    /// Byte-compares the remainder of `true`/`false`/`null` after the first
    /// byte has routed the dispatch.
    fn expect_literal(&mut self, rest: &[u8]) -> Result<(), Reason> {
        for &expected in rest {
            if self.cursor.pop()? != expected {
                return Err(Reason::InvalidLiteral);
            }
        }
        Ok(())
    }

    fn parse_object(&mut self) -> Result<Vec<(String, F::Value)>, Reason> {
        // Caller peeked '{'.
        self.cursor.advance_unchecked();
        self.cursor.skip_whitespace();

        let mut members = Vec::new();
        // Separator state is tracked apart from `members`: skip_null may drop
        // a member without loosening the comma rules.
        let mut seen_member = false;
        let mut was_comma = false;

        loop {
            match self.cursor.peek() {
                Some(b'"') => {
                    if seen_member && !was_comma {
                        return Err(Reason::ExpectedComma);
                    }

                    let key = self.parse_string()?;
                    self.skip_colon()?;
                    let member = self.parse_value()?;

                    seen_member = true;
                    was_comma = false;

                    if !(self.skip_null && member.was_null) {
                        members.push((key, member.value));
                    }
                }
                Some(b',') => {
                    if was_comma || !seen_member {
                        return Err(Reason::InvalidSyntax);
                    }
                    was_comma = true;
                    self.cursor.advance_unchecked();
                    self.cursor.skip_whitespace();
                }
                Some(b'}') => {
                    if was_comma {
                        return Err(Reason::TrailingComma);
                    }
                    self.cursor.advance_unchecked();
                    return Ok(members);
                }
                Some(_) => return Err(Reason::InvalidSyntax),
                None => return Err(Reason::EndOfStream),
            }
        }
    }

    fn parse_array(&mut self) -> Result<Vec<F::Value>, Reason> {
        // Caller peeked '['.
        self.cursor.advance_unchecked();
        self.cursor.skip_whitespace();

        let mut elements = Vec::new();
        let mut seen_element = false;
        let mut was_comma = false;

        loop {
            match self.cursor.peek() {
                Some(b',') => {
                    // No leading comma, no consecutive commas.
                    if was_comma || !seen_element {
                        return Err(Reason::InvalidSyntax);
                    }
                    was_comma = true;
                    self.cursor.advance_unchecked();
                    self.cursor.skip_whitespace();
                }
                Some(b']') => {
                    if was_comma {
                        return Err(Reason::TrailingComma);
                    }
                    self.cursor.advance_unchecked();
                    return Ok(elements);
                }
                _ => {
                    if seen_element && !was_comma {
                        return Err(Reason::ExpectedComma);
                    }

                    let element = self.parse_value()?;
                    seen_element = true;
                    was_comma = false;

                    if !(self.skip_null && element.was_null) {
                        elements.push(element.value);
                    }
                }
            }
        }
    }

    fn skip_colon(&mut self) -> Result<(), Reason> {
        self.cursor.skip_whitespace();
        if self.cursor.pop()? != b':' {
            return Err(Reason::ExpectedColon);
        }
        self.cursor.skip_whitespace();
        Ok(())
    }

    fn parse_string(&mut self) -> Result<String, Reason> {
        // Caller peeked '"'.
        self.cursor.advance_unchecked();

        self.scratch.clear();
        let mut escaped = false;

        loop {
            let byte = self.cursor.pop()?;

            if escaped {
                match byte {
                    b'r' => self.scratch.push(b'\r'),
                    b't' => self.scratch.push(b'\t'),
                    b'n' => self.scratch.push(b'\n'),
                    b'b' => self.scratch.push(0x08),
                    b'"' => self.scratch.push(b'"'),
                    b'/' => self.scratch.push(b'/'),
                    b'\\' => self.scratch.push(b'\\'),
                    b'u' => {
                        let scalar = self.parse_unicode_scalar()?;
                        let mut utf8 = [0u8; 4];
                        self.scratch
                            .extend_from_slice(scalar.encode_utf8(&mut utf8).as_bytes());
                    }
                    _ => return Err(Reason::InvalidEscape),
                }
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                // Explicit-length construction: embedded NUL bytes survive.
                return match core::str::from_utf8(&self.scratch) {
                    Ok(text) => Ok(String::from(text)),
                    Err(_) => Err(Reason::InvalidUnicode),
                };
            } else {
                self.scratch.push(byte);
            }
        }
    }

    /// Reads four hex digits into one UTF-16 code unit.
    fn parse_unicode_escape(&mut self) -> Result<u16, Reason> {
        let mut unit: u16 = 0;
        for _ in 0..4 {
            let byte = self.cursor.pop()?;
            let digit = match byte {
                b'0'..=b'9' => u16::from(byte - b'0'),
                b'a'..=b'f' => u16::from(byte - b'a') + 10,
                b'A'..=b'F' => u16::from(byte - b'A') + 10,
                _ => return Err(Reason::InvalidEscape),
            };
            unit = (unit << 4) | digit;
        }
        Ok(unit)
    }

    /// Decodes one `\u` escape, consuming a second `\u` escape when the first
    /// code unit is a lead surrogate.
    fn parse_unicode_scalar(&mut self) -> Result<char, Reason> {
        let unit = self.parse_unicode_escape()?;

        if (0xD800..=0xDBFF).contains(&unit) {
            if self.cursor.pop()? != b'\\' || self.cursor.pop()? != b'u' {
                return Err(Reason::InvalidUnicode);
            }
            let trail = self.parse_unicode_escape()?;
            if !(0xDC00..=0xDFFF).contains(&trail) {
                return Err(Reason::InvalidUnicode);
            }
            let scalar =
                0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(trail) - 0xDC00);
            return char::from_u32(scalar).ok_or(Reason::InvalidUnicode);
        }

        // A lone trail surrogate is not a scalar value; from_u32 rejects it.
        char::from_u32(u32::from(unit)).ok_or(Reason::InvalidUnicode)
    }

    fn parse_number(&mut self) -> Result<Number, Reason> {
        let negative = match self.cursor.peek() {
            Some(b'-') => {
                self.cursor.advance_unchecked();
                true
            }
            _ => false,
        };

        if !matches!(self.cursor.peek(), Some(b'0'..=b'9')) {
            return Err(Reason::InvalidNumber);
        }

        let mut significand: u64 = 0;
        let mut mantissa: u64 = 0;
        let mut divisor: f64 = 10.0;
        let mut exponent: u64 = 0;
        let mut negative_exponent = false;
        let mut seen_decimal = false;
        let mut seen_exponent = false;

        loop {
            match self.cursor.peek() {
                Some(digit @ b'0'..=b'9') => {
                    self.cursor.advance_unchecked();
                    let digit = u64::from(digit - b'0');
                    if seen_exponent {
                        exponent = push_digit(exponent, digit)?;
                    } else if seen_decimal {
                        divisor *= 10.0;
                        mantissa = push_digit(mantissa, digit)?;
                    } else {
                        significand = push_digit(significand, digit)?;
                    }
                }
                Some(b'.') if !seen_decimal && !seen_exponent => {
                    self.cursor.advance_unchecked();
                    seen_decimal = true;
                    // At least one digit must follow the point.
                    if !matches!(self.cursor.peek(), Some(b'0'..=b'9')) {
                        return Err(Reason::InvalidNumber);
                    }
                }
                Some(b'e' | b'E') if !seen_exponent => {
                    self.cursor.advance_unchecked();
                    seen_exponent = true;
                    match self.cursor.peek() {
                        Some(b'-') => {
                            negative_exponent = true;
                            self.cursor.advance_unchecked();
                        }
                        Some(b'+') => self.cursor.advance_unchecked(),
                        _ => {}
                    }
                    if !matches!(self.cursor.peek(), Some(b'0'..=b'9')) {
                        return Err(Reason::InvalidNumber);
                    }
                }
                // Structural delimiters and end of input terminate the scan.
                Some(b',' | b'}' | b']') | None => break,
                Some(byte) if is_whitespace(byte) => break,
                Some(_) => return Err(Reason::InvalidNumber),
            }
        }

        number::build(
            significand,
            seen_decimal.then_some(mantissa),
            seen_exponent.then_some(exponent),
            divisor,
            negative,
            negative_exponent,
        )
    }
}
