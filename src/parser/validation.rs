//! Structural checks run on delimited input before record parsing

use crate::error::{ParseError, ParseResult};

#[derive(Debug, Clone, Copy, PartialEq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Fail if a quoted field is still open at end of input.
///
/// The CSV reader silently runs an unterminated quote to EOF, swallowing
/// every following row into one field, so this has to be caught up front.
/// The reported location is where the quote was opened.
pub fn check_quotes_terminated(content: &str, delimiter: u8) -> ParseResult<()> {
    let mut state = QuoteState::FieldStart;
    let mut line = 1usize;
    let mut column = 0usize;
    let mut opened_at = (1usize, 1usize);

    for &byte in content.as_bytes() {
        // count chars, not UTF-8 continuation bytes
        if byte & 0xC0 != 0x80 {
            column += 1;
        }

        let boundary = byte == delimiter || byte == b'\n' || byte == b'\r';
        state = match state {
            QuoteState::FieldStart if byte == b'"' => {
                opened_at = (line, column);
                QuoteState::Quoted
            }
            QuoteState::FieldStart | QuoteState::Unquoted => {
                if boundary {
                    QuoteState::FieldStart
                } else {
                    QuoteState::Unquoted
                }
            }
            QuoteState::Quoted if byte == b'"' => QuoteState::QuoteInQuoted,
            QuoteState::Quoted => QuoteState::Quoted,
            QuoteState::QuoteInQuoted if byte == b'"' => QuoteState::Quoted,
            QuoteState::QuoteInQuoted if boundary => QuoteState::FieldStart,
            QuoteState::QuoteInQuoted => QuoteState::Unquoted,
        };

        if byte == b'\n' {
            line += 1;
            column = 0;
        }
    }

    if state == QuoteState::Quoted {
        return Err(ParseError::new(
            "unterminated quoted field".to_string(),
            Some(opened_at.0),
            Some(opened_at.1),
        ));
    }

    Ok(())
}

/// Decode raw file bytes, reporting where invalid UTF-8 starts
pub fn decode_utf8(bytes: Vec<u8>) -> ParseResult<String> {
    String::from_utf8(bytes).map_err(|e| {
        let valid_up_to = e.utf8_error().valid_up_to();
        let prefix = &e.as_bytes()[..valid_up_to];
        let line = prefix.iter().filter(|&&b| b == b'\n').count() + 1;
        ParseError::new(
            format!("invalid UTF-8 at byte {}", valid_up_to),
            Some(line),
            None,
        )
    })
}
