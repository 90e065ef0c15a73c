//! Float lexing shared by both grammars.

use super::cursor::Cursor;
use super::error::ParseError;

/// Lex a float: `'-'? Digit+ ('.' Digit+)?`, with at most one `.`.
///
/// Fails with [`ParseError::MalformedNumber`] when no digit is present or a
/// second decimal point appears.
pub(super) fn float(cursor: &mut Cursor) -> Result<f64, ParseError> {
    let start = cursor.pos();
    let mut text = String::new();
    if cursor.pop_if_next('-') {
        text.push('-');
    }

    let mut digits = 0;
    let mut seen_dot = false;
    while cursor.has_next() {
        match cursor.peek()? {
            c @ '0'..='9' => {
                digits += 1;
                text.push(c);
            }
            '.' => {
                if seen_dot {
                    return Err(ParseError::MalformedNumber { at: cursor.pos() });
                }
                seen_dot = true;
                text.push('.');
            }
            _ => break,
        }
        cursor.pop()?;
    }

    if digits == 0 {
        return Err(ParseError::MalformedNumber { at: start });
    }
    text.parse()
        .map_err(|_| ParseError::MalformedNumber { at: start })
}
