//! Recursive-descent parser for interval-set expressions.
//!
//! Grammar, tightest-binding first:
//!
//! ```text
//! Expression  := '{' Union '}' ( '&' Expression | '|' Expression )?  |  Union
//! Union       := Intersection ( '|' Intersection )*
//! Intersection:= Literal ( '&' Literal )*
//! Literal     := ('[' | '(') Float ',' Float (')' | ']')
//! ```
//!
//! Intersection binds tighter than union; both are left-associative. A brace
//! group is parsed as a self-contained union and may be followed by exactly
//! one `&`/`|` continuation combining the whole group with what follows. One
//! character of lookahead selects the production: `{` opens a group, `[`/`(`
//! an interval literal.

use super::cursor::Cursor;
use super::error::ParseError;
use super::number;
use crate::interval::{IntervalAtom, IntervalValue};

/// Parse an interval-set expression into a normalized [`IntervalValue`].
///
/// ## Example
///
/// ```
/// use strategos::parse::parse_interval_expression;
///
/// let value = parse_interval_expression("[0,1] | [2,3] & [2,2]").unwrap();
/// assert!(value.contains(2.0));
/// assert!(!value.contains(2.5));
/// ```
pub fn parse_interval_expression(text: &str) -> Result<IntervalValue, ParseError> {
    let mut cursor = Cursor::new(text);
    let value = expression(&mut cursor)?;
    if cursor.has_next() {
        return Err(ParseError::UnexpectedToken {
            at: cursor.pos(),
            found: cursor.peek()?,
        });
    }
    Ok(value)
}

fn expression(cursor: &mut Cursor) -> Result<IntervalValue, ParseError> {
    if !cursor.pop_if_next('{') {
        return union(cursor);
    }
    let group = union(cursor)?;
    if !cursor.pop_if_next('}') {
        return Err(ParseError::UnterminatedGroup { at: cursor.pos() });
    }
    if cursor.pop_if_next('&') {
        Ok(group & expression(cursor)?)
    } else if cursor.pop_if_next('|') {
        Ok(group | expression(cursor)?)
    } else if !cursor.has_next() {
        Ok(group)
    } else {
        Err(ParseError::UnexpectedToken {
            at: cursor.pos(),
            found: cursor.peek()?,
        })
    }
}

fn union(cursor: &mut Cursor) -> Result<IntervalValue, ParseError> {
    if cursor.has_next() && cursor.peek()? == '{' {
        return expression(cursor);
    }
    let mut value = intersection(cursor)?;
    while cursor.pop_if_next('|') {
        value = value | intersection(cursor)?;
    }
    Ok(value)
}

fn intersection(cursor: &mut Cursor) -> Result<IntervalValue, ParseError> {
    if cursor.has_next() && cursor.peek()? == '{' {
        return expression(cursor);
    }
    let mut value = literal(cursor)?;
    while cursor.pop_if_next('&') {
        if cursor.has_next() && cursor.peek()? == '{' {
            value = value & expression(cursor)?;
        } else {
            value = value & literal(cursor)?;
        }
    }
    Ok(value)
}

fn literal(cursor: &mut Cursor) -> Result<IntervalValue, ParseError> {
    let open_at = cursor.pos();
    let lower_closed = match cursor.pop()? {
        '[' => true,
        '(' => false,
        found => return Err(ParseError::BracketMismatch { at: open_at, found }),
    };

    let lower = number::float(cursor)?;

    let sep_at = cursor.pos();
    match cursor.pop()? {
        ',' => {}
        found => return Err(ParseError::UnexpectedToken { at: sep_at, found }),
    }

    let upper = number::float(cursor)?;

    if !cursor.has_next() {
        return Err(ParseError::UnterminatedGroup { at: cursor.pos() });
    }
    let close_at = cursor.pos();
    let upper_closed = match cursor.pop()? {
        ']' => true,
        ')' => false,
        found => return Err(ParseError::BracketMismatch { at: close_at, found }),
    };

    let atom = IntervalAtom::new(lower, upper, lower_closed, upper_closed)?;
    Ok(IntervalValue::from_atom(atom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::IntervalAtom;

    fn parse(text: &str) -> IntervalValue {
        parse_interval_expression(text).unwrap()
    }

    #[test]
    fn test_literal_variants() {
        assert_eq!(
            parse("[0,1]").atoms(),
            &[IntervalAtom::closed(0.0, 1.0).unwrap()]
        );
        assert_eq!(
            parse("(0,1]").atoms(),
            &[IntervalAtom::open_closed(0.0, 1.0).unwrap()]
        );
        assert_eq!(
            parse("[-1.5,0.25)").atoms(),
            &[IntervalAtom::closed_open(-1.5, 0.25).unwrap()]
        );
    }

    #[test]
    fn test_degenerate_literals() {
        assert_eq!(
            parse("[2,2]").atoms(),
            &[IntervalAtom::closed(2.0, 2.0).unwrap()]
        );
        assert!(parse("(2,2)").is_empty());
        assert!(parse("[2,2)").is_empty());
    }

    #[test]
    fn test_whitespace_insignificant() {
        assert_eq!(parse(" [ 0 , 1 ] \t|\n[2,3]"), parse("[0,1]|[2,3]"));
    }

    #[test]
    fn test_intersection_binds_tighter() {
        let value = parse("[0,1]|[2,3]&[2,2]");
        assert_eq!(
            value.atoms(),
            &[
                IntervalAtom::closed(0.0, 1.0).unwrap(),
                IntervalAtom::closed(2.0, 2.0).unwrap(),
            ]
        );
    }

    #[test]
    fn test_group_continuation() {
        assert_eq!(parse("{[0,1]}&[0,1]"), parse("[0,1]"));
        assert_eq!(parse("{[0,1]}|[2,3]"), parse("[0,1]|[2,3]"));
    }

    #[test]
    fn test_group_inside_operand() {
        // A group after '&' or '|' hands the rest to the expression rule.
        let value = parse("[0,1]&{[0,2]}|[5,6]");
        assert_eq!(value.atoms(), &[IntervalAtom::closed(0.0, 1.0).unwrap()]);
    }

    #[test]
    fn test_reversed_bounds_rejected() {
        assert!(matches!(
            parse_interval_expression("[1,0]"),
            Err(ParseError::MalformedInterval(_))
        ));
    }

    #[test]
    fn test_missing_close_bracket() {
        assert_eq!(
            parse_interval_expression("[1,2"),
            Err(ParseError::UnterminatedGroup { at: 4 })
        );
    }

    #[test]
    fn test_wrong_close_bracket() {
        assert_eq!(
            parse_interval_expression("[1,2}"),
            Err(ParseError::BracketMismatch { at: 4, found: '}' })
        );
    }

    #[test]
    fn test_unterminated_group() {
        assert_eq!(
            parse_interval_expression("{[0,1]"),
            Err(ParseError::UnterminatedGroup { at: 6 })
        );
    }

    #[test]
    fn test_stray_trailing_character() {
        assert_eq!(
            parse_interval_expression("[0,1]x"),
            Err(ParseError::UnexpectedToken { at: 5, found: 'x' })
        );
        assert_eq!(
            parse_interval_expression("{[0,1]}x"),
            Err(ParseError::UnexpectedToken { at: 7, found: 'x' })
        );
    }

    #[test]
    fn test_malformed_numbers() {
        assert_eq!(
            parse_interval_expression("[a,1]"),
            Err(ParseError::MalformedNumber { at: 1 })
        );
        assert_eq!(
            parse_interval_expression("[1.2.3,4]"),
            Err(ParseError::MalformedNumber { at: 4 })
        );
    }

    #[test]
    fn test_missing_comma() {
        assert_eq!(
            parse_interval_expression("[1;2]"),
            Err(ParseError::UnexpectedToken { at: 2, found: ';' })
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            parse_interval_expression(""),
            Err(ParseError::EndOfInput { at: 0 })
        );
    }
}
