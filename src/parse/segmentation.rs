//! Parser for the flat segmentation grammar.
//!
//! The input is a run of floats, each immediately followed by exactly one
//! delimiter: `]` assigns the point to the segment below, `)` to the segment
//! above. The final delimiter is mandatory and ends the input.

use super::cursor::Cursor;
use super::error::ParseError;
use super::number;
use crate::segment::{Breakpoint, Segmentation, Side};

/// Parse a flat breakpoint run into a [`Segmentation`].
///
/// ## Example
///
/// ```
/// use strategos::parse::parse_segmentation;
///
/// let seg = parse_segmentation("0]1)").unwrap();
/// assert_eq!(seg.segment_count(), 3);
/// ```
pub fn parse_segmentation(text: &str) -> Result<Segmentation, ParseError> {
    let mut cursor = Cursor::new(text);
    if !cursor.has_next() {
        return Err(ParseError::EndOfInput { at: 0 });
    }

    let mut breakpoints = Vec::new();
    let mut pending: Option<f64> = None;
    while cursor.has_next() || pending.is_some() {
        match pending.take() {
            Some(point) => {
                if !cursor.has_next() {
                    return Err(ParseError::MissingDelimiter { at: cursor.pos() });
                }
                let at = cursor.pos();
                let side = match cursor.peek()? {
                    ']' => Side::Below,
                    ')' => Side::Above,
                    found @ ('-' | '.' | '0'..='9') => {
                        return Err(ParseError::MisplacedToken { at, found })
                    }
                    found => return Err(ParseError::UnexpectedToken { at, found }),
                };
                cursor.pop()?;
                breakpoints.push(Breakpoint::new(point, side));
            }
            None => {
                let at = cursor.pos();
                let found = cursor.peek()?;
                if found == ']' || found == ')' {
                    // A delimiter with no pending point: at the start it
                    // precedes its number, later it doubles a delimiter.
                    return Err(if breakpoints.is_empty() {
                        ParseError::DelimiterMismatch { at, found }
                    } else {
                        ParseError::MisplacedToken { at, found }
                    });
                }
                pending = Some(number::float(&mut cursor)?);
            }
        }
    }

    Ok(Segmentation::new(breakpoints)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::SegmentError;

    #[test]
    fn test_points_and_sides() {
        let seg = parse_segmentation("0]1)").unwrap();
        let points: Vec<f64> = seg.breakpoints().iter().map(|bp| bp.point).collect();
        let sides: Vec<Side> = seg.breakpoints().iter().map(|bp| bp.side).collect();
        assert_eq!(points, vec![0.0, 1.0]);
        assert_eq!(sides, vec![Side::Below, Side::Above]);
    }

    #[test]
    fn test_negative_and_fractional_points() {
        let seg = parse_segmentation(" -2.5 ) 0 ] 3.75 )").unwrap();
        assert_eq!(seg.segment_count(), 4);
        assert_eq!(seg.breakpoints()[0].point, -2.5);
        assert_eq!(seg.breakpoints()[0].side, Side::Above);
    }

    #[test]
    fn test_missing_final_delimiter() {
        assert_eq!(
            parse_segmentation("0]1"),
            Err(ParseError::MissingDelimiter { at: 3 })
        );
    }

    #[test]
    fn test_delimiter_before_number() {
        assert_eq!(
            parse_segmentation("]0)"),
            Err(ParseError::DelimiterMismatch { at: 0, found: ']' })
        );
    }

    #[test]
    fn test_doubled_delimiter() {
        assert_eq!(
            parse_segmentation("0])"),
            Err(ParseError::MisplacedToken { at: 2, found: ')' })
        );
    }

    #[test]
    fn test_two_numbers_in_a_row() {
        // The second '-' cannot extend the pending number.
        assert_eq!(
            parse_segmentation("0-1]"),
            Err(ParseError::MisplacedToken { at: 1, found: '-' })
        );
    }

    #[test]
    fn test_unsorted_points_rejected() {
        assert_eq!(
            parse_segmentation("1]0]"),
            Err(ParseError::Segmentation(
                SegmentError::UnsortedOrDuplicatePoints { index: 1 }
            ))
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_segmentation(""), Err(ParseError::EndOfInput { at: 0 }));
        assert_eq!(parse_segmentation("  "), Err(ParseError::EndOfInput { at: 0 }));
    }

    #[test]
    fn test_garbage_where_number_expected() {
        assert_eq!(
            parse_segmentation("x]"),
            Err(ParseError::MalformedNumber { at: 0 })
        );
    }
}
