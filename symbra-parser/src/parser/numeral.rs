use logos::Logos;
use super::error::kind::NumberIssue;

/// The pieces a numeric literal is made of.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum NumeralToken {
    #[regex(r"[0-9]+")]
    Digits,

    #[token(".")]
    Point,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,
}

/// Scans the numeric literal at the start of `text`: an optional sign, then digits with at most
/// one decimal point. Returns the length of the literal in bytes.
///
/// On failure, returns the issue and its byte position within `text`.
pub(crate) fn scan_numeral(text: &str) -> Result<usize, (NumberIssue, usize)> {
    let mut lexer = NumeralToken::lexer(text);
    let mut end = 0;
    let mut has_digits = false;
    let mut has_point = false;

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        match token {
            Ok(NumeralToken::Plus | NumeralToken::Minus) if span.start == 0 => (),
            Ok(NumeralToken::Digits) => has_digits = true,
            Ok(NumeralToken::Point) if !has_point => has_point = true,
            Ok(NumeralToken::Point) => return Err((NumberIssue::ExtraPoint, span.start)),
            _ => break,
        }
        end = span.end;
    }

    if has_digits {
        Ok(end)
    } else {
        Err((NumberIssue::NoDigits, 0))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn literal_lengths() {
        assert_eq!(scan_numeral("123.456+x"), Ok(7));
        assert_eq!(scan_numeral(".456"), Ok(4));
        assert_eq!(scan_numeral("-5-3"), Ok(2));
        assert_eq!(scan_numeral("5.x"), Ok(2));
        assert_eq!(scan_numeral("42 7"), Ok(2));
    }

    #[test]
    fn malformed_literals() {
        assert_eq!(scan_numeral("123.456.789"), Err((NumberIssue::ExtraPoint, 7)));
        assert_eq!(scan_numeral("+"), Err((NumberIssue::NoDigits, 0)));
        assert_eq!(scan_numeral("."), Err((NumberIssue::NoDigits, 0)));
        assert_eq!(scan_numeral("-x"), Err((NumberIssue::NoDigits, 0)));
    }
}
