//! Parsing of command line values: direction scripts and board sizes.

use game::aux::Direction;
use std::{error, fmt};

/// Error returned when a script or a size can't be parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseScriptError {
    /// Move number `.0` isn't a direction.
    BadMove(usize, String),

    /// Board size isn't `LENGTHxHEIGHT` with positive numbers.
    BadSize(String),
}

impl fmt::Display for ParseScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadMove(i, token) => write!(f, "move {} ({:?}) is not a direction", i + 1, token),
            Self::BadSize(s) => write!(f, "{:?} is not a board size like 40x30", s),
        }
    }
}

impl error::Error for ParseScriptError {}

/// Parse comma separated moves. An empty move or `-` keeps the current
/// direction, e.g. `"r,,,d,-,up"`.
pub fn parse_moves(script: &str) -> Result<Vec<Option<Direction>>, ParseScriptError> {
    if script.trim().is_empty() {
        return Ok(Vec::new());
    }
    script
        .split(',')
        .enumerate()
        .map(|(i, token)| match token.trim() {
            "" | "-" => Ok(None),
            token => token
                .parse()
                .map(Some)
                .map_err(|_| ParseScriptError::BadMove(i, token.to_string())),
        })
        .collect()
}

/// Parse a `LENGTHxHEIGHT` board size.
pub fn parse_size(s: &str) -> Result<(usize, usize), ParseScriptError> {
    let bad = || ParseScriptError::BadSize(s.to_string());
    let (length, height) = s.trim().split_once(|c| c == 'x' || c == 'X').ok_or_else(bad)?;
    let length: usize = length.parse().map_err(|_| bad())?;
    let height: usize = height.parse().map_err(|_| bad())?;
    if length == 0 || height == 0 {
        return Err(bad());
    }
    Ok((length, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn moves() {
        assert_eq!(
            parse_moves("r,, ,Down,-,u").unwrap(),
            [Some(Right), None, None, Some(Down), None, Some(Up)]
        );
        assert_eq!(parse_moves("  ").unwrap(), []);
        assert_eq!(
            parse_moves("l,sideways"),
            Err(ParseScriptError::BadMove(1, "sideways".into()))
        );
    }

    #[test]
    fn sizes() {
        assert_eq!(parse_size("40x30"), Ok((40, 30)));
        assert_eq!(parse_size("7X3"), Ok((7, 3)));
        assert!(parse_size("0x3").is_err());
        assert!(parse_size("40").is_err());
        assert!(parse_size("ax3").is_err());
    }
}
