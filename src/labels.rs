//! External vertex notations.
//!
//! The core works on 0-based `usize` indices only. Everything users see
//! (1-based integers, or letters `A`, `B`, ..., `Z`, `AA`, `AB`, ...) is
//! translated at the boundary by [`Notation`], in both directions.

use crate::{Error, Result};

/// How vertices are named outside the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Vertices are `1..=n`
    #[default]
    OneBased,

    /// Vertices are `A..=Z`, then `AA`, `AB`, ... (bijective base 26,
    /// spreadsheet-column style, so every index has a distinct name)
    Letters,
}

impl Notation {
    /// Renders a 0-based vertex index in this notation
    pub fn label(&self, vertex: usize) -> String {
        match self {
            Notation::OneBased => (vertex + 1).to_string(),
            Notation::Letters => {
                let mut digits = Vec::new();
                let mut v = vertex;
                loop {
                    digits.push(char::from(b'A' + (v % 26) as u8));
                    v /= 26;
                    if v == 0 {
                        break;
                    }
                    v -= 1;
                }
                digits.iter().rev().collect()
            }
        }
    }

    /// Parses an external vertex name into a 0-based index, checking it
    /// against the graph's vertex count. Errors quote the name as the
    /// caller wrote it, not the internal index.
    pub fn parse(&self, token: &str, vertex_count: usize) -> Result<usize> {
        let token = token.trim();
        let index = match self {
            Notation::OneBased => {
                let external: usize = token
                    .parse()
                    .map_err(|_| Error::ParseInput(format!("expected a vertex number, got {:?}", token)))?;
                if external == 0 {
                    return Err(Error::ParseInput(format!(
                        "vertex numbers start at 1, got {:?}",
                        token
                    )));
                }
                external - 1
            }
            Notation::Letters => {
                if token.is_empty() {
                    return Err(Error::ParseInput("expected a vertex letter".to_string()));
                }
                let mut value: usize = 0;
                for c in token.chars() {
                    let digit = match c {
                        'A'..='Z' => (c as u8 - b'A') as usize,
                        'a'..='z' => (c as u8 - b'a') as usize,
                        _ => {
                            return Err(Error::ParseInput(format!(
                                "expected a vertex letter, got {:?}",
                                token
                            )))
                        }
                    };
                    value = value * 26 + digit + 1;
                }
                value - 1
            }
        };

        if index >= vertex_count {
            return Err(Error::InvalidEndpoint(token.to_string()));
        }
        Ok(index)
    }

    /// Renders a path as an arrow-joined label sequence, e.g. `1 -> 2 -> 4`
    pub fn format_path(&self, vertices: &[usize]) -> String {
        vertices
            .iter()
            .map(|&v| self.label(v))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_round_trip() {
        let notation = Notation::OneBased;
        assert_eq!(notation.label(0), "1");
        assert_eq!(notation.label(9), "10");
        assert_eq!(notation.parse("3", 5).unwrap(), 2);
    }

    #[test]
    fn one_based_rejects_zero_and_out_of_range() {
        let notation = Notation::OneBased;
        assert!(matches!(notation.parse("0", 5), Err(Error::ParseInput(_))));
        // The error names the vertex the user typed, not the 0-based index
        assert!(matches!(
            notation.parse("6", 5),
            Err(Error::InvalidEndpoint(v)) if v == "6"
        ));
    }

    #[test]
    fn letters_round_trip() {
        let notation = Notation::Letters;
        assert_eq!(notation.label(0), "A");
        assert_eq!(notation.label(3), "D");
        assert_eq!(notation.parse("c", 5).unwrap(), 2);
        assert_eq!(notation.parse("E", 5).unwrap(), 4);
    }

    #[test]
    fn letters_extend_past_z_without_aliasing() {
        let notation = Notation::Letters;
        assert_eq!(notation.label(25), "Z");
        assert_eq!(notation.label(26), "AA");
        assert_eq!(notation.label(27), "AB");
        assert_eq!(notation.label(52), "BA");

        assert_eq!(notation.parse("AA", 30).unwrap(), 26);
        assert_eq!(notation.parse("ab", 30).unwrap(), 27);

        // Every index in a >26-vertex graph gets a distinct name
        let labels: std::collections::HashSet<String> =
            (0..60).map(|v| notation.label(v)).collect();
        assert_eq!(labels.len(), 60);
    }

    #[test]
    fn letters_rejects_garbage_and_quotes_the_token() {
        let notation = Notation::Letters;
        assert!(matches!(notation.parse("7", 5), Err(Error::ParseInput(_))));
        assert!(matches!(notation.parse("", 5), Err(Error::ParseInput(_))));
        assert!(matches!(
            notation.parse("F", 5),
            Err(Error::InvalidEndpoint(v)) if v == "F"
        ));
    }

    #[test]
    fn arrow_joined_path() {
        assert_eq!(Notation::OneBased.format_path(&[0, 1, 2, 3]), "1 -> 2 -> 3 -> 4");
        assert_eq!(Notation::Letters.format_path(&[0, 2]), "A -> C");
        assert_eq!(Notation::OneBased.format_path(&[4]), "5");
    }
}
