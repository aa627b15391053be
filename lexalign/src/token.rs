use crate::errors::{LexalignError, Result};

/// Tag written for tokens that carry no part-of-speech information.
pub const FALLBACK_TAG: &str = "X";

/// Token with an optional part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedToken {
    surface: String,
    tag: Option<String>,
}

impl TaggedToken {
    /// Creates a new token without a tag.
    pub fn new<S>(surface: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            surface: surface.into(),
            tag: None,
        }
    }

    /// Creates a new token with a part-of-speech tag.
    pub fn with_tag<S, T>(surface: S, tag: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            surface: surface.into(),
            tag: Some(tag.into()),
        }
    }

    /// Gets the surface string.
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// Gets the part-of-speech tag if the token is tagged.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Replaces the tag.
    pub fn set_tag<T>(&mut self, tag: T)
    where
        T: Into<String>,
    {
        self.tag = Some(tag.into());
    }
}

fn push_escaped(result: &mut String, text: &str) {
    for c in text.chars() {
        if c == '\\' || c == '/' || c.is_whitespace() {
            result.push('\\');
        }
        result.push(c);
    }
}

/// Generates a tagged line from tokens.
///
/// Tokens are separated by a single space and written as `surface/TAG`. Backslashes, slashes and
/// whitespaces in surfaces and tags are escaped by a backslash. Untagged tokens are written with
/// [`FALLBACK_TAG`].
///
/// # Examples
///
/// ```
/// use lexalign::{to_tagged_string, TaggedToken};
///
/// let tokens = vec![
///     TaggedToken::with_tag("la", "DET"),
///     TaggedToken::with_tag("1/2", "NUM"),
///     TaggedToken::new("?"),
/// ];
/// assert_eq!("la/DET 1\\/2/NUM ?/X", to_tagged_string(&tokens));
/// ```
pub fn to_tagged_string(tokens: &[TaggedToken]) -> String {
    let mut result = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i != 0 {
            result.push(' ');
        }
        push_escaped(&mut result, token.surface());
        result.push('/');
        push_escaped(&mut result, token.tag().unwrap_or(FALLBACK_TAG));
    }
    result
}

fn finish_token(current: &mut String, head: &mut Option<String>) -> Result<TaggedToken> {
    let (surface, tag) = match head.take() {
        Some(surface) => (surface, std::mem::take(current)),
        None => {
            return Err(LexalignError::invalid_format(format!(
                "token `{}` has no tag separator",
                std::mem::take(current)
            )));
        }
    };
    if surface.is_empty() {
        return Err(LexalignError::invalid_format(format!(
            "empty surface before tag `{}`",
            tag
        )));
    }
    if tag.is_empty() {
        return Err(LexalignError::invalid_format(format!(
            "token `{}` has an empty tag",
            surface
        )));
    }
    Ok(TaggedToken::with_tag(surface, tag))
}

/// Parses a tagged line.
///
/// Each whitespace-separated field must have the form `surface/TAG`. The last unescaped slash
/// separates the surface from the tag, so an escaped slash (`\/`) may appear in either part.
///
/// # Errors
///
/// This function will return an error variant when a field contains no unescaped slash, or when
/// its surface or tag is empty.
///
/// # Examples
///
/// ```
/// use lexalign::{parse_tagged_line, TaggedToken};
///
/// let tokens = parse_tagged_line("la/DET maison/NOUN").unwrap();
/// assert_eq!(vec![
///     TaggedToken::with_tag("la", "DET"),
///     TaggedToken::with_tag("maison", "NOUN"),
/// ], tokens);
///
/// assert!(parse_tagged_line("maison").is_err());
/// ```
pub fn parse_tagged_line(line: &str) -> Result<Vec<TaggedToken>> {
    let mut tokens = vec![];
    // Characters read since the last unescaped slash of the current field.
    let mut current = String::new();
    // Everything before that slash, once one has been seen.
    let mut head: Option<String> = None;
    let mut in_field = false;
    let mut escape = false;
    for c in line.chars() {
        match (escape, c) {
            (false, '\\') => {
                escape = true;
                in_field = true;
            }
            (false, '/') => {
                in_field = true;
                let part = std::mem::take(&mut current);
                match head.as_mut() {
                    Some(head) => {
                        head.push('/');
                        head.push_str(&part);
                    }
                    None => {
                        head = Some(part);
                    }
                }
            }
            (false, c) if c.is_whitespace() => {
                if in_field {
                    tokens.push(finish_token(&mut current, &mut head)?);
                    in_field = false;
                }
            }
            (_, c) => {
                escape = false;
                in_field = true;
                current.push(c);
            }
        }
    }
    if escape {
        return Err(LexalignError::invalid_format(
            "line ends with an escape character",
        ));
    }
    if in_field {
        tokens.push(finish_token(&mut current, &mut head)?);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tagged_line_empty() {
        assert_eq!(Vec::<TaggedToken>::new(), parse_tagged_line("").unwrap());
        assert_eq!(Vec::<TaggedToken>::new(), parse_tagged_line("  \n").unwrap());
    }

    #[test]
    fn test_parse_tagged_line_trailing_space() {
        // The format produced by older taggers ends every token with a space.
        let tokens = parse_tagged_line("the/DET house/NOUN \n").unwrap();
        assert_eq!(
            vec![
                TaggedToken::with_tag("the", "DET"),
                TaggedToken::with_tag("house", "NOUN"),
            ],
            tokens
        );
    }

    #[test]
    fn test_parse_tagged_line_last_slash_wins() {
        let tokens = parse_tagged_line("km/h/NOUN").unwrap();
        assert_eq!(vec![TaggedToken::with_tag("km/h", "NOUN")], tokens);
    }

    #[test]
    fn test_parse_tagged_line_escaped_slash() {
        let tokens = parse_tagged_line("and\\/or/CCONJ").unwrap();
        assert_eq!(vec![TaggedToken::with_tag("and/or", "CCONJ")], tokens);
    }

    #[test]
    fn test_parse_tagged_line_no_separator() {
        let e = parse_tagged_line("la/DET maison").unwrap_err();
        assert_eq!(
            "InvalidFormatError: token `maison` has no tag separator",
            e.to_string()
        );
    }

    #[test]
    fn test_parse_tagged_line_empty_tag() {
        assert!(parse_tagged_line("maison/").is_err());
        assert!(parse_tagged_line("/NOUN").is_err());
    }

    #[test]
    fn test_parse_tagged_line_dangling_escape() {
        assert!(parse_tagged_line("maison/NOUN \\").is_err());
    }

    #[test]
    fn test_to_tagged_string_escape() {
        let tokens = vec![
            TaggedToken::with_tag("a\\b", "SYM"),
            TaggedToken::with_tag("New York", "PROPN"),
        ];
        assert_eq!("a\\\\b/SYM New\\ York/PROPN", to_tagged_string(&tokens));
    }

    #[test]
    fn test_tagged_string_round_trip() {
        let tokens = vec![
            TaggedToken::with_tag("a\\b", "SYM"),
            TaggedToken::with_tag("km/h", "NOUN"),
            TaggedToken::with_tag("New York", "PROPN"),
            TaggedToken::with_tag(".", "PUNCT"),
        ];
        let line = to_tagged_string(&tokens);
        assert_eq!(tokens, parse_tagged_line(&line).unwrap());
    }
}
