/// List marker kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMarker {
    Dash,             // "-"
    Asterisk,         // "*"
    Plus,             // "+"
    Numbered(String), // "1.", "2)", etc.
}

/// A parsed list item opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub marker: ListMarker,
    /// Leading whitespace before the marker, in bytes.
    pub indent: usize,
    /// Byte index in the line at which the item text starts.
    pub content_offset: usize,
}

impl ListItem {
    const MAX_ORDINAL_DIGITS: usize = 9;

    /// Parses a bullet or ordered list opener. The marker must be followed by
    /// whitespace or the end of the line, so `*emphasis*` and `---` are not
    /// list items.
    pub fn parse(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        let indent = b.iter().take_while(|&&c| c == b' ' || c == b'\t').count();
        let rest = &b[indent..];

        let (marker, marker_len) = match rest.first()? {
            b'-' => (ListMarker::Dash, 1),
            b'*' => (ListMarker::Asterisk, 1),
            b'+' => (ListMarker::Plus, 1),
            b'0'..=b'9' => {
                let digits = rest.iter().take_while(|c| c.is_ascii_digit()).count();
                if digits > Self::MAX_ORDINAL_DIGITS {
                    return None;
                }
                match rest.get(digits) {
                    Some(b'.') | Some(b')') => {
                        let text = &s[indent..indent + digits + 1];
                        (ListMarker::Numbered(text.to_string()), digits + 1)
                    }
                    _ => return None,
                }
            }
            _ => return None,
        };

        let after = indent + marker_len;
        match b.get(after) {
            None => Some(Self {
                marker,
                indent,
                content_offset: after,
            }),
            Some(b' ') | Some(b'\t') => Some(Self {
                marker,
                indent,
                content_offset: after + 1,
            }),
            Some(_) => None,
        }
    }

    /// Nesting depth assuming two columns per level.
    pub fn depth(&self) -> usize {
        self.indent / 2
    }
}
