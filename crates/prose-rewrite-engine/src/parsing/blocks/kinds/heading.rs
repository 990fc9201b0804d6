/// ATX heading syntax (`# Title` through `###### Title`).
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Parses an ATX heading opener, returning `(level, content_offset)` where
    /// `content_offset` is the byte index in `s` at which the heading text
    /// starts.
    pub fn parse(s: &str) -> Option<(u8, usize)> {
        let b = s.as_bytes();
        let indent = b.iter().take_while(|&&c| c == b' ').count();
        if indent > 3 {
            return None;
        }

        let hashes = b[indent..].iter().take_while(|&&c| c == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL {
            return None;
        }

        let after = indent + hashes;
        match b.get(after) {
            None => Some((hashes as u8, after)),
            Some(b' ') | Some(b'\t') => {
                let gap = b[after..]
                    .iter()
                    .take_while(|&&c| c == b' ' || c == b'\t')
                    .count();
                Some((hashes as u8, after + gap))
            }
            Some(_) => None,
        }
    }
}
