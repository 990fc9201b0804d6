use super::types::ContainerFrame;

/// The container stack a leaf block is nested within.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContainerPath(pub Vec<ContainerFrame>);

impl ContainerPath {
    pub fn for_quote_depth(depth: u8) -> Self {
        if depth == 0 {
            Self::default()
        } else {
            Self(vec![ContainerFrame::BlockQuote { depth }])
        }
    }
}
