use crate::title_normalizer::rules::{
    case::to_lower_case,
    whitespace::{collapse_double_spaces, collapse_spaces, trim_edges},
};

/// How runs of spaces inside a title are collapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpaceCollapse {
    /// Any run of two or more spaces becomes one space. Normalization is idempotent.
    #[default]
    Full,
    /// Each pair of spaces becomes one space in a single pass, so four spaces
    /// end up as two. Matches titles produced by the earlier importer.
    Legacy,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TitleNormalizer {
    pub spacing: SpaceCollapse,
}

impl TitleNormalizer {
    pub fn new(spacing: SpaceCollapse) -> Self {
        Self { spacing }
    }

    pub fn normalize(&self, input: &str) -> String {
        let mut s = trim_edges(input);

        s = to_lower_case(&s);
        s = match self.spacing {
            SpaceCollapse::Full => collapse_spaces(&s),
            SpaceCollapse::Legacy => collapse_double_spaces(&s),
        };

        s
    }
}
