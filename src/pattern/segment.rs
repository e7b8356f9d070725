/// Node classification. The declaration order is the sibling priority:
/// literals are tried before parameters, parameters before catch-alls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SegmentKind {
    Static,
    Param,
    CatchAll,
}

/// One parsed pattern segment, before its constraint is compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPattern {
    pub kind: SegmentKind,
    /// Literal text for `Static`, binding name otherwise (possibly empty).
    pub label: String,
    /// Constraint source exactly as written in the pattern.
    pub constraint: Option<String>,
}

impl SegmentPattern {
    pub fn literal<S: Into<String>>(text: S) -> Self {
        Self {
            kind: SegmentKind::Static,
            label: text.into(),
            constraint: None,
        }
    }

    pub fn is_catch_all(&self) -> bool {
        self.kind == SegmentKind::CatchAll
    }
}
