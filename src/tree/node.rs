use crate::pattern::{Constraint, SegmentKind};

/// Sort key for siblings. Field order is significant: kind first, then
/// unconstrained before constrained, then literal text or constraint source.
/// Two nodes with equal keys occupy the same structural position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct NodeKey<'a> {
    kind: SegmentKind,
    constrained: bool,
    discriminant: &'a str,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<H> {
    pub(crate) kind: SegmentKind,
    pub(crate) label: Box<str>,
    pub(crate) constraint: Option<Constraint>,
    pub(crate) handler: Option<H>,
    pub(crate) children: Vec<Node<H>>,
}

impl<H> Node<H> {
    pub(crate) fn root() -> Self {
        Self {
            kind: SegmentKind::Static,
            label: Box::from(""),
            constraint: None,
            handler: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn new(kind: SegmentKind, label: &str, constraint: Option<Constraint>) -> Self {
        Self {
            kind,
            label: Box::from(label),
            constraint,
            handler: None,
            children: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> NodeKey<'_> {
        let discriminant = match self.kind {
            SegmentKind::Static => &*self.label,
            SegmentKind::Param | SegmentKind::CatchAll => {
                self.constraint.as_ref().map_or("", Constraint::raw)
            }
        };
        NodeKey {
            kind: self.kind,
            constrained: self.constraint.is_some(),
            discriminant,
        }
    }

    /// Whether a dynamic node accepts `text` (one segment for a param, the
    /// whole remainder for a catch-all).
    #[inline]
    pub(crate) fn accepts(&self, text: &str) -> bool {
        self.constraint.as_ref().is_none_or(|c| c.is_match(text))
    }

    /// The segment as it would be written in a pattern.
    pub(crate) fn render(&self) -> String {
        let mut out = String::with_capacity(self.label.len() + 1);
        match self.kind {
            SegmentKind::Static => {}
            SegmentKind::Param => out.push(':'),
            SegmentKind::CatchAll => out.push('*'),
        }
        out.push_str(&self.label);
        if let Some(constraint) = self.constraint.as_ref() {
            out.push(':');
            out.push_str(constraint.raw());
        }
        out
    }
}
