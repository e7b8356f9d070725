use super::node::Node;
use super::{Bindings, Match, Tree};
use crate::path::{count_segments, normalize_path, split_first_segment};
use crate::pattern::SegmentKind;

const TRAVERSAL_STACK_CAPACITY: usize = 64;

/// Which results a lookup keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchMode {
    First,
    All,
    Both,
}

impl MatchMode {
    #[inline]
    fn wants_first(self) -> bool {
        matches!(self, MatchMode::First | MatchMode::Both)
    }

    #[inline]
    fn wants_all(self) -> bool {
        matches!(self, MatchMode::All | MatchMode::Both)
    }
}

/// How a branch extends the bindings it inherited.
///
/// `InPlace` pushes onto the shared buffer and truncates on the way back;
/// it is only sound when the walk stops at the first recorded result.
/// `CopyOnExtend` gives each extending branch its own exactly sized copy,
/// so results recorded in one branch never share storage with a sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExtendStrategy {
    InPlace,
    CopyOnExtend,
}

impl<H> Tree<H> {
    /// Best match for `path`, if any.
    pub fn match_first(&self, path: &str) -> Option<Match<'_, H>> {
        self.lookup(path, MatchMode::First).0
    }

    /// Every match for `path` in discovery order: at each level literals come
    /// before parameters and parameters before catch-alls.
    pub fn match_all(&self, path: &str) -> Vec<Match<'_, H>> {
        self.lookup(path, MatchMode::All).1
    }

    /// `match_first` and `match_all` from a single walk.
    pub fn match_both(&self, path: &str) -> (Option<Match<'_, H>>, Vec<Match<'_, H>>) {
        self.lookup(path, MatchMode::Both)
    }

    pub(crate) fn lookup(
        &self,
        path: &str,
        mode: MatchMode,
    ) -> (Option<Match<'_, H>>, Vec<Match<'_, H>>) {
        let normalized = normalize_path(path, self.separator);
        if normalized.is_empty() {
            return (None, Vec::new());
        }

        // Every segment binds at most once, plus an empty catch-all tail.
        let capacity = count_segments(&normalized, self.separator) + 1;
        let mut bindings = Bindings::with_capacity(capacity);
        let mut collector = Collector::new(mode, self.separator);
        collector.walk(&self.root, &normalized, &mut bindings, 0);
        let (first, all) = collector.finish();

        if self.debug {
            tracing::event!(
                tracing::Level::DEBUG,
                mode = ?mode,
                path = %path,
                matched = first.is_some() || !all.is_empty(),
                results = all.len() as u64,
                "segment tree lookup"
            );
        }

        (first, all)
    }
}

struct Collector<'t, H> {
    mode: MatchMode,
    separator: u8,
    first: Option<Match<'t, H>>,
    all: Vec<Match<'t, H>>,
    discovered: usize,
}

impl<'t, H> Collector<'t, H> {
    fn new(mode: MatchMode, separator: u8) -> Self {
        Self {
            mode,
            separator,
            first: None,
            all: Vec::new(),
            discovered: 0,
        }
    }

    #[inline]
    fn strategy(&self) -> ExtendStrategy {
        if self.mode.wants_all() {
            ExtendStrategy::CopyOnExtend
        } else {
            ExtendStrategy::InPlace
        }
    }

    #[inline]
    fn done(&self) -> bool {
        !self.mode.wants_all() && self.first.is_some()
    }

    fn record(&mut self, bindings: &Bindings, handler: &'t H, depth: usize) {
        let sequence = self.discovered;
        self.discovered += 1;

        if self.mode.wants_first() && self.first.is_none() {
            self.first = Some(Match::new(bindings.snapshot(), handler, depth, sequence));
        }
        if self.mode.wants_all() {
            self.all
                .push(Match::new(bindings.snapshot(), handler, depth, sequence));
        }
    }

    fn walk(&mut self, node: &'t Node<H>, path: &str, bindings: &mut Bindings, depth: usize) {
        if path.is_empty()
            && let Some(handler) = node.handler.as_ref()
        {
            self.record(bindings, handler, depth);
        }

        let (segment, rest) = split_first_segment(path, self.separator);
        for child in node.children.iter() {
            match child.kind {
                SegmentKind::Static => {
                    if !path.is_empty() && *child.label == *segment {
                        self.walk(child, rest, bindings, depth + 1);
                    }
                }
                SegmentKind::Param => {
                    if !path.is_empty() && child.accepts(segment) {
                        self.with_binding(&child.label, segment, bindings, |this, extended| {
                            this.walk(child, rest, extended, depth + 1);
                        });
                    }
                }
                SegmentKind::CatchAll => {
                    if let Some(handler) = child.handler.as_ref()
                        && child.accepts(path)
                    {
                        let consumed = depth + count_segments(path, self.separator);
                        self.with_binding(&child.label, path, bindings, |this, extended| {
                            this.record(extended, handler, consumed);
                        });
                    }
                }
            }

            if self.done() {
                break;
            }
        }
    }

    /// Runs `then` with `bindings` extended by `key = value`; an empty key
    /// matches without binding.
    fn with_binding<F>(&mut self, key: &str, value: &str, bindings: &mut Bindings, then: F)
    where
        F: FnOnce(&mut Self, &mut Bindings),
    {
        if key.is_empty() {
            then(self, bindings);
            return;
        }

        match self.strategy() {
            ExtendStrategy::InPlace => {
                let mark = bindings.len();
                bindings.push(key, value);
                then(self, bindings);
                bindings.truncate(mark);
            }
            ExtendStrategy::CopyOnExtend => {
                let mut branch = bindings.extended(key, value);
                then(self, &mut branch);
            }
        }
    }

    fn finish(mut self) -> (Option<Match<'t, H>>, Vec<Match<'t, H>>) {
        self.all.sort_by_key(Match::rank);
        (self.first, self.all)
    }
}

/// Depth-first traversal over every node.
/// Uses an explicit stack to avoid recursion on deep trees.
pub(crate) fn traverse<H, F>(root: &Node<H>, mut action: F)
where
    F: FnMut(&Node<H>),
{
    let mut stack: Vec<&Node<H>> = Vec::with_capacity(TRAVERSAL_STACK_CAPACITY);
    stack.push(root);

    while let Some(node) = stack.pop() {
        action(node);
        stack.extend(node.children.iter().rev());
    }
}
