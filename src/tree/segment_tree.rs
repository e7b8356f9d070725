use super::node::Node;
use super::traversal::traverse;
use crate::path::DEFAULT_SEPARATOR;
use crate::pattern::ConstraintCache;
use crate::router::{RouterOptions, RouterOptionsError};

/// The segment tree. Build it with the `insert*` methods, then share it
/// (`&Tree` or `Arc<Tree>`) for lookups; matching never mutates it.
#[derive(Debug, Clone)]
pub struct Tree<H> {
    pub(crate) root: Node<H>,
    pub(crate) separator: u8,
    pub(crate) debug: bool,
    pub(crate) constraints: ConstraintCache,
}

impl<H> Tree<H> {
    pub fn new() -> Self {
        Self {
            root: Node::root(),
            separator: DEFAULT_SEPARATOR,
            debug: false,
            constraints: ConstraintCache::new(),
        }
    }

    pub fn with_options(options: RouterOptions) -> Result<Self, RouterOptionsError> {
        options.validate()?;
        Ok(Self {
            root: Node::root(),
            separator: options.separator_byte(),
            debug: options.debug,
            constraints: ConstraintCache::new(),
        })
    }

    pub fn separator(&self) -> char {
        self.separator as char
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        let mut count = 0usize;
        traverse(&self.root, |node| {
            if node.handler.is_some() {
                count += 1;
            }
        });
        count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H> Default for Tree<H> {
    fn default() -> Self {
        Self::new()
    }
}
