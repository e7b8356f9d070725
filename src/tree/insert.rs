use super::node::Node;
use super::{Tree, TreeError, TreeResult};
use crate::path::{normalize_pattern, split_pattern_segment};
use crate::pattern::{ConstraintCache, SegmentKind, SegmentPattern, parse_segment};
use crate::types::{BoxError, TransformFn};
use smallvec::SmallVec;
use std::fmt;

type SegmentList = SmallVec<[SegmentPattern; 8]>;
type ProbeList<H> = SmallVec<[Node<H>; 8]>;

/// What to attach at a pattern.
pub enum Route<H> {
    /// Register a handler; re-registering an equal handler is a no-op.
    Handler(H),
    /// Splice another tree's routes beneath the pattern.
    Subtree(Tree<H>),
    /// Replace whatever is registered with the function's output.
    Transform(Box<TransformFn<H>>),
}

impl<H> Route<H> {
    fn describe(&self) -> &'static str {
        match self {
            Route::Handler(_) => "handler",
            Route::Subtree(_) => "subtree",
            Route::Transform(_) => "transform",
        }
    }
}

impl<H: fmt::Debug> fmt::Debug for Route<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Handler(handler) => f.debug_tuple("Handler").field(handler).finish(),
            Route::Subtree(tree) => f.debug_tuple("Subtree").field(tree).finish(),
            Route::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

impl<H: PartialEq> Tree<H> {
    pub fn insert(&mut self, pattern: &str, handler: H) -> TreeResult<()> {
        self.insert_route(pattern, Route::Handler(handler))
    }

    /// Registers the result of `transform(existing)` at `pattern`.
    pub fn insert_with<F>(&mut self, pattern: &str, transform: F) -> TreeResult<()>
    where
        F: FnOnce(Option<&H>) -> Result<H, BoxError> + Send + 'static,
    {
        self.insert_route(pattern, Route::Transform(Box::new(transform)))
    }

    /// Merges every route of `subtree` beneath `pattern`. An empty pattern
    /// merges at the root.
    pub fn insert_subtree(&mut self, pattern: &str, subtree: Tree<H>) -> TreeResult<()> {
        self.insert_route(pattern, Route::Subtree(subtree))
    }

    pub fn insert_route(&mut self, pattern: &str, route: Route<H>) -> TreeResult<()> {
        tracing::event!(
            tracing::Level::TRACE,
            operation = "insert",
            pattern = %pattern,
            route = route.describe()
        );

        let separator = self.separator;
        let normalized = normalize_pattern(pattern, separator);
        if normalized.is_empty() && !matches!(route, Route::Subtree(_)) {
            return Err(TreeError::EmptyPattern {
                pattern: pattern.to_string(),
            });
        }
        if let Route::Subtree(subtree) = &route
            && subtree.separator != separator
        {
            return Err(TreeError::SeparatorMismatch {
                expected: separator as char,
                found: subtree.separator as char,
            });
        }

        let segments = parse_pattern(&normalized, separator)?;
        let probes: ProbeList<H> = compile_segments(&mut self.constraints, segments, separator)?;

        // Every conflict is ruled out before the first node changes.
        let (existing, position) = resolve(&self.root, &probes, separator)?;
        let attach = match route {
            Route::Handler(handler) => {
                if let Some(current) = existing.and_then(|node| node.handler.as_ref())
                    && *current != handler
                {
                    return Err(TreeError::DuplicateRoute {
                        pattern: display_position(&position, separator),
                    });
                }
                Attach::Keep(handler)
            }
            Route::Transform(transform) => {
                let next = transform(existing.and_then(|node| node.handler.as_ref())).map_err(
                    |source| TreeError::Transform {
                        pattern: display_position(&position, separator),
                        source,
                    },
                )?;
                Attach::Replace(next)
            }
            Route::Subtree(subtree) => {
                match existing {
                    Some(target) => {
                        check_children(target, &subtree.root.children, &position, separator)?
                    }
                    None => {
                        if probes.last().is_some_and(|p| p.kind == SegmentKind::CatchAll)
                            && !subtree.root.children.is_empty()
                        {
                            return Err(TreeError::CatchAllWithChildren {
                                position: display_position(&position, separator),
                            });
                        }
                    }
                }
                Attach::Splice(subtree)
            }
        };

        let mut position = String::with_capacity(normalized.len() + 1);
        let mut current = &mut self.root;
        for probe in probes {
            let rendered = probe.render();
            current = merge_child(current, probe, &position, separator)?;
            position.push(separator as char);
            position.push_str(&rendered);
        }

        match attach {
            Attach::Keep(handler) => {
                if current.handler.is_none() {
                    current.handler = Some(handler);
                }
            }
            Attach::Replace(handler) => current.handler = Some(handler),
            Attach::Splice(subtree) => {
                let Tree {
                    root, constraints, ..
                } = subtree;
                self.constraints.absorb(constraints);
                for child in root.children {
                    merge_child(current, child, &position, separator)?;
                }
            }
        }

        Ok(())
    }
}

/// A route with every fallible step already taken.
enum Attach<H> {
    /// Store unless an equal handler is already there.
    Keep(H),
    Replace(H),
    Splice(Tree<H>),
}

/// Read-only walk along `probes`. Returns the node the pattern ends at, if
/// it already exists, and the pattern position as rendered from the probes.
fn resolve<'n, H>(
    root: &'n Node<H>,
    probes: &[Node<H>],
    separator: u8,
) -> TreeResult<(Option<&'n Node<H>>, String)> {
    let mut position = String::new();
    let mut current = Some(root);

    for probe in probes {
        if let Some(node) = current {
            if node.kind == SegmentKind::CatchAll {
                return Err(TreeError::CatchAllWithChildren {
                    position: display_position(&position, separator),
                });
            }
            current = find_child(node, probe);
            if let Some(child) = current {
                check_name(child, &probe.label, &position, separator)?;
            }
        }
        position.push(separator as char);
        position.push_str(&probe.render());
    }

    Ok((current, position))
}

/// Read-only counterpart of merging `incoming` beneath `target`.
fn check_children<H: PartialEq>(
    target: &Node<H>,
    incoming: &[Node<H>],
    position: &str,
    separator: u8,
) -> TreeResult<()> {
    if incoming.is_empty() {
        return Ok(());
    }
    if target.kind == SegmentKind::CatchAll {
        return Err(TreeError::CatchAllWithChildren {
            position: display_position(position, separator),
        });
    }

    for child in incoming {
        let Some(existing) = find_child(target, child) else {
            continue;
        };
        check_name(existing, &child.label, position, separator)?;
        if let (Some(current), Some(handler)) = (existing.handler.as_ref(), child.handler.as_ref())
            && current != handler
        {
            return Err(TreeError::DuplicateConflictingHandler {
                position: child_position(position, existing, separator),
            });
        }
        let next = child_position(position, existing, separator);
        check_children(existing, &child.children, &next, separator)?;
    }
    Ok(())
}

fn find_child<'n, H>(parent: &'n Node<H>, probe: &Node<H>) -> Option<&'n Node<H>> {
    parent
        .children
        .binary_search_by(|child| child.key().cmp(&probe.key()))
        .ok()
        .map(|index| &parent.children[index])
}

fn check_name<H>(
    node: &Node<H>,
    requested: &str,
    parent_position: &str,
    separator: u8,
) -> TreeResult<()> {
    if node.kind != SegmentKind::Static
        && !requested.is_empty()
        && !node.label.is_empty()
        && *node.label != *requested
    {
        return Err(TreeError::ParamNameConflict {
            position: child_position(parent_position, node, separator),
            existing: node.label.to_string(),
            requested: requested.to_string(),
        });
    }
    Ok(())
}

fn parse_pattern(normalized: &str, separator: u8) -> TreeResult<SegmentList> {
    let mut segments = SegmentList::new();
    let mut rest = normalized;
    while !rest.is_empty() {
        let (segment, next) = split_pattern_segment(rest, separator);
        segments.push(parse_segment(segment)?);
        rest = next;
    }

    if let Some(index) = segments.iter().position(SegmentPattern::is_catch_all)
        && index + 1 != segments.len()
    {
        return Err(TreeError::CatchAllNotLast {
            pattern: normalized.to_string(),
            segment_index: index,
            total_segments: segments.len(),
        });
    }

    Ok(segments)
}

fn compile_segments<H>(
    cache: &mut ConstraintCache,
    segments: SegmentList,
    separator: u8,
) -> TreeResult<ProbeList<H>> {
    segments
        .into_iter()
        .map(|segment| {
            let constraint = match segment.constraint.as_deref() {
                Some(raw) => Some(cache.compile(&segment.label, raw, separator)?),
                None => None,
            };
            Ok(Node::new(segment.kind, &segment.label, constraint))
        })
        .collect::<TreeResult<ProbeList<H>>>()
}

/// Finds the sibling structurally equal to `probe` and merges into it, or
/// inserts `probe` at its sorted position.
fn merge_child<'n, H: PartialEq>(
    parent: &'n mut Node<H>,
    probe: Node<H>,
    parent_position: &str,
    separator: u8,
) -> TreeResult<&'n mut Node<H>> {
    if parent.kind == SegmentKind::CatchAll {
        return Err(TreeError::CatchAllWithChildren {
            position: display_position(parent_position, separator),
        });
    }

    match parent
        .children
        .binary_search_by(|child| child.key().cmp(&probe.key()))
    {
        Ok(index) => {
            let child = &mut parent.children[index];
            absorb(child, probe, parent_position, separator)?;
            Ok(child)
        }
        Err(index) => {
            parent.children.insert(index, probe);
            Ok(&mut parent.children[index])
        }
    }
}

fn absorb<H: PartialEq>(
    node: &mut Node<H>,
    incoming: Node<H>,
    parent_position: &str,
    separator: u8,
) -> TreeResult<()> {
    let Node {
        label,
        handler,
        children,
        ..
    } = incoming;

    check_name(node, &label, parent_position, separator)?;
    if node.kind != SegmentKind::Static && node.label.is_empty() {
        node.label = label;
    }

    if let Some(handler) = handler {
        match node.handler.as_ref() {
            Some(existing) => {
                if *existing != handler {
                    return Err(TreeError::DuplicateConflictingHandler {
                        position: child_position(parent_position, node, separator),
                    });
                }
            }
            None => node.handler = Some(handler),
        }
    }

    if children.is_empty() {
        return Ok(());
    }

    let position = format!("{}{}{}", parent_position, separator as char, node.render());
    for child in children {
        merge_child(node, child, &position, separator)?;
    }
    Ok(())
}

fn child_position<H>(parent_position: &str, node: &Node<H>, separator: u8) -> String {
    format!("{}{}{}", parent_position, separator as char, node.render())
}

fn display_position(position: &str, separator: u8) -> String {
    if position.is_empty() {
        (separator as char).to_string()
    } else {
        position.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(node: &Node<&'static str>) -> Vec<String> {
        node.children.iter().map(Node::render).collect()
    }

    #[test]
    fn siblings_stay_sorted_regardless_of_insertion_order() {
        let mut tree = Tree::new();
        tree.insert("/*rest", "c").unwrap();
        tree.insert("/:id:[0-9]+", "p2").unwrap();
        tree.insert("/:id", "p1").unwrap();
        tree.insert("/b", "s2").unwrap();
        tree.insert("/a", "s1").unwrap();

        assert_eq!(
            labels(&tree.root),
            vec!["a", "b", ":id", ":id:[0-9]+", "*rest"]
        );
    }

    #[test]
    fn equivalent_params_share_one_node() {
        let mut tree = Tree::new();
        tree.insert("/users/:id/posts", "posts").unwrap();
        tree.insert("/users/:id/likes", "likes").unwrap();

        let users = &tree.root.children[0];
        assert_eq!(users.children.len(), 1);
        assert_eq!(users.children[0].children.len(), 2);
    }

    #[test]
    fn anonymous_param_adopts_later_name() {
        let mut tree = Tree::new();
        tree.insert("/:/child", "anon").unwrap();
        tree.insert("/:parent/other", "named").unwrap();

        assert_eq!(&*tree.root.children[0].label, "parent");
    }

    #[test]
    fn name_conflict_reports_position() {
        let mut tree = Tree::new();
        tree.insert("/users/:id", "a").unwrap();
        match tree.insert("/users/:uid/x", "b").unwrap_err() {
            TreeError::ParamNameConflict {
                position,
                existing,
                requested,
            } => {
                assert_eq!(position, "/users/:id");
                assert_eq!(existing, "id");
                assert_eq!(requested, "uid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn conflicting_insert_creates_no_nodes() {
        let mut tree = Tree::new();
        tree.insert("/a/:x", "x").unwrap();
        assert!(tree.insert("/a/:y/new/deep", "y").is_err());

        let param = &tree.root.children[0].children[0];
        assert_eq!(&*param.label, "x");
        assert!(param.children.is_empty());
    }

    #[test]
    fn invalid_constraint_leaves_tree_untouched() {
        let mut tree: Tree<&str> = Tree::new();
        assert!(tree.insert("/a/b/:id:[", "x").is_err());
        assert!(tree.root.children.is_empty());
    }
}
