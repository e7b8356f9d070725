use super::Tree;
use super::node::Node;
use std::fmt::{self, Write};

/// A registered pattern and its handler, as reported by [`Tree::routes`].
#[derive(Debug, PartialEq, Eq)]
pub struct RouteEntry<'t, H> {
    pub pattern: String,
    pub handler: &'t H,
}

impl<H> Tree<H> {
    /// Every registered route in sibling priority order.
    pub fn routes(&self) -> Vec<RouteEntry<'_, H>> {
        let mut out = Vec::new();
        let mut buf = String::new();
        collect_routes(&self.root, self.separator as char, &mut buf, &mut out);
        out
    }

    /// One pattern per line, for registration audits.
    pub fn dump(&self) -> String {
        let mut text = String::new();
        for entry in self.routes() {
            let _ = writeln!(text, "{}", entry.pattern);
        }
        text
    }
}

impl<H> fmt::Display for Tree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.routes() {
            writeln!(f, "{}", entry.pattern)?;
        }
        Ok(())
    }
}

fn collect_routes<'t, H>(
    node: &'t Node<H>,
    separator: char,
    buf: &mut String,
    out: &mut Vec<RouteEntry<'t, H>>,
) {
    for child in node.children.iter() {
        let prev = buf.len();
        buf.push(separator);
        buf.push_str(&child.render());
        if let Some(handler) = child.handler.as_ref() {
            out.push(RouteEntry {
                pattern: buf.clone(),
                handler,
            });
        }
        collect_routes(child, separator, buf, out);
        buf.truncate(prev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_routes_in_priority_order() {
        let mut tree = Tree::new();
        tree.insert("/*allpath:.*\\.txt", "txt").unwrap();
        tree.insert("/:parent/child", "child").unwrap();
        tree.insert("/static", "static").unwrap();

        let patterns: Vec<_> = tree.routes().into_iter().map(|e| e.pattern).collect();
        assert_eq!(
            patterns,
            vec!["/static", "/:parent/child", "/*allpath:.*\\.txt"]
        );
        assert_eq!(tree.dump(), "/static\n/:parent/child\n/*allpath:.*\\.txt\n");
        assert_eq!(tree.to_string(), tree.dump());
    }

    #[test]
    fn handlers_are_reported_alongside_patterns() {
        let mut tree = Tree::new();
        tree.insert("/a/b", 7).unwrap();
        let routes = tree.routes();
        assert_eq!(routes.len(), 1);
        assert_eq!(*routes[0].handler, 7);
    }
}
