use crate::node::{ElementNode, MarkupNode};

/// The MarkupVisitor trait defines the single traversal mechanism for markup trees.
///
/// Rules:
/// 1. Traversal is depth-first, parents before children, siblings in order.
/// 2. Implementers override `visit_*` methods to add behavior.
/// 3. Implementers MUST call `walk_*` functions to continue traversal unless pruning is intended.
pub trait MarkupVisitor {
    fn visit_nodes(&mut self, nodes: &mut [MarkupNode]) {
        walk_nodes(self, nodes);
    }

    fn visit_node(&mut self, node: &mut MarkupNode) {
        walk_node(self, node);
    }

    fn visit_element(&mut self, element: &mut ElementNode) {
        walk_element(self, element);
    }

    fn visit_text(&mut self, _text: &mut String) {
        // Leaf node, nothing to walk
    }
}

pub fn walk_nodes<V: MarkupVisitor + ?Sized>(visitor: &mut V, nodes: &mut [MarkupNode]) {
    for node in nodes {
        visitor.visit_node(node);
    }
}

pub fn walk_node<V: MarkupVisitor + ?Sized>(visitor: &mut V, node: &mut MarkupNode) {
    match node {
        MarkupNode::Element(el) => visitor.visit_element(el),
        MarkupNode::Text(t) => visitor.visit_text(t),
    }
}

pub fn walk_element<V: MarkupVisitor + ?Sized>(visitor: &mut V, element: &mut ElementNode) {
    if let Some(children) = &mut element.children {
        visitor.visit_nodes(children);
    }
}

/// Calls `visit` once for every element satisfying `predicate`, stopping at the first error.
///
/// This is the `tree.match(pattern, fn)` contract of posthtml-like hosts,
/// expressed on top of [`MarkupVisitor`]. Returns the number of matched elements.
pub fn match_elements<P, F, E>(
    nodes: &mut [MarkupNode],
    predicate: P,
    visit: F,
) -> Result<usize, E>
where
    P: Fn(&ElementNode) -> bool,
    F: FnMut(&mut ElementNode) -> Result<(), E>,
{
    let mut matcher = Matcher {
        predicate,
        visit,
        matched: 0,
        error: None,
    };
    matcher.visit_nodes(nodes);
    match matcher.error {
        Some(e) => Err(e),
        None => Ok(matcher.matched),
    }
}

struct Matcher<P, F, E> {
    predicate: P,
    visit: F,
    matched: usize,
    error: Option<E>,
}

impl<P, F, E> MarkupVisitor for Matcher<P, F, E>
where
    P: Fn(&ElementNode) -> bool,
    F: FnMut(&mut ElementNode) -> Result<(), E>,
{
    fn visit_node(&mut self, node: &mut MarkupNode) {
        if self.error.is_none() {
            walk_node(self, node);
        }
    }

    fn visit_element(&mut self, element: &mut ElementNode) {
        if (self.predicate)(element) {
            if let Err(e) = (self.visit)(element) {
                self.error = Some(e);
                return;
            }
            self.matched += 1;
        }
        walk_element(self, element);
    }
}

/// Parallel version of [`match_elements`] using rayon.
///
/// Siblings are processed on the rayon pool; each element is still checked
/// against `predicate` before its own children are walked. The visit order is
/// unspecified, so `visit` must not depend on other nodes.
pub fn par_match_elements<P, F, E>(
    nodes: &mut [MarkupNode],
    predicate: &P,
    visit: &F,
) -> Result<usize, E>
where
    P: Fn(&ElementNode) -> bool + Sync,
    F: Fn(&mut ElementNode) -> Result<(), E> + Sync,
    E: Send,
{
    use rayon::prelude::*;

    nodes
        .par_iter_mut()
        .map(|node| -> Result<usize, E> {
            let MarkupNode::Element(el) = node else {
                return Ok(0);
            };
            let mut matched = 0;
            if predicate(el) {
                visit(el)?;
                matched += 1;
            }
            if let Some(children) = &mut el.children {
                matched += par_match_elements(children, predicate, visit)?;
            }
            Ok(matched)
        })
        .try_reduce(|| 0, |a, b| Ok(a + b))
}
