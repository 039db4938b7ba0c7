//! The hidden child-content slot and its assignment normalization.

use std::ops::Deref;
use std::slice;

use intarsia_markup::{Element, IntoNode, Markup, Node};

/// Ordered child content attached to a component.
///
/// This is the component's hidden slot: not part of the model's schema
/// (mark the field `#[serde(skip)]` when deriving serde) and excluded from
/// model equality - two `Children` always compare equal, so deriving
/// `PartialEq` on a model ignores attached content. It is only ever written
/// through [`HasChildren::with_children`](crate::HasChildren::with_children),
/// which replaces the whole slot; reads go through the accessor, which hands
/// out a read-only view.
#[derive(Debug, Clone, Default)]
pub struct Children {
    nodes: Vec<Node>,
}

impl Children {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Attached content never participates in model equality.
impl PartialEq for Children {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for Children {}

impl Deref for Children {
    type Target = [Node];

    fn deref(&self) -> &[Node] {
        &self.nodes
    }
}

impl<'a> IntoIterator for &'a Children {
    type Item = &'a Node;
    type IntoIter = slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Embedding the slot in a fragment splices the children in place, with no
/// wrapper and no separators.
impl From<&Children> for Node {
    fn from(children: &Children) -> Node {
        Node::Fragment(children.nodes.clone())
    }
}

impl IntoNode for &Children {
    fn into_node(self) -> Node {
        Node::from(self)
    }
}

/// Normalization applied when content is assigned to the slot.
///
/// Sequences - tuples, arrays, `Vec`s, an existing [`Children`] - convert
/// element-wise in order. Any single accepted value wraps into a
/// one-element slot. Every input is accepted; there is no rejection path.
pub trait IntoChildren {
    fn into_children(self) -> Children;
}

impl IntoChildren for Children {
    fn into_children(self) -> Children {
        self
    }
}

impl IntoChildren for &Children {
    fn into_children(self) -> Children {
        self.clone()
    }
}

impl IntoChildren for () {
    fn into_children(self) -> Children {
        Children::default()
    }
}

impl<T: IntoNode> IntoChildren for Vec<T> {
    fn into_children(self) -> Children {
        Children {
            nodes: self.into_iter().map(IntoNode::into_node).collect(),
        }
    }
}

impl<T: IntoNode, const N: usize> IntoChildren for [T; N] {
    fn into_children(self) -> Children {
        Children {
            nodes: self.into_iter().map(IntoNode::into_node).collect(),
        }
    }
}

impl IntoChildren for Node {
    fn into_children(self) -> Children {
        Children { nodes: vec![self] }
    }
}

impl IntoChildren for Element {
    fn into_children(self) -> Children {
        Children {
            nodes: vec![self.into_node()],
        }
    }
}

impl IntoChildren for Markup {
    fn into_children(self) -> Children {
        Children {
            nodes: vec![self.into_node()],
        }
    }
}

impl IntoChildren for &str {
    fn into_children(self) -> Children {
        Children {
            nodes: vec![self.into_node()],
        }
    }
}

impl IntoChildren for String {
    fn into_children(self) -> Children {
        Children {
            nodes: vec![self.into_node()],
        }
    }
}

macro_rules! impl_into_children_for_tuple {
    ($($name:ident),+) => {
        #[allow(non_snake_case)]
        impl<$($name: IntoNode),+> IntoChildren for ($($name,)+) {
            fn into_children(self) -> Children {
                let ($($name,)+) = self;
                Children {
                    nodes: vec![$($name.into_node()),+],
                }
            }
        }
    };
}

impl_into_children_for_tuple!(A);
impl_into_children_for_tuple!(A, B);
impl_into_children_for_tuple!(A, B, C);
impl_into_children_for_tuple!(A, B, C, D);
impl_into_children_for_tuple!(A, B, C, D, E);
impl_into_children_for_tuple!(A, B, C, D, E, F);
impl_into_children_for_tuple!(A, B, C, D, E, F, G);
impl_into_children_for_tuple!(A, B, C, D, E, F, G, H);
impl_into_children_for_tuple!(A, B, C, D, E, F, G, H, I);
impl_into_children_for_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_into_children_for_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_into_children_for_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

#[cfg(test)]
mod tests {
    use super::*;
    use intarsia_markup::div;

    #[test]
    fn test_single_value_wraps() {
        let children = "hello".into_children();
        assert_eq!(children.len(), 1);
        assert!(matches!(&children[0], Node::Text(t) if t == "hello"));
    }

    #[test]
    fn test_tuple_preserves_order() {
        let children = ("a", div().child("b"), "c").into_children();
        assert_eq!(children.len(), 3);
        assert!(matches!(&children[0], Node::Text(t) if t == "a"));
        assert!(matches!(&children[1], Node::Element(_)));
        assert!(matches!(&children[2], Node::Text(t) if t == "c"));
    }

    #[test]
    fn test_vec_converts_element_wise() {
        let children = vec!["a", "b"].into_children();
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_unit_is_empty() {
        assert!(().into_children().is_empty());
    }

    #[test]
    fn test_equality_always_holds() {
        let some = ("a", "b").into_children();
        let other = Children::default();
        assert_eq!(some, other);
    }

    #[test]
    fn test_embeds_as_fragment() {
        let children = ("a", "b").into_children();
        let node = Node::from(&children);
        assert_eq!(node.render().as_str(), "ab");
    }
}
