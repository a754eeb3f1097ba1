//! Visibility of rendered elements under type toggles
//!
//! Evaluated against whatever the rendering widget currently holds, reached
//! through the [`RenderedGraph`] seam rather than the original snapshot.

use crate::value_objects::{EdgeId, EdgeType, NodeId, NodeType};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// An element instantiated in the rendering widget
pub trait RenderedElement {
    fn id(&self) -> &str;

    /// Value of a data field, `None` when the element has no such field
    fn data(&self, key: &str) -> Option<Value>;
}

/// A rendered edge, which also knows its endpoints
pub trait RenderedEdge: RenderedElement {
    fn source(&self) -> &str;
    fn target(&self) -> &str;
}

/// Live handle onto the widget's current node and edge collections
pub trait RenderedGraph {
    type Node: RenderedElement;
    type Edge: RenderedEdge;

    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;
    fn edges(&self) -> impl Iterator<Item = &Self::Edge>;
}

/// Type toggles and the set of edge types allowed on screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityFilter {
    pub show_authors: bool,
    pub show_publishers: bool,
    pub show_binders: bool,
    pub allowed_edge_types: HashSet<EdgeType>,
}

impl Default for VisibilityFilter {
    fn default() -> Self {
        Self {
            show_authors: true,
            show_publishers: true,
            show_binders: true,
            allowed_edge_types: EdgeType::ALL.into_iter().collect(),
        }
    }
}

impl VisibilityFilter {
    pub fn shows(&self, node_type: NodeType) -> bool {
        match node_type {
            NodeType::Author => self.show_authors,
            NodeType::Publisher => self.show_publishers,
            NodeType::Binder => self.show_binders,
        }
    }

    pub fn allows(&self, edge_type: EdgeType) -> bool {
        self.allowed_edge_types.contains(&edge_type)
    }
}

/// Ids of the elements that should be shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleElements {
    pub node_ids: HashSet<NodeId>,
    pub edge_ids: HashSet<EdgeId>,
}

fn type_of<T, E>(element: &E) -> Option<T>
where
    T: std::str::FromStr,
    E: RenderedElement + ?Sized,
{
    element.data("type")?.as_str()?.parse().ok()
}

/// Nodes whose type is toggled on, and edges whose type is allowed and whose
/// endpoints are both visible
///
/// Elements with a missing or unrecognized `type` are hidden.
pub fn get_visible_element_ids<G>(graph: &G, filter: &VisibilityFilter) -> VisibleElements
where
    G: RenderedGraph + ?Sized,
{
    let node_ids: HashSet<NodeId> = graph
        .nodes()
        .filter(|node| type_of::<NodeType, _>(*node).is_some_and(|t| filter.shows(t)))
        .map(|node| NodeId::from(node.id()))
        .collect();

    let edge_ids: HashSet<EdgeId> = graph
        .edges()
        .filter(|edge| type_of::<EdgeType, _>(*edge).is_some_and(|t| filter.allows(t)))
        .filter(|edge| {
            node_ids.contains(&NodeId::from(edge.source())) && node_ids.contains(&NodeId::from(edge.target()))
        })
        .map(|edge| EdgeId::from(edge.id()))
        .collect();

    tracing::debug!(
        nodes = node_ids.len(),
        edges = edge_ids.len(),
        "Computed visible elements"
    );

    VisibleElements { node_ids, edge_ids }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{GraphEdge, GraphNode, GraphSnapshot};
    use crate::transformations::transform_to_cytoscape_elements;

    struct Widget {
        nodes: Vec<(String, &'static str)>,
        edges: Vec<(String, &'static str, String, String)>,
    }

    struct WidgetNode<'a>(&'a (String, &'static str));
    struct WidgetEdge<'a>(&'a (String, &'static str, String, String));

    fn elements() -> Vec<crate::transformations::RenderElement> {
        let snapshot = GraphSnapshot::new(
            vec![
                GraphNode::new(NodeType::Author, 1, "Dickens"),
                GraphNode::new(NodeType::Author, 2, "Collins"),
                GraphNode::new(NodeType::Publisher, 3, "Chapman & Hall"),
                GraphNode::new(NodeType::Binder, 4, "Zaehnsdorf"),
            ],
            vec![
                GraphEdge::new("e1", "author:1", "publisher:3", EdgeType::Publisher, 2),
                GraphEdge::new("e2", "author:1", "author:2", EdgeType::SharedPublisher, 1),
                GraphEdge::new("e3", "author:2", "binder:4", EdgeType::Binder, 1),
            ],
        );
        transform_to_cytoscape_elements(&snapshot)
    }

    fn sorted<T: ToString>(ids: &HashSet<T>) -> Vec<String> {
        let mut ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_everything_visible_by_default() {
        let elements = elements();
        let visible = get_visible_element_ids(elements.as_slice(), &VisibilityFilter::default());
        assert_eq!(visible.node_ids.len(), 4);
        assert_eq!(visible.edge_ids.len(), 3);
    }

    #[test]
    fn test_hidden_type_hides_its_edges() {
        let elements = elements();
        let filter = VisibilityFilter {
            show_publishers: false,
            ..Default::default()
        };
        let visible = get_visible_element_ids(elements.as_slice(), &filter);
        assert_eq!(sorted(&visible.node_ids), vec!["author:1", "author:2", "binder:4"]);
        assert_eq!(sorted(&visible.edge_ids), vec!["e2", "e3"]);
    }

    #[test]
    fn test_edge_type_must_be_allowed() {
        let elements = elements();
        let filter = VisibilityFilter {
            allowed_edge_types: HashSet::from([EdgeType::Binder]),
            ..Default::default()
        };
        let visible = get_visible_element_ids(elements.as_slice(), &filter);
        assert_eq!(visible.node_ids.len(), 4);
        assert_eq!(sorted(&visible.edge_ids), vec!["e3"]);
    }

    impl RenderedElement for WidgetNode<'_> {
        fn id(&self) -> &str {
            &self.0 .0
        }

        fn data(&self, key: &str) -> Option<Value> {
            (key == "type").then(|| Value::from(self.0 .1))
        }
    }

    impl RenderedElement for WidgetEdge<'_> {
        fn id(&self) -> &str {
            &self.0 .0
        }

        fn data(&self, key: &str) -> Option<Value> {
            (key == "type").then(|| Value::from(self.0 .1))
        }
    }

    impl RenderedEdge for WidgetEdge<'_> {
        fn source(&self) -> &str {
            &self.0 .2
        }

        fn target(&self) -> &str {
            &self.0 .3
        }
    }

    #[test]
    fn test_unknown_types_and_dangling_edges_are_hidden() {
        let widget = Widget {
            nodes: vec![("author:1".into(), "author"), ("mystery:9".into(), "printer")],
            edges: vec![
                ("e1".into(), "publisher", "author:1".into(), "publisher:3".into()),
                ("e2".into(), "shared_publisher", "author:1".into(), "mystery:9".into()),
            ],
        };
        let nodes: Vec<WidgetNode> = widget.nodes.iter().map(WidgetNode).collect();
        let edges: Vec<WidgetEdge> = widget.edges.iter().map(WidgetEdge).collect();
        let live = LiveCollections { nodes, edges };

        let visible = get_visible_element_ids(&live, &VisibilityFilter::default());
        assert_eq!(sorted(&visible.node_ids), vec!["author:1"]);
        assert!(visible.edge_ids.is_empty());
    }

    struct LiveCollections<'a> {
        nodes: Vec<WidgetNode<'a>>,
        edges: Vec<WidgetEdge<'a>>,
    }

    impl<'a> RenderedGraph for LiveCollections<'a> {
        type Node = WidgetNode<'a>;
        type Edge = WidgetEdge<'a>;

        fn nodes(&self) -> impl Iterator<Item = &Self::Node> {
            self.nodes.iter()
        }

        fn edges(&self) -> impl Iterator<Item = &Self::Edge> {
            self.edges.iter()
        }
    }
}
