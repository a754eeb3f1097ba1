//! Transformation of snapshot records into styled render elements
//!
//! The transform is additive: every original field travels with the derived
//! styling so consumers of the element list still see ids, book lists and
//! evidence. Elements serialize in the `{ "group": ..., "data": { ... } }`
//! shape expected by Cytoscape.

use crate::components::visual::{self, Color, LineStyle, Shape};
use crate::components::{GraphEdge, GraphNode, GraphSnapshot};
use crate::config::EngineConfig;
use crate::layout::LayoutProfile;
use crate::queries::visibility::{get_visible_element_ids, RenderedEdge, RenderedElement, RenderedGraph};
use serde::Serialize;
use serde_json::Value;

/// A node record plus its visual encoding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    #[serde(flatten)]
    pub node: GraphNode,
    pub color: Color,
    pub shape: Shape,
    pub size: f64,
}

/// An edge record plus its visual encoding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderEdge {
    #[serde(flatten)]
    pub edge: GraphEdge,
    pub color: Color,
    pub width: f64,
    pub line_style: LineStyle,
    pub opacity: f64,
}

/// One entry of the element list handed to the rendering widget
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "group", content = "data", rename_all = "lowercase")]
pub enum RenderElement {
    Nodes(RenderNode),
    Edges(RenderEdge),
}

impl RenderElement {
    pub fn id(&self) -> &str {
        match self {
            RenderElement::Nodes(node) => node.node.id.as_str(),
            RenderElement::Edges(edge) => edge.edge.id.as_str(),
        }
    }

    pub fn as_node(&self) -> Option<&RenderNode> {
        match self {
            RenderElement::Nodes(node) => Some(node),
            RenderElement::Edges(_) => None,
        }
    }

    pub fn as_edge(&self) -> Option<&RenderEdge> {
        match self {
            RenderElement::Edges(edge) => Some(edge),
            RenderElement::Nodes(_) => None,
        }
    }
}

pub fn transform_node(node: &GraphNode) -> RenderNode {
    RenderNode {
        color: visual::node_color(node.node_type, node.style_key()),
        shape: visual::node_shape(node.node_type),
        size: visual::node_size(node.book_count),
        node: node.clone(),
    }
}

pub fn transform_edge(edge: &GraphEdge) -> RenderEdge {
    let style = visual::edge_style(edge.edge_type);
    RenderEdge {
        color: style.color,
        width: visual::edge_width(edge.strength),
        line_style: style.line_style,
        opacity: style.opacity,
        edge: edge.clone(),
    }
}

/// All nodes, then all edges, each group in snapshot order
pub fn transform_to_cytoscape_elements(snapshot: &GraphSnapshot) -> Vec<RenderElement> {
    let mut elements = Vec::with_capacity(snapshot.nodes.len() + snapshot.edges.len());
    elements.extend(snapshot.nodes.iter().map(|n| RenderElement::Nodes(transform_node(n))));
    elements.extend(snapshot.edges.iter().map(|e| RenderElement::Edges(transform_edge(e))));
    elements
}

/// Everything the widget needs to draw a snapshot under an engine configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderExport {
    pub layout: LayoutProfile,
    pub card_margin: f64,
    pub elements: Vec<RenderElement>,
}

/// Styled elements filtered by the configured visibility, with the configured
/// layout profile and card margin
pub fn build_render_export(snapshot: &GraphSnapshot, config: &EngineConfig) -> RenderExport {
    let mut elements = transform_to_cytoscape_elements(snapshot);
    let visible = get_visible_element_ids(elements.as_slice(), &config.visibility);
    elements.retain(|element| match element {
        RenderElement::Nodes(node) => visible.node_ids.contains(&node.node.id),
        RenderElement::Edges(edge) => visible.edge_ids.contains(&edge.edge.id),
    });

    RenderExport {
        layout: LayoutProfile::for_mode(config.default_layout),
        card_margin: config.card_margin,
        elements,
    }
}

fn field(element: &impl Serialize, key: &str) -> Option<Value> {
    match serde_json::to_value(element) {
        Ok(Value::Object(mut map)) => map.remove(key),
        _ => None,
    }
}

impl RenderedElement for RenderNode {
    fn id(&self) -> &str {
        self.node.id.as_str()
    }

    fn data(&self, key: &str) -> Option<Value> {
        match key {
            "type" => Some(Value::from(self.node.node_type.as_str())),
            "name" => Some(Value::from(self.node.name.as_str())),
            _ => field(self, key),
        }
    }
}

impl RenderedElement for RenderEdge {
    fn id(&self) -> &str {
        self.edge.id.as_str()
    }

    fn data(&self, key: &str) -> Option<Value> {
        match key {
            "type" => Some(Value::from(self.edge.edge_type.as_str())),
            _ => field(self, key),
        }
    }
}

impl RenderedEdge for RenderEdge {
    fn source(&self) -> &str {
        self.edge.source.as_str()
    }

    fn target(&self) -> &str {
        self.edge.target.as_str()
    }
}

/// An element list can stand in for the live widget collections
impl RenderedGraph for [RenderElement] {
    type Node = RenderNode;
    type Edge = RenderEdge;

    fn nodes(&self) -> impl Iterator<Item = &RenderNode> {
        self.iter().filter_map(RenderElement::as_node)
    }

    fn edges(&self) -> impl Iterator<Item = &RenderEdge> {
        self.iter().filter_map(RenderElement::as_edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{BookId, EdgeType, NodeType};
    use serde_json::json;

    fn snapshot() -> GraphSnapshot {
        let dickens = GraphNode::new(NodeType::Author, 1, "Charles Dickens")
            .with_era("victorian")
            .with_books([BookId::new(10), BookId::new(11)]);
        let chapman = GraphNode::new(NodeType::Publisher, 2, "Chapman & Hall").with_tier("TIER_1");
        let riviere = GraphNode::new(NodeType::Binder, 3, "Riviere & Son");
        let mut bound = GraphEdge::new("e2", "author:1", "binder:3", EdgeType::Binder, 1);
        bound.evidence = Some("Full calf by Riviere".to_string());
        GraphSnapshot::new(
            vec![dickens, chapman, riviere],
            vec![
                GraphEdge::new("e1", "author:1", "publisher:2", EdgeType::Publisher, 4),
                bound,
            ],
        )
    }

    #[test]
    fn test_nodes_precede_edges_in_input_order() {
        let elements = transform_to_cytoscape_elements(&snapshot());
        let ids: Vec<&str> = elements.iter().map(RenderElement::id).collect();
        assert_eq!(ids, vec!["author:1", "publisher:2", "binder:3", "e1", "e2"]);
    }

    #[test]
    fn test_node_styling() {
        let snapshot = snapshot();
        let author = transform_node(&snapshot.nodes[0]);
        assert_eq!(author.shape, Shape::Ellipse);
        assert_eq!(author.color, visual::node_color(NodeType::Author, Some("victorian")));
        assert!(author.size > visual::BASE_NODE_SIZE);

        let binder = transform_node(&snapshot.nodes[2]);
        assert_eq!(binder.shape, Shape::Diamond);
        assert_eq!(binder.size, visual::BASE_NODE_SIZE);
        assert_eq!(binder.color, visual::node_color(NodeType::Binder, None));
    }

    #[test]
    fn test_edge_styling() {
        let snapshot = snapshot();
        let publisher = transform_edge(&snapshot.edges[0]);
        let binder = transform_edge(&snapshot.edges[1]);
        assert_eq!(publisher.line_style, LineStyle::Solid);
        assert_eq!(binder.line_style, LineStyle::Dashed);
        assert!(binder.opacity < publisher.opacity);
        assert!(publisher.width > binder.width);
    }

    #[test]
    fn test_serialized_shape_keeps_original_fields() {
        let elements = transform_to_cytoscape_elements(&snapshot());
        let value = serde_json::to_value(&elements).unwrap();

        let node = &value[0];
        assert_eq!(node["group"], "nodes");
        assert_eq!(node["data"]["id"], "author:1");
        assert_eq!(node["data"]["entity_id"], 1);
        assert_eq!(node["data"]["type"], "author");
        assert_eq!(node["data"]["book_ids"], json!([10, 11]));
        assert_eq!(node["data"]["shape"], "ellipse");
        assert!(node["data"]["color"].as_str().unwrap().starts_with('#'));

        let edge = &value[4];
        assert_eq!(edge["group"], "edges");
        assert_eq!(edge["data"]["evidence"], "Full calf by Riviere");
        assert_eq!(edge["data"]["line_style"], "dashed");
    }

    #[test]
    fn test_rendered_element_data() {
        let elements = transform_to_cytoscape_elements(&snapshot());
        let node = elements[0].as_node().unwrap();
        assert_eq!(node.data("type"), Some(json!("author")));
        assert_eq!(node.data("book_count"), Some(json!(2)));
        assert_eq!(node.data("missing"), None);

        let edge = elements[3].as_edge().unwrap();
        assert_eq!(RenderedEdge::source(edge), "author:1");
        assert_eq!(edge.data("strength"), Some(json!(4)));
    }

    #[test]
    fn test_render_export_follows_configuration() {
        let config = EngineConfig::from_toml_str(
            r#"
            card_margin = 12.0
            default_layout = "hierarchical"

            [visibility]
            show_binders = false
            "#,
        )
        .unwrap();

        let export = build_render_export(&snapshot(), &config);
        let ids: Vec<&str> = export.elements.iter().map(RenderElement::id).collect();
        assert_eq!(ids, vec!["author:1", "publisher:2", "e1"]);
        assert_eq!(export.layout, LayoutProfile::hierarchical());
        assert_eq!(export.card_margin, 12.0);

        let value = serde_json::to_value(&export).unwrap();
        assert_eq!(value["layout"]["name"], "dagre");
        assert_eq!(value["cardMargin"], 12.0);
    }

    #[test]
    fn test_default_export_keeps_every_element() {
        let export = build_render_export(&snapshot(), &EngineConfig::default());
        assert_eq!(export.elements.len(), 5);
        assert_eq!(export.layout, LayoutProfile::force());
    }
}
