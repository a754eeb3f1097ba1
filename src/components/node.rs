//! Node records of the social circles graph

use crate::value_objects::{BookId, NodeId, NodeType};
use serde::{Deserialize, Serialize};

/// An author, publisher or binder as delivered in a graph snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Snapshot-unique id, `"<type>:<entity_id>"`
    pub id: NodeId,
    /// Id of the underlying author/publisher/binder record
    pub entity_id: u64,
    /// Display name
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_year: Option<i32>,
    /// Literary era, authors only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub era: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i32>,
    /// Collecting tier, publishers and binders only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(default)]
    pub book_count: u32,
    #[serde(default)]
    pub book_ids: Vec<BookId>,
}

impl GraphNode {
    /// Create a node with no optional attributes and no books
    pub fn new(node_type: NodeType, entity_id: u64, name: impl Into<String>) -> Self {
        Self {
            id: NodeId::for_entity(node_type, entity_id),
            entity_id,
            name: name.into(),
            node_type,
            birth_year: None,
            death_year: None,
            era: None,
            founded_year: None,
            tier: None,
            book_count: 0,
            book_ids: Vec::new(),
        }
    }

    /// The attribute that selects the node colour: era for authors, tier otherwise
    pub fn style_key(&self) -> Option<&str> {
        match self.node_type {
            NodeType::Author => self.era.as_deref(),
            NodeType::Publisher | NodeType::Binder => self.tier.as_deref(),
        }
    }

    pub fn with_era(mut self, era: impl Into<String>) -> Self {
        self.era = Some(era.into());
        self
    }

    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = Some(tier.into());
        self
    }

    /// Attach books; `book_count` follows the list length
    pub fn with_books(mut self, book_ids: impl IntoIterator<Item = BookId>) -> Self {
        self.book_ids = book_ids.into_iter().collect();
        self.book_count = self.book_ids.len() as u32;
        self
    }
}
