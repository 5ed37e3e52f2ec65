//! Owned element tree for parsed clinical documents.
//!
//! The tree is built once from a `roxmltree` parse and owns its data
//! independently of the source buffer, so it can be kept around and
//! shared by any number of concurrent readers. Template identifiers are
//! indexed at construction: document type detection probes several
//! candidate OIDs per document and must not re-scan the tree for each.

use std::collections::HashMap;

use crate::error::Result;
use crate::navigator::Navigator;

/// Index of an element within a [`ClinicalTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// One XML element: tag name, attributes, text and ordered children.
#[derive(Debug)]
pub(crate) struct ElementData {
    /// Tag name with any namespace prefix stripped.
    pub(crate) tag: String,

    /// Attribute map. Lookup is by local name; order is irrelevant.
    pub(crate) attributes: HashMap<String, String>,

    /// Raw text content (first text child), untrimmed.
    pub(crate) text: Option<String>,

    /// Element children in document order.
    pub(crate) children: Vec<NodeId>,

    /// Non-owning link to the parent element.
    pub(crate) parent: Option<NodeId>,
}

/// Immutable tree over one parsed clinical document.
pub struct ClinicalTree {
    nodes: Vec<ElementData>,
    root: NodeId,
    template_index: HashMap<String, Vec<NodeId>>,
}

impl ClinicalTree {
    /// Parse an XML document into an owned tree.
    ///
    /// This is the only fallible operation in the core: malformed XML
    /// fails fast here, before any navigator exists.
    ///
    /// # Examples
    /// ```
    /// use ccdex_core::ClinicalTree;
    ///
    /// let tree = ClinicalTree::parse("<ClinicalDocument/>").unwrap();
    /// assert_eq!(tree.root().tag_name(), Some("ClinicalDocument"));
    ///
    /// assert!(ClinicalTree::parse("<unclosed").is_err());
    /// ```
    pub fn parse(xml: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml)?;
        Ok(Self::from_document(&doc))
    }

    /// Copy a `roxmltree` document into the arena and index templates.
    fn from_document(doc: &roxmltree::Document<'_>) -> Self {
        let mut nodes = Vec::new();
        let root = copy_element(doc.root_element(), None, &mut nodes);

        let mut template_index: HashMap<String, Vec<NodeId>> = HashMap::new();
        // Arena order is pre-order, so each OID's declaring elements come
        // out in document order.
        for node in &nodes {
            if node.tag != "templateId" {
                continue;
            }
            let Some(oid) = node.attributes.get("root") else {
                continue;
            };
            if let Some(parent) = node.parent {
                template_index.entry(oid.clone()).or_default().push(parent);
            }
        }

        ClinicalTree {
            nodes,
            root,
            template_index,
        }
    }

    /// Navigator over the document element.
    #[must_use]
    pub fn root(&self) -> Navigator<'_> {
        Navigator::new(self, Some(self.root))
    }

    /// Elements declaring the given template OID, in document order.
    pub(crate) fn templates(&self, oid: &str) -> &[NodeId] {
        self.template_index
            .get(oid)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub(crate) fn node(&self, id: NodeId) -> &ElementData {
        &self.nodes[id.0]
    }
}

impl std::fmt::Debug for ClinicalTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClinicalTree")
            .field("root", &self.nodes[self.root.0].tag)
            .field("elements", &self.nodes.len())
            .finish()
    }
}

/// Recursively copy an element and its element children into the arena.
fn copy_element(
    node: roxmltree::Node<'_, '_>,
    parent: Option<NodeId>,
    nodes: &mut Vec<ElementData>,
) -> NodeId {
    let id = NodeId(nodes.len());
    nodes.push(ElementData {
        // Strip the namespace prefix: vendors disagree on prefixes but
        // not on local names.
        tag: node.tag_name().name().to_string(),
        attributes: node
            .attributes()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect(),
        text: node.text().map(str::to_string),
        children: Vec::new(),
        parent,
    });

    let mut children = Vec::new();
    for child in node.children().filter(roxmltree::Node::is_element) {
        children.push(copy_element(child, Some(id), nodes));
    }
    nodes[id.0].children = children;

    id
}
