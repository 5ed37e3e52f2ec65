//! Schema-aware navigation over a [`ClinicalTree`].
//!
//! A [`Navigator`] is a cheap copyable handle to at most one element.
//! Every operation is total: querying a tag, template or attribute that
//! is not there answers "no value", and a navigator over *no* element at
//! all is a first-class value that keeps answering "no value" down the
//! chain. Callers routinely write
//! `nav.child_by_tag("addr").child_by_tag("city").value()` against
//! documents where half the path is missing; none of those calls may
//! fault.

use crate::null_flavor::NullFlavor;
use crate::tree::{ClinicalTree, NodeId};

/// Handle to at most one element of a [`ClinicalTree`].
#[derive(Clone, Copy)]
pub struct Navigator<'a> {
    tree: &'a ClinicalTree,
    node: Option<NodeId>,
}

impl<'a> Navigator<'a> {
    pub(crate) fn new(tree: &'a ClinicalTree, node: Option<NodeId>) -> Self {
        Self { tree, node }
    }

    /// Whether this navigator points at an element.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.node.is_some()
    }

    /// Tag name of the element, or `None` for an absent navigator.
    #[must_use]
    pub fn tag_name(&self) -> Option<&'a str> {
        self.node.map(|id| self.tree.node(id).tag.as_str())
    }

    /// First direct child element with the given tag name.
    ///
    /// Absence is a normal result: a missing child, or an absent
    /// receiver, yields an absent navigator.
    ///
    /// # Examples
    /// ```
    /// use ccdex_core::ClinicalTree;
    ///
    /// let tree = ClinicalTree::parse("<addr><city>Gainesville</city></addr>").unwrap();
    /// let addr = tree.root();
    ///
    /// assert_eq!(addr.child_by_tag("city").value().as_deref(), Some("Gainesville"));
    /// assert!(addr.child_by_tag("state").value().is_none());
    /// // chaining through an absent node is fine
    /// assert!(addr.child_by_tag("state").child_by_tag("code").value().is_none());
    /// ```
    #[must_use]
    pub fn child_by_tag(&self, name: &str) -> Navigator<'a> {
        let found = self.node.and_then(|id| {
            self.tree
                .node(id)
                .children
                .iter()
                .copied()
                .find(|child| self.tree.node(*child).tag == name)
        });
        Navigator::new(self.tree, found)
    }

    /// All descendant elements with the given tag name, in document order.
    ///
    /// Returns an empty set (never "no set") when nothing matches.
    #[must_use]
    pub fn descendants_by_tag(&self, name: &str) -> NodeSet<'a> {
        let mut items = Vec::new();
        if let Some(id) = self.node {
            collect_descendants(self.tree, id, name, &mut items);
        }
        NodeSet::new(self.tree, items)
    }

    /// Trimmed text content of the element.
    ///
    /// `None` for an absent navigator and for elements whose text is
    /// empty or all whitespace - downstream output treats the two the
    /// same, so they are collapsed here.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        let id = self.node?;
        let text = self.tree.node(id).text.as_deref()?.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// Attribute value by name, absent-safe.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        let id = self.node?;
        self.tree.node(id).attributes.get(name).map(String::as_str)
    }

    /// Elements within this subtree declaring the given template OID.
    ///
    /// Served from the index built at tree construction, then filtered
    /// to this navigator's subtree by walking parent links - probing a
    /// handful of candidate OIDs never re-scans the document.
    ///
    /// # Examples
    /// ```
    /// use ccdex_core::ClinicalTree;
    ///
    /// let xml = r#"<doc>
    ///   <section><templateId root="2.16.840.1.113883.10.20.22.2.5"/></section>
    /// </doc>"#;
    /// let tree = ClinicalTree::parse(xml).unwrap();
    ///
    /// assert!(!tree.root().find_by_template("2.16.840.1.113883.10.20.22.2.5").is_empty());
    /// assert!(tree.root().find_by_template("1.2.3").is_empty());
    /// ```
    #[must_use]
    pub fn find_by_template(&self, oid: &str) -> NodeSet<'a> {
        let items = match self.node {
            Some(scope) => self
                .tree
                .templates(oid)
                .iter()
                .copied()
                .filter(|id| self.contains(scope, *id))
                .collect(),
            None => Vec::new(),
        };
        NodeSet::new(self.tree, items)
    }

    /// Resolve the element's `nullFlavor` attribute, if declared.
    #[must_use]
    pub fn null_flavor(&self) -> Option<NullFlavor> {
        self.attr("nullFlavor").map(NullFlavor::from_symbol)
    }

    /// Parent element; absent for the document root.
    #[must_use]
    pub fn parent(&self) -> Navigator<'a> {
        let parent = self.node.and_then(|id| self.tree.node(id).parent);
        Navigator::new(self.tree, parent)
    }

    /// Whether `id` is `scope` itself or one of its descendants.
    fn contains(&self, scope: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == scope {
                return true;
            }
            current = self.tree.node(node).parent;
        }
        false
    }
}

impl std::fmt::Debug for Navigator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.tag_name() {
            Some(tag) => write!(f, "Navigator(<{tag}>)"),
            None => write!(f, "Navigator(absent)"),
        }
    }
}

/// Ordered collection of present navigators.
///
/// Produced by [`Navigator::descendants_by_tag`] and
/// [`Navigator::find_by_template`]. Iteration is the Rust rendering of
/// the `each`-style traversal consumers expect:
///
/// ```
/// use ccdex_core::ClinicalTree;
///
/// let tree = ClinicalTree::parse("<list><item>a</item><item>b</item></list>").unwrap();
/// let values: Vec<_> = tree
///     .root()
///     .descendants_by_tag("item")
///     .iter()
///     .filter_map(|item| item.value())
///     .collect();
/// assert_eq!(values, ["a", "b"]);
/// ```
pub struct NodeSet<'a> {
    tree: &'a ClinicalTree,
    items: Vec<Navigator<'a>>,
}

impl<'a> NodeSet<'a> {
    fn new(tree: &'a ClinicalTree, ids: Vec<NodeId>) -> Self {
        let items = ids
            .into_iter()
            .map(|id| Navigator::new(tree, Some(id)))
            .collect();
        Self { tree, items }
    }

    /// Whether the set matched nothing.
    ///
    /// Paired with [`Navigator::find_by_template`], this is the
    /// type-detection primitive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// First element, or the absent navigator when the set is empty.
    #[must_use]
    pub fn first(&self) -> Navigator<'a> {
        self.get(0)
    }

    /// Element at `index`, or the absent navigator when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Navigator<'a> {
        self.items
            .get(index)
            .copied()
            .unwrap_or_else(|| Navigator::new(self.tree, None))
    }

    /// Iterate the matched elements in document order.
    pub fn iter(&self) -> impl Iterator<Item = Navigator<'a>> + '_ {
        self.items.iter().copied()
    }
}

impl<'a> IntoIterator for NodeSet<'a> {
    type Item = Navigator<'a>;
    type IntoIter = std::vec::IntoIter<Navigator<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b NodeSet<'a> {
    type Item = Navigator<'a>;
    type IntoIter = std::vec::IntoIter<Navigator<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.clone().into_iter()
    }
}

/// Pre-order walk below `id` collecting elements with a matching tag.
fn collect_descendants(tree: &ClinicalTree, id: NodeId, name: &str, out: &mut Vec<NodeId>) {
    for child in &tree.node(id).children {
        if tree.node(*child).tag == name {
            out.push(*child);
        }
        collect_descendants(tree, *child, name, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ClinicalTree;
    use pretty_assertions::assert_eq;

    fn sample() -> ClinicalTree {
        let xml = r#"<ClinicalDocument>
            <templateId root="2.16.840.1.113883.10.20.22.1.1"/>
            <recordTarget>
                <patientRole>
                    <addr use="HP">
                        <streetAddressLine>1 Main St</streetAddressLine>
                        <streetAddressLine>Apt 2</streetAddressLine>
                        <city>  Portland  </city>
                        <state/>
                    </addr>
                </patientRole>
            </recordTarget>
            <component>
                <section>
                    <templateId root="2.16.840.1.113883.10.20.22.2.5"/>
                    <entry><code nullFlavor="UNK"/></entry>
                    <entry><code nullFlavor="XX-LOCAL"/></entry>
                </section>
            </component>
        </ClinicalDocument>"#;
        ClinicalTree::parse(xml).expect("valid fixture")
    }

    #[test]
    fn test_child_by_tag_first_match() {
        let tree = ClinicalTree::parse("<r><a>1</a><a>2</a></r>").expect("valid");
        assert_eq!(tree.root().child_by_tag("a").value().as_deref(), Some("1"));
    }

    #[test]
    fn test_child_by_tag_direct_children_only() {
        let tree = sample();
        // city is a descendant, not a direct child of the root
        assert!(!tree.root().child_by_tag("city").is_present());
    }

    #[test]
    fn test_chained_absence_never_faults() {
        let tree = sample();
        let absent = tree
            .root()
            .child_by_tag("nope")
            .child_by_tag("deeper")
            .child_by_tag("deepest");
        assert!(!absent.is_present());
        assert_eq!(absent.value(), None);
        assert_eq!(absent.attr("value"), None);
        assert!(absent.descendants_by_tag("anything").is_empty());
        assert!(absent.find_by_template("1.2.3").is_empty());
        assert!(!absent.parent().is_present());
    }

    #[test]
    fn test_value_trims_text() {
        let tree = sample();
        let city = tree
            .root()
            .child_by_tag("recordTarget")
            .child_by_tag("patientRole")
            .child_by_tag("addr")
            .child_by_tag("city");
        assert_eq!(city.value().as_deref(), Some("Portland"));
    }

    #[test]
    fn test_value_empty_element_is_absent() {
        let tree = sample();
        let state = tree
            .root()
            .child_by_tag("recordTarget")
            .child_by_tag("patientRole")
            .child_by_tag("addr")
            .child_by_tag("state");
        assert!(state.is_present());
        assert_eq!(state.value(), None);
    }

    #[test]
    fn test_descendants_by_tag_document_order() {
        let tree = sample();
        let streets: Vec<_> = tree
            .root()
            .descendants_by_tag("streetAddressLine")
            .iter()
            .filter_map(|e| e.value())
            .collect();
        assert_eq!(streets, ["1 Main St", "Apt 2"]);
    }

    #[test]
    fn test_descendants_by_tag_empty_not_absent() {
        let tree = sample();
        let set = tree.root().descendants_by_tag("medication");
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.first().is_present());
    }

    #[test]
    fn test_find_by_template_scoped_to_subtree() {
        let tree = sample();
        let section_oid = "2.16.840.1.113883.10.20.22.2.5";

        assert_eq!(tree.root().find_by_template(section_oid).len(), 1);
        // the recordTarget subtree declares no section template
        let record_target = tree.root().child_by_tag("recordTarget");
        assert!(record_target.find_by_template(section_oid).is_empty());
    }

    #[test]
    fn test_find_by_template_self_match() {
        let tree = sample();
        let section = tree
            .root()
            .find_by_template("2.16.840.1.113883.10.20.22.2.5")
            .first();
        // an element declaring the template finds itself
        assert_eq!(
            section
                .find_by_template("2.16.840.1.113883.10.20.22.2.5")
                .len(),
            1
        );
    }

    #[test]
    fn test_attr_lookup() {
        let tree = sample();
        let addr = tree
            .root()
            .child_by_tag("recordTarget")
            .child_by_tag("patientRole")
            .child_by_tag("addr");
        assert_eq!(addr.attr("use"), Some("HP"));
        assert_eq!(addr.attr("missing"), None);
    }

    #[test]
    fn test_null_flavor_resolution() {
        let tree = sample();
        let codes: Vec<_> = tree
            .root()
            .descendants_by_tag("code")
            .iter()
            .filter_map(|c| c.null_flavor())
            .collect();
        assert_eq!(
            codes,
            [
                NullFlavor::Unknown,
                NullFlavor::Unrecognized("XX-LOCAL".to_string())
            ]
        );
    }

    #[test]
    fn test_node_set_get_out_of_range() {
        let tree = sample();
        let entries = tree.root().descendants_by_tag("entry");
        assert_eq!(entries.len(), 2);
        assert!(entries.get(1).is_present());
        assert!(!entries.get(2).is_present());
    }

    #[test]
    fn test_parent_walk() {
        let tree = sample();
        let city = tree.root().descendants_by_tag("city").first();
        assert_eq!(city.parent().tag_name(), Some("addr"));
        assert_eq!(city.parent().parent().tag_name(), Some("patientRole"));
    }
}
