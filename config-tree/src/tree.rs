use std::collections::BTreeMap;

/// One element of a parsed configuration document.
///
/// Text is stored as read; the accessors return it trimmed and treat
/// whitespace-only text as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNode {
    /// Element tag name.
    pub tag: String,
    /// Attributes keyed by name.
    pub attributes: BTreeMap<String, String>,
    /// Child elements in document order.
    pub children: Vec<ConfigNode>,
    /// Text content, if any.
    pub text: Option<String>,
}

impl ConfigNode {
    /// Create an element with no attributes, children, or text.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Trimmed, non-empty text of this element.
    pub fn text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Attribute value by name.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// The `name` attribute, which keys list entries in device exports.
    pub fn name(&self) -> Option<&str> {
        self.attr("name")
    }

    /// First direct child with the provided tag.
    pub fn child(&self, tag: &str) -> Option<&ConfigNode> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// All direct children with the provided tag.
    pub fn children_named(&self, tag: &str) -> Vec<&ConfigNode> {
        self.children
            .iter()
            .filter(|child| child.tag == tag)
            .collect()
    }

    /// Follow a path of direct children.
    pub fn child_at(&self, path: &[&str]) -> Option<&ConfigNode> {
        path.iter()
            .try_fold(self, |current, segment| current.child(segment))
    }

    /// Text at the end of a path of direct children.
    pub fn text_at(&self, path: &[&str]) -> Option<&str> {
        self.child_at(path)?.text()
    }

    /// Every element reached by a path of direct children, fanning out over
    /// repeated tags.
    pub fn children_at(&self, path: &[&str]) -> Vec<&ConfigNode> {
        let mut found = Vec::new();
        collect_path(self, path, &mut found);
        found
    }

    /// Every element below this one, in document (pre-)order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// First match of `path` anywhere below this element.
    ///
    /// The first segment may match at any depth; the remaining segments must
    /// follow as direct children, so `["ip", "entry"]` finds an `entry`
    /// directly inside some descendant `ip`.
    pub fn find(&self, path: &[&str]) -> Option<&ConfigNode> {
        self.find_all(path).into_iter().next()
    }

    /// All matches of `path` anywhere below this element, in document order.
    pub fn find_all(&self, path: &[&str]) -> Vec<&ConfigNode> {
        let Some((first, rest)) = path.split_first() else {
            return Vec::new();
        };

        let mut found = Vec::new();
        for anchor in self.descendants().filter(|node| node.tag == *first) {
            collect_path(anchor, rest, &mut found);
        }
        found
    }

    /// Text of the first match of `path` anywhere below this element.
    ///
    /// Only the first structural match is considered; a matching element
    /// without text yields `None` even if a later one has text.
    pub fn find_text(&self, path: &[&str]) -> Option<&str> {
        self.find(path)?.text()
    }
}

fn collect_path<'a>(node: &'a ConfigNode, rest: &[&str], found: &mut Vec<&'a ConfigNode>) {
    let Some((segment, tail)) = rest.split_first() else {
        found.push(node);
        return;
    };
    for child in node.children.iter().filter(|child| child.tag == *segment) {
        collect_path(child, tail, found);
    }
}

/// Pre-order iterator returned by [`ConfigNode::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a ConfigNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a ConfigNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
