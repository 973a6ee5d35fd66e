use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::dom::Dom;
use crate::error::UiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct Node {
    tag: String,
    parent: Option<usize>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
}

/// Element description handed to [`FakeDom::append`].
#[derive(Debug, Default)]
pub struct El {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
}

impl El {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }
}

/// In-memory element tree. Nodes are kept in creation order, which stands in
/// for document order. Selectors: `#id`, `.class`, or a bare tag name; any
/// other form is rejected like an invalid `querySelector` argument.
#[derive(Debug, Clone)]
pub struct FakeDom {
    nodes: Rc<RefCell<Vec<Node>>>,
}

impl Default for FakeDom {
    fn default() -> Self {
        let html = Node {
            tag: "html".into(),
            ..Node::default()
        };
        Self {
            nodes: Rc::new(RefCell::new(vec![html])),
        }
    }
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(&self) -> NodeId {
        NodeId(0)
    }

    pub fn append(&self, parent: NodeId, el: El) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node {
            tag: el.tag,
            parent: Some(parent.0),
            classes: el.classes,
            attributes: el.attributes,
            text: String::new(),
        });
        NodeId(nodes.len() - 1)
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.nodes.borrow()[node.0].classes.clone()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes.borrow()[node.0]
            .classes
            .iter()
            .any(|c| c == class)
    }

    pub fn text(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].text.clone()
    }

    fn check(selector: &str) -> Result<(), UiError> {
        let name = selector
            .strip_prefix('#')
            .or_else(|| selector.strip_prefix('.'))
            .unwrap_or(selector);
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(())
        } else {
            Err(UiError::Dom(format!("SyntaxError: '{}' is not a valid selector", selector)))
        }
    }

    fn matches(node: &Node, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            node.attributes.get("id").map(String::as_str) == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            node.classes.iter().any(|c| c == class)
        } else {
            node.tag == selector
        }
    }

    fn is_descendant(nodes: &[Node], mut index: usize, ancestor: usize) -> bool {
        while let Some(parent) = nodes[index].parent {
            if parent == ancestor {
                return true;
            }
            index = parent;
        }
        false
    }
}

impl Dom for FakeDom {
    type Element = NodeId;

    fn root(&self) -> Option<NodeId> {
        Some(self.html())
    }

    fn by_id(&self, id: &str) -> Option<NodeId> {
        self.select(&format!("#{}", id)).ok().flatten()
    }

    fn select(&self, selector: &str) -> Result<Option<NodeId>, UiError> {
        Ok(self.select_all(selector)?.into_iter().next())
    }

    fn select_all(&self, selector: &str) -> Result<Vec<NodeId>, UiError> {
        Self::check(selector)?;
        let nodes = self.nodes.borrow();
        Ok(nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| Self::matches(node, selector))
            .map(|(index, _)| NodeId(index))
            .collect())
    }

    fn select_within(&self, scope: &NodeId, selector: &str) -> Result<Option<NodeId>, UiError> {
        Self::check(selector)?;
        let nodes = self.nodes.borrow();
        Ok(nodes
            .iter()
            .enumerate()
            .find(|(index, node)| {
                Self::matches(node, selector) && Self::is_descendant(&nodes, *index, scope.0)
            })
            .map(|(index, _)| NodeId(index)))
    }

    fn closest(&self, element: &NodeId, selector: &str) -> Result<Option<NodeId>, UiError> {
        Self::check(selector)?;
        let nodes = self.nodes.borrow();
        let mut current = Some(element.0);
        while let Some(index) = current {
            if Self::matches(&nodes[index], selector) {
                return Ok(Some(NodeId(index)));
            }
            current = nodes[index].parent;
        }
        Ok(None)
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[element.0].attributes.get(name).cloned()
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) -> Result<(), UiError> {
        self.nodes.borrow_mut()[element.0]
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn add_class(&self, element: &NodeId, class: &str) -> Result<(), UiError> {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[element.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&self, element: &NodeId, class: &str) -> Result<(), UiError> {
        self.nodes.borrow_mut()[element.0]
            .classes
            .retain(|c| c != class);
        Ok(())
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        self.nodes.borrow_mut()[element.0].text = text.to_string();
    }

    fn set_image_source(&self, element: &NodeId, src: &str) -> Result<(), UiError> {
        self.set_attribute(element, "src", src)
    }
}
