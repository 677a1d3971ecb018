//! Pure operations on the category tree: type filter, search, flattening.

use contracts::domain::a003_category::aggregate::Category;
use contracts::enums::category_type::CategoryType;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    All,
    Product,
    Service,
}

impl ViewMode {
    pub fn all() -> [ViewMode; 3] {
        [ViewMode::All, ViewMode::Product, ViewMode::Service]
    }

    pub fn code(&self) -> &'static str {
        match self {
            ViewMode::All => "all",
            ViewMode::Product => "product",
            ViewMode::Service => "service",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::All => "Toutes",
            ViewMode::Product => "Produits",
            ViewMode::Service => "Services",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "product" => ViewMode::Product,
            "service" => ViewMode::Service,
            _ => ViewMode::All,
        }
    }

    pub fn matches(&self, category_type: CategoryType) -> bool {
        match self {
            ViewMode::All => true,
            ViewMode::Product => category_type == CategoryType::Product,
            ViewMode::Service => category_type == CategoryType::Service,
        }
    }
}

/// Generic recursive prune: a node survives if it matches itself or keeps at least
/// one surviving descendant. Survivors replace the children list.
fn prune<F>(nodes: &[Category], keep: &F) -> Vec<Category>
where
    F: Fn(&Category) -> bool,
{
    nodes
        .iter()
        .filter_map(|node| {
            let children = prune(&node.children, keep);
            if keep(node) || !children.is_empty() {
                Some(Category {
                    children,
                    ..node.clone()
                })
            } else {
                None
            }
        })
        .collect()
}

pub fn filter_by_view_mode(nodes: &[Category], mode: ViewMode) -> Vec<Category> {
    if mode == ViewMode::All {
        return nodes.to_vec();
    }
    prune(nodes, &|c: &Category| mode.matches(c.category_type))
}

/// Keep nodes whose name contains `query` (case-insensitive) and their ancestors.
pub fn filter_by_query(nodes: &[Category], query: &str) -> Vec<Category> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return nodes.to_vec();
    }
    prune(nodes, &|c: &Category| c.name.to_lowercase().contains(&query))
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    pub depth: usize,
    pub id: String,
    pub name: String,
    pub category_type: CategoryType,
    pub thumb: Option<String>,
    pub has_children: bool,
    /// Nodes below this one, itself excluded
    pub descendants: usize,
}

/// Depth-first display rows; children appear only under expanded nodes.
pub fn flatten_rows(nodes: &[Category], expanded: &HashSet<String>) -> Vec<TreeRow> {
    fn walk(nodes: &[Category], depth: usize, expanded: &HashSet<String>, out: &mut Vec<TreeRow>) {
        for node in nodes {
            out.push(TreeRow {
                depth,
                id: node.id.clone(),
                name: node.name.clone(),
                category_type: node.category_type,
                thumb: node.thumb.clone(),
                has_children: node.has_children(),
                descendants: node.subtree_size() - 1,
            });
            if expanded.contains(&node.id) {
                walk(&node.children, depth + 1, expanded, out);
            }
        }
    }

    let mut out = Vec::new();
    walk(nodes, 0, expanded, &mut out);
    out
}

/// Ids of every node with children; expanding them all reveals each survivor of a filter.
pub fn parent_ids(nodes: &[Category]) -> HashSet<String> {
    let mut ids = HashSet::new();
    let mut stack: Vec<&Category> = nodes.iter().collect();
    while let Some(node) = stack.pop() {
        if node.has_children() {
            ids.insert(node.id.clone());
            stack.extend(node.children.iter());
        }
    }
    ids
}

/// Expanded nodes of the tree. The admin's own choice is kept apart from the set
/// a filter reveals, so clearing the filter or reloading restores it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeExpansion {
    manual: HashSet<String>,
    /// `Some` while a filter is active
    filtered: Option<HashSet<String>>,
}

impl TreeExpansion {
    /// Start (or refresh) a filter with the nodes it reveals; `None` ends it.
    pub fn set_filter(&mut self, revealed: Option<HashSet<String>>) {
        self.filtered = revealed;
    }

    pub fn active(&self) -> &HashSet<String> {
        self.filtered.as_ref().unwrap_or(&self.manual)
    }

    fn active_mut(&mut self) -> &mut HashSet<String> {
        self.filtered.as_mut().unwrap_or(&mut self.manual)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.active().contains(id)
    }

    pub fn toggle(&mut self, id: &str) {
        let set = self.active_mut();
        if !set.remove(id) {
            set.insert(id.to_string());
        }
    }

    pub fn expand_all(&mut self, ids: HashSet<String>) {
        *self.active_mut() = ids;
    }

    pub fn collapse_all(&mut self) {
        self.active_mut().clear();
    }
}

pub fn count_nodes(nodes: &[Category]) -> usize {
    nodes.iter().map(Category::subtree_size).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<Category> {
        serde_json::from_value(serde_json::json!([
            {"_id": "agri", "name": "Agriculture", "type": "product", "subcategories": [
                {"_id": "seeds", "name": "Semences", "type": "product"},
                {"_id": "repair", "name": "Réparation matériel", "type": "service"},
                {"_id": "tools", "name": "Outillage", "type": "product", "children": [
                    {"_id": "hand", "name": "Outils manuels", "type": "product"}
                ]}
            ]},
            {"_id": "transport", "name": "Transport", "type": "service"},
            {"_id": "food", "name": "Alimentation", "type": "product"}
        ]))
        .unwrap()
    }

    fn ids(rows: &[TreeRow]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_service_leaf_keeps_product_parent() {
        let filtered = filter_by_view_mode(&tree(), ViewMode::Service);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "agri");
        assert_eq!(filtered[0].children.len(), 1);
        assert_eq!(filtered[0].children[0].id, "repair");
        assert_eq!(filtered[1].id, "transport");
    }

    #[test]
    fn test_product_mode_prunes_service_nodes() {
        let filtered = filter_by_view_mode(&tree(), ViewMode::Product);
        assert_eq!(count_nodes(&filtered), 5);
        let rows = flatten_rows(&filtered, &parent_ids(&filtered));
        assert_eq!(ids(&rows), vec!["agri", "seeds", "tools", "hand", "food"]);
    }

    #[test]
    fn test_manual_expansion_survives_filter_and_reload() {
        let mut expansion = TreeExpansion::default();
        expansion.toggle("agri");
        expansion.toggle("tools");

        let filtered = filter_by_view_mode(&tree(), ViewMode::Service);
        expansion.set_filter(Some(parent_ids(&filtered)));
        assert_eq!(ids(&flatten_rows(&filtered, expansion.active())), vec!["agri", "repair", "transport"]);
        expansion.toggle("agri");
        assert!(!expansion.is_expanded("agri"));

        // Filter cleared, then the list reloads with no filter: manual choice is back.
        expansion.set_filter(None);
        expansion.set_filter(None);
        let rows = flatten_rows(&tree(), expansion.active());
        assert_eq!(ids(&rows), vec!["agri", "seeds", "repair", "tools", "hand", "transport", "food"]);
    }

    #[test]
    fn test_expand_and_collapse_all_target_active_set() {
        let mut expansion = TreeExpansion::default();
        expansion.toggle("agri");
        expansion.set_filter(Some(HashSet::new()));
        expansion.expand_all(parent_ids(&tree()));
        assert!(expansion.is_expanded("tools"));
        expansion.collapse_all();
        assert!(expansion.active().is_empty());
        expansion.set_filter(None);
        assert!(expansion.is_expanded("agri"));
        assert!(!expansion.is_expanded("tools"));
    }

    #[test]
    fn test_all_mode_is_identity() {
        assert_eq!(filter_by_view_mode(&tree(), ViewMode::All), tree());
        assert_eq!(count_nodes(&tree()), 7);
    }

    #[test]
    fn test_flatten_honours_expanded_set() {
        let collapsed = flatten_rows(&tree(), &HashSet::new());
        assert_eq!(ids(&collapsed), vec!["agri", "transport", "food"]);
        assert_eq!(collapsed[0].descendants, 4);

        let expanded: HashSet<String> = ["agri".to_string()].into();
        let rows = flatten_rows(&tree(), &expanded);
        assert_eq!(ids(&rows), vec!["agri", "seeds", "repair", "tools", "transport", "food"]);
        assert_eq!(rows[3].depth, 1);
        assert!(rows[3].has_children);
    }

    #[test]
    fn test_query_keeps_ancestors() {
        let filtered = filter_by_query(&tree(), "manuels");
        let rows = flatten_rows(&filtered, &parent_ids(&filtered));
        assert_eq!(ids(&rows), vec!["agri", "tools", "hand"]);
        assert_eq!(rows[2].depth, 2);
        assert_eq!(filter_by_query(&tree(), "  "), tree());
    }

    #[test]
    fn test_view_mode_codes() {
        for mode in ViewMode::all() {
            assert_eq!(ViewMode::from_code(mode.code()), mode);
        }
        assert_eq!(ViewMode::from_code("bogus"), ViewMode::All);
    }
}
