use serde::{Deserialize, Serialize};

use crate::enums::category_type::CategoryType;

/// Node of the category tree. The backend names the child list either
/// `children` or `subcategories`; both deserialize into `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub category_type: CategoryType,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default, alias = "subcategories")]
    pub children: Vec<Category>,
}

impl Category {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes in this subtree, the node itself included.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(Category::subtree_size).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_alias() {
        let with_sub: Category = serde_json::from_str(
            r#"{"_id":"1","name":"Agriculture","type":"product",
                "subcategories":[{"_id":"2","name":"Semences","type":"product"}]}"#,
        )
        .unwrap();
        let with_children: Category = serde_json::from_str(
            r#"{"_id":"1","name":"Agriculture","type":"product",
                "children":[{"_id":"2","name":"Semences","type":"product"}]}"#,
        )
        .unwrap();
        assert_eq!(with_sub, with_children);
        assert_eq!(with_sub.subtree_size(), 2);
        assert!(with_sub.children[0].children.is_empty());
    }

    #[test]
    fn test_missing_or_unknown_type_keeps_tree() {
        let tree: Vec<Category> = serde_json::from_str(
            r#"[{"_id":"1","name":"Divers","children":[
                    {"_id":"2","name":"Location","type":"rental"},
                    {"_id":"3","name":"Réparation","type":"service"}]}]"#,
        )
        .unwrap();
        assert_eq!(tree[0].category_type, CategoryType::Unknown);
        assert_eq!(tree[0].children[0].category_type, CategoryType::Unknown);
        assert_eq!(tree[0].children[1].category_type, CategoryType::Service);
        assert_eq!(tree[0].subtree_size(), 3);
    }
}
