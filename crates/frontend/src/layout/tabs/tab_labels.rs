//! Tab titles, keyed by tab key.

/// Every tab key the registry knows.
pub const TAB_KEYS: &[&str] = &[
    "users_clients",
    "users_professionals",
    "users_resellers",
    "auctions",
    "tenders",
    "direct_sales",
    "categories",
    "ads",
    "terms",
    "roles",
];

/// Readable title for a tab key. Fallback: the key itself.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        "users_clients" => "Clients",
        "users_professionals" => "Professionnels",
        "users_resellers" => "Revendeurs",
        "auctions" => "Enchères",
        "tenders" => "Appels d'offres",
        "direct_sales" => "Ventes directes",
        "categories" => "Catégories",
        "ads" => "Publicités",
        "terms" => "Conditions générales",
        "roles" => "Rôles",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keys_labelled() {
        for key in TAB_KEYS {
            assert_ne!(tab_label_for_key(key), *key);
        }
        assert_eq!(tab_label_for_key("unknown"), "unknown");
    }
}
