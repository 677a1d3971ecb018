//! French UI strings for enums and flags

use contracts::system::users::UserFlag;

/// Badge text for a flag value, e.g. `Vérifié` / `Non vérifié`.
///
/// The wording matches the boolean search keywords of the list filter.
pub fn flag_badge(flag: UserFlag, value: bool) -> &'static str {
    match (flag, value) {
        (UserFlag::Active, true) => "Actif",
        (UserFlag::Active, false) => "Inactif",
        (UserFlag::Banned, true) => "Banni",
        (UserFlag::Banned, false) => "Non banni",
        (UserFlag::Verified, true) => "Vérifié",
        (UserFlag::Verified, false) => "Non vérifié",
        (UserFlag::Certified, true) => "Certifié",
        (UserFlag::Certified, false) => "Non certifié",
        (UserFlag::Recommended, true) => "Recommandé",
        (UserFlag::Recommended, false) => "Non recommandé",
    }
}

/// Button text that flips the flag from its `current` value.
pub fn flag_action_label(flag: UserFlag, current: bool) -> &'static str {
    match (flag, current) {
        (UserFlag::Active, false) => "Activer",
        (UserFlag::Active, true) => "Désactiver",
        (UserFlag::Banned, false) => "Bannir",
        (UserFlag::Banned, true) => "Débannir",
        (UserFlag::Verified, false) => "Vérifier",
        (UserFlag::Verified, true) => "Annuler la vérification",
        (UserFlag::Certified, false) => "Certifier",
        (UserFlag::Certified, true) => "Retirer la certification",
        (UserFlag::Recommended, false) => "Recommander",
        (UserFlag::Recommended, true) => "Ne plus recommander",
    }
}

/// Toast shown after a successful toggle; `new_value` is the value just written.
pub fn flag_success_message(flag: UserFlag, new_value: bool) -> String {
    format!("Utilisateur {}", flag_badge(flag, new_value).to_lowercase())
}

/// `"Prénom Nom"`, or a dash when both are empty.
pub fn full_name_or_dash(first: &str, last: &str) -> String {
    let name = format!("{} {}", first.trim(), last.trim()).trim().to_string();
    if name.is_empty() {
        "—".to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::boolean_keyword;

    #[test]
    fn test_badges_are_search_keywords() {
        for flag in [UserFlag::Active, UserFlag::Banned, UserFlag::Verified] {
            for value in [true, false] {
                let keyword = flag_badge(flag, value).to_lowercase();
                assert_eq!(boolean_keyword(&keyword), Some(value), "{keyword}");
            }
        }
    }

    #[test]
    fn test_action_labels_flip() {
        assert_eq!(flag_action_label(UserFlag::Banned, false), "Bannir");
        assert_eq!(flag_action_label(UserFlag::Banned, true), "Débannir");
        assert_eq!(flag_success_message(UserFlag::Verified, true), "Utilisateur vérifié");
    }

    #[test]
    fn test_full_name_or_dash() {
        assert_eq!(full_name_or_dash(" Amine ", ""), "Amine");
        assert_eq!(full_name_or_dash("", ""), "—");
    }
}
