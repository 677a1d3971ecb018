//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! ```ignore
//! view! {
//!     <PageFrame page_id="a001_auction--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Sets `id`, `data-page-category` and the BEM modifier class of the category.
#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a001_auction--list"`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "invalid page id {page_id}");

    let base_class = match category {
        PAGE_CAT_TREE => "page page--tree",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
