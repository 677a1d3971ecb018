//! Tab content registry: tab.key → view. All tab keys are resolved here.

use crate::domain::a001_auction::ui::list::AuctionsList;
use crate::domain::a002_tender::ui::list::TendersList;
use crate::domain::a003_category::ui::tree::CategoryTree;
use crate::domain::a004_ad::ui::list::AdsList;
use crate::domain::a005_direct_sale::ui::list::DirectSalesList;
use crate::domain::a006_terms::ui::list::TermsList;
use crate::system::roles::ui::list::RolesList;
use crate::system::users::ui::list::UsersList;
use contracts::enums::user_kind::UserKind;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "users_clients" => view! { <UsersList kind=UserKind::Client /> }.into_any(),
        "users_professionals" => view! { <UsersList kind=UserKind::Professional /> }.into_any(),
        "users_resellers" => view! { <UsersList kind=UserKind::Reseller /> }.into_any(),
        "auctions" => view! { <AuctionsList /> }.into_any(),
        "tenders" => view! { <TendersList /> }.into_any(),
        "direct_sales" => view! { <DirectSalesList /> }.into_any(),
        "categories" => view! { <CategoryTree /> }.into_any(),
        "ads" => view! { <AdsList /> }.into_any(),
        "terms" => view! { <TermsList /> }.into_any(),
        "roles" => view! { <RolesList /> }.into_any(),
        other => {
            log::warn!("unknown tab key: {}", other);
            view! { <div class="placeholder">"Page introuvable"</div> }.into_any()
        }
    }
}
