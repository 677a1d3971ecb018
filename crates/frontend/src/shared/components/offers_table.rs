use contracts::domain::common::Offer;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::table::format_currency;
use crate::shared::config::config;
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::expandable::Detail;

/// Detail row under an expanded auction or tender, spanning `colspan` columns.
#[component]
pub fn OffersRow(
    #[prop(into)] detail: Signal<Option<Detail<Offer>>>,
    colspan: u32,
    /// Plural noun for the empty state ("offre", "soumission")
    noun: &'static str,
) -> impl IntoView {
    let currency = config().display.currency.as_str();

    let body = move || match detail.get() {
        None | Some(Detail::Loading) => view! { <div class="offers__loading">"Chargement..."</div> }.into_any(),
        Some(Detail::Failed(message)) => view! { <div class="alert alert--error">{message}</div> }.into_any(),
        Some(Detail::Loaded(offers)) if offers.is_empty() => {
            view! { <div class="offers__empty">{format!("Aucune {}", noun)}</div> }.into_any()
        }
        Some(Detail::Loaded(mut offers)) => {
            offers.sort_by(|a, b| b.amount.total_cmp(&a.amount));
            view! {
                <table class="offers">
                    <thead>
                        <tr>
                            <th>"Participant"</th>
                            <th class="text-right">"Montant"</th>
                            <th>"Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {offers
                            .into_iter()
                            .map(|o| {
                                let who = o.user.as_ref().map(|u| u.full_name()).unwrap_or_else(|| "—".into());
                                view! {
                                    <tr>
                                        <td>{who}</td>
                                        <td class="text-right">{format_currency(o.amount, currency)}</td>
                                        <td>{format_optional_datetime(o.created_at.as_deref())}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            }
            .into_any()
        }
    };

    view! {
        <TableRow class="table__detail-row">
            <TableCell attr:colspan=colspan.to_string()>{body}</TableCell>
        </TableRow>
    }
}
