use leptos::prelude::*;
use thaw::*;

use super::table::format_currency;
use crate::shared::config::config;

/// Footer row with the record count and one money total, right-aligned under its column.
///
/// `leading` cells precede the count cell; `trailing` cells follow the total.
#[component]
pub fn TableTotalsRow(
    #[prop(into)] count: Signal<usize>,
    #[prop(into)] total: Signal<f64>,
    leading: usize,
    /// Cells between the count and the total
    gap: usize,
    trailing: usize,
) -> impl IntoView {
    let currency = config().display.currency.as_str();
    let empty = |n: usize| (0..n).map(|_| view! { <TableCell>""</TableCell> }).collect_view();

    view! {
        <TableRow class="table__totals-row">
            {empty(leading)}
            <TableCell>{move || format!("Total: {} ligne(s)", count.get())}</TableCell>
            {empty(gap)}
            <TableCell class="text-right">
                <strong>{move || format_currency(total.get(), currency)}</strong>
            </TableCell>
            {empty(trailing)}
        </TableRow>
    }
}
