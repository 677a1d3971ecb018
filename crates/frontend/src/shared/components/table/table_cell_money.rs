//! Money table cell, right-aligned, with the configured currency suffix

use super::number_format::format_currency;
use crate::shared::config::config;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableCellMoney(
    #[prop(into)] value: Signal<Option<f64>>,

    /// Append the currency code from configuration
    #[prop(optional, default = true)]
    show_currency: bool,

    #[prop(optional, default = false)] bold: bool,
) -> impl IntoView {
    let currency = if show_currency {
        config().display.currency.as_str()
    } else {
        ""
    };

    let formatted_text = move || match value.get() {
        Some(v) => format_currency(v, currency),
        None => "—".to_string(),
    };

    let cell_style = if bold { "font-weight: 600" } else { "" };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>{formatted_text}</span>
        </TableCell>
    }
}
