pub mod bulk_actions_bar;
pub mod confirm_dialog;
pub mod filter_panel;
pub mod offers_table;
pub mod page_header;
pub mod pagination_controls;
pub mod status_toggle_button;
pub mod table;
pub mod table_totals_row;

pub use bulk_actions_bar::BulkActionsBar;
pub use confirm_dialog::ConfirmDialog;
pub use filter_panel::FilterPanel;
pub use offers_table::OffersRow;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use status_toggle_button::StatusToggleButton;
pub use table_totals_row::TableTotalsRow;
