use leptos::prelude::*;
use thaw::*;

/// Yes/no confirmation built on thaw's Dialog.
///
/// `on_cancel` runs whenever the dialog closes without confirmation: the cancel
/// button, Escape or a click on the mask.
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(optional, into)] confirm_label: Option<String>,
    on_confirm: Callback<()>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Confirmer".to_string());
    let confirmed = StoredValue::new(false);

    // thaw closes on Escape and mask click by writing `open` directly.
    Effect::new(move |was_open: Option<bool>| {
        let is_open = open.get();
        if is_open {
            confirmed.set_value(false);
        }
        if dismissed(was_open.unwrap_or(false), is_open, confirmed.get_value()) {
            if let Some(cb) = on_cancel {
                untrack(|| cb.run(()));
            }
        }
        is_open
    });

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>{move || message.get()}</DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| {
                                confirmed.set_value(true);
                                open.set(false);
                                on_confirm.run(());
                            }
                        >
                            {confirm_label}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            "Annuler"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

/// The dialog went from open to closed without the confirm button.
fn dismissed(was_open: bool, is_open: bool, confirmed: bool) -> bool {
    was_open && !is_open && !confirmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_close_without_confirm_is_a_dismissal() {
        assert!(dismissed(true, false, false));
        assert!(!dismissed(true, false, true));
    }

    #[test]
    fn test_opening_or_staying_put_is_not_a_dismissal() {
        assert!(!dismissed(false, true, false));
        assert!(!dismissed(true, true, false));
        assert!(!dismissed(false, false, false));
    }
}
