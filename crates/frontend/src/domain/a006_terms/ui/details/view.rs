use contracts::domain::a006_terms::aggregate::TermsDocument;
use leptos::prelude::*;
use thaw::*;

use super::view_model::TermsFormViewModel;
use crate::shared::api_utils::asset_url;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;

#[component]
pub fn TermsForm(
    doc: Option<TermsDocument>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = TermsFormViewModel::new(doc.as_ref());
    let toasts = use_toasts();
    let title = if vm.is_edit_mode() { "Modifier les conditions" } else { "Nouvelles conditions" };

    view! {
        <Modal title=title on_close=on_close>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="terms-title">"Titre"</label>
                    <input
                        type="text"
                        id="terms-title"
                        prop:value=move || vm.form.with(|f| f.title.clone())
                        on:input=move |ev| vm.form.update(|f| f.title = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="terms-version">"Version"</label>
                    <input
                        type="text"
                        id="terms-version"
                        prop:value=move || vm.form.with(|f| f.version.clone())
                        on:input=move |ev| vm.form.update(|f| f.version = event_target_value(&ev))
                        placeholder="1.0"
                    />
                </div>

                <div class="form-group">
                    <label for="terms-content">"Contenu"</label>
                    <textarea
                        id="terms-content"
                        rows="10"
                        prop:value=move || vm.form.with(|f| f.content.clone())
                        on:input=move |ev| vm.form.update(|f| f.content = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="terms-file">"Fichier (PDF)"</label>
                    {move || vm.existing_file.get().map(|url| view! {
                        <a href=asset_url(&url) target="_blank">"Fichier actuel"</a>
                    })}
                    <input
                        type="file"
                        id="terms-file"
                        accept="application/pdf"
                        on:change=move |ev| {
                            let input = event_target::<web_sys::HtmlInputElement>(&ev);
                            vm.set_file(input.files().and_then(|files| files.get(0)));
                        }
                    />
                    {move || vm.file_name.get().map(|name| view! { <small>{name}</small> })}
                </div>

                <div class="form-group">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.with(|f| f.is_active)
                            on:change=move |ev| vm.form.update(|f| f.is_active = event_target_checked(&ev))
                        />
                        " En vigueur"
                    </label>
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.saving.get())
                    on_click=move |_| vm.save_command(toasts, on_saved)
                >
                    {move || if vm.saving.get() { "Enregistrement..." } else { "Enregistrer" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Annuler"
                </Button>
            </div>
        </Modal>
    }
}
