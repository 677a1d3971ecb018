use contracts::domain::a004_ad::aggregate::Ad;
use contracts::enums::duration_unit::DurationUnit;
use leptos::prelude::*;
use thaw::*;

use super::view_model::AdFormViewModel;
use crate::shared::api_utils::asset_url;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;

/// Create (`ad == None`) or edit dialog with image upload.
#[component]
pub fn AdForm(ad: Option<Ad>, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let vm = AdFormViewModel::new(ad.as_ref());
    let toasts = use_toasts();
    let title = if vm.is_edit_mode() { "Modifier la publicité" } else { "Nouvelle publicité" };

    view! {
        <Modal title=title on_close=on_close>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="ad-title">"Titre"</label>
                    <input
                        type="text"
                        id="ad-title"
                        prop:value=move || vm.form.with(|f| f.title.clone())
                        on:input=move |ev| vm.form.update(|f| f.title = event_target_value(&ev))
                        placeholder="Titre de la bannière"
                    />
                </div>

                <div class="form-group">
                    <label for="ad-link">"Lien"</label>
                    <input
                        type="url"
                        id="ad-link"
                        prop:value=move || vm.form.with(|f| f.link.clone())
                        on:input=move |ev| vm.form.update(|f| f.link = event_target_value(&ev))
                        placeholder="https://"
                    />
                </div>

                <div class="form-group form-group--inline">
                    <label for="ad-duration">"Durée"</label>
                    <input
                        type="number"
                        id="ad-duration"
                        min="1"
                        prop:value=move || vm.form.with(|f| f.duration.to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev).trim().parse().unwrap_or(0);
                            vm.form.update(|f| f.duration = value);
                        }
                    />
                    <select
                        prop:value=move || vm.form.with(|f| f.duration_unit.code().to_string())
                        on:change=move |ev| {
                            if let Some(unit) = DurationUnit::from_code(&event_target_value(&ev)) {
                                vm.form.update(|f| f.duration_unit = unit);
                            }
                        }
                    >
                        {DurationUnit::all()
                            .into_iter()
                            .map(|u| view! { <option value=u.code()>{u.display_name()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.with(|f| f.is_active)
                            on:change=move |ev| vm.form.update(|f| f.is_active = event_target_checked(&ev))
                        />
                        " Active"
                    </label>
                </div>

                <div class="form-group">
                    <label for="ad-image">"Image"</label>
                    {move || vm.existing_image.get().map(|src| view! {
                        <img class="ad-form__preview" src=asset_url(&src) alt="" />
                    })}
                    <input
                        type="file"
                        id="ad-image"
                        accept="image/*"
                        on:change=move |ev| {
                            let input = event_target::<web_sys::HtmlInputElement>(&ev);
                            vm.set_file(input.files().and_then(|files| files.get(0)));
                        }
                    />
                    {move || vm.file_name.get().map(|name| view! { <small>{name}</small> })}
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.saving.get())
                    on_click=move |_| vm.save_command(toasts, on_saved)
                >
                    {move || {
                        if vm.saving.get() {
                            "Enregistrement..."
                        } else if vm.is_edit_mode() {
                            "Enregistrer"
                        } else {
                            "Créer"
                        }
                    }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Annuler"
                </Button>
            </div>
        </Modal>
    }
}
