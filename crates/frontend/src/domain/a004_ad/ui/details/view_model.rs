use contracts::domain::a004_ad::aggregate::{Ad, AdDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_ad::api;
use crate::shared::toast::ToastStore;

/// State of the create/edit ad dialog.
#[derive(Clone, Copy)]
pub struct AdFormViewModel {
    id: StoredValue<Option<String>>,
    pub form: RwSignal<AdDraft>,
    /// Image already stored on the server (edit mode)
    pub existing_image: RwSignal<Option<String>>,
    pub file_name: RwSignal<Option<String>>,
    file: StoredValue<Option<web_sys::File>, LocalStorage>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl AdFormViewModel {
    pub fn new(ad: Option<&Ad>) -> Self {
        Self {
            id: StoredValue::new(ad.map(|a| a.id.clone())),
            form: RwSignal::new(ad.map(AdDraft::from_ad).unwrap_or_else(|| AdDraft {
                duration: 7,
                is_active: true,
                ..AdDraft::default()
            })),
            existing_image: RwSignal::new(ad.and_then(|a| a.image.clone())),
            file_name: RwSignal::new(None),
            file: StoredValue::new_local(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with_value(Option::is_some)
    }

    pub fn has_image(&self) -> bool {
        self.file_name.with(Option::is_some) || self.existing_image.with(Option::is_some)
    }

    pub fn set_file(&self, file: Option<web_sys::File>) {
        self.file_name.set(file.as_ref().map(|f| f.name()));
        self.file.set_value(file);
    }

    pub fn save_command(&self, toasts: ToastStore, on_saved: Callback<()>) {
        let draft = self.form.get_untracked();
        if let Err(msg) = draft.validate(self.has_image()) {
            self.error.set(Some(msg));
            return;
        }
        let id = self.id.get_value();
        let file = self.file.get_value();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::save_ad(id.as_deref(), &draft, file.as_ref()).await;
            saving.set(false);
            match result {
                Ok(message) => {
                    let fallback = if id.is_some() { "Publicité modifiée" } else { "Publicité créée" };
                    toasts.success(message.unwrap_or_else(|| fallback.to_string()));
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("saving ad failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    }
}
