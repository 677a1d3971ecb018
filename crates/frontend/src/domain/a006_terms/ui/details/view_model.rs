use contracts::domain::a006_terms::aggregate::{TermsDocument, TermsDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a006_terms::api;
use crate::shared::toast::ToastStore;

#[derive(Clone, Copy)]
pub struct TermsFormViewModel {
    id: StoredValue<Option<String>>,
    pub form: RwSignal<TermsDraft>,
    pub existing_file: RwSignal<Option<String>>,
    pub file_name: RwSignal<Option<String>>,
    file: StoredValue<Option<web_sys::File>, LocalStorage>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl TermsFormViewModel {
    pub fn new(doc: Option<&TermsDocument>) -> Self {
        Self {
            id: StoredValue::new(doc.map(|d| d.id.clone())),
            form: RwSignal::new(doc.map(TermsDraft::from_document).unwrap_or_default()),
            existing_file: RwSignal::new(doc.and_then(|d| d.file_url.clone())),
            file_name: RwSignal::new(None),
            file: StoredValue::new_local(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with_value(Option::is_some)
    }

    fn has_file(&self) -> bool {
        self.file_name.with_untracked(Option::is_some) || self.existing_file.with_untracked(Option::is_some)
    }

    pub fn set_file(&self, file: Option<web_sys::File>) {
        self.file_name.set(file.as_ref().map(|f| f.name()));
        self.file.set_value(file);
    }

    pub fn save_command(&self, toasts: ToastStore, on_saved: Callback<()>) {
        let draft = self.form.get_untracked();
        if let Err(msg) = draft.validate(self.has_file()) {
            self.error.set(Some(msg));
            return;
        }
        let id = self.id.get_value();
        let file = self.file.get_value();
        let (error, saving) = (self.error, self.saving);
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::save_terms(id.as_deref(), &draft, file.as_ref()).await;
            saving.set(false);
            match result {
                Ok(message) => {
                    toasts.success(message.unwrap_or_else(|| "Conditions enregistrées".to_string()));
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("saving terms failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    }
}
