use super::api;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

const NO_FILE: &str = "Por favor, selecciona un archivo Excel.";
const UPLOADED: &str = "Archivo Excel cargado y procesado exitosamente.";
const UNKNOWN_ERROR: &str = "Error desconocido al subir el archivo.";

/// File picker plus "Cargar Excel" button, embedded in the obligation list header.
#[component]
pub fn ImportObligations(on_uploaded: Callback<()>) -> impl IntoView {
    let toasts = use_toasts();
    let file_input = NodeRef::<Input>::new();
    let (uploading, set_uploading) = signal(false);

    let upload = move |_| {
        let Some(input) = file_input.get() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            toasts.error(NO_FILE);
            return;
        };

        set_uploading.set(true);
        spawn_local(async move {
            match api::upload_workbook(&file).await {
                Ok(()) => {
                    toasts.success(UPLOADED);
                    input.set_value("");
                    on_uploaded.run(());
                }
                Err(e) => {
                    log::error!("uploading {}: {e}", file.name());
                    toasts.error(format!(
                        "Error al cargar el archivo Excel: {}",
                        e.message_or(UNKNOWN_ERROR)
                    ));
                }
            }
            set_uploading.set(false);
        });
    };

    view! {
        <div class="excel-import">
            <input
                node_ref=file_input
                type="file"
                class="excel-import__input"
                accept=".xlsx, .xls"
            />
            <button class="button button--secondary" on:click=upload disabled=uploading>
                {icon("upload")}
                {move || if uploading.get() { "Subiendo..." } else { "Cargar Excel" }}
            </button>
        </div>
    }
}
