use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::layout::{icon_upload, panel};
use crate::config::Config;
use crate::fetch::FetchGeneration;
use crate::gateway::HttpBackend;
use crate::models::UploadState;
use crate::upload::{read_file_text, upload_file};

#[derive(Properties, PartialEq)]
pub struct UploadProps {
    pub on_uploaded: Callback<usize>,
}

#[function_component(Upload)]
pub fn upload(props: &UploadProps) -> Html {
    let config = use_context::<Config>().unwrap_or_default();
    let state = use_state(|| UploadState::Idle);
    let generation = use_state(FetchGeneration::default);

    let on_change = {
        let state = state.clone();
        let generation = (*generation).clone();
        let on_uploaded = props.on_uploaded.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = match input.files().and_then(|files| files.get(0)) {
                Some(file) => file,
                None => return,
            };
            // Lets the same file be picked again after fixing it.
            input.set_value("");

            let ticket = generation.begin();
            state.set(UploadState::Loading);

            let state = state.clone();
            let on_uploaded = on_uploaded.clone();
            let backend = HttpBackend::new(&config);
            spawn_local(async move {
                let name = file.name();
                let mime = file.type_();
                let outcome = upload_file(&backend, &name, &mime, read_file_text(file)).await;

                // The backend has the data either way; only the status line is
                // tied to the latest selection.
                if let Ok(count) = &outcome {
                    on_uploaded.emit(*count);
                }
                if !ticket.is_current() {
                    log::debug!("ignoring outcome of superseded upload {}", name);
                    return;
                }
                match outcome {
                    Ok(count) => state.set(UploadState::Success(count)),
                    Err(err) => {
                        log::error!("upload of {} failed: {}", name, err);
                        state.set(UploadState::Error(err.to_string()));
                    }
                }
            });
        })
    };

    let status = match &*state {
        UploadState::Idle => html! {
            <p class="text-xs text-muted-foreground">{"Select a .json file containing an array of transactions."}</p>
        },
        UploadState::Loading => html! {
            <p class="text-sm text-muted-foreground animate-pulse">{"Uploading..."}</p>
        },
        UploadState::Success(count) => html! {
            <p class="text-sm text-green-600">{ format!("Successfully uploaded {} transactions.", count) }</p>
        },
        UploadState::Error(message) => html! {
            <p class="text-sm text-red-500">{ message.clone() }</p>
        },
    };

    panel(
        "Upload Transactions",
        html! {
            <div class="space-y-3">
                <label class="flex items-center gap-3 bg-[#f1f4f9] rounded-[10px] px-4 py-3 cursor-pointer text-[#173E63]">
                    { icon_upload() }
                    <span class="text-sm font-bold">{"Choose file"}</span>
                    <input type="file" accept=".json,application/json" class="text-xs"
                        disabled={*state == UploadState::Loading} onchange={on_change} />
                </label>
                { status }
            </div>
        },
    )
}
