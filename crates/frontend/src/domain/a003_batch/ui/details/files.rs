use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use super::view_model::BatchDetailsViewModel;
use crate::shared::components::LoadingIndicator;
use crate::system::auth::use_role;

fn selected_label(count: usize) -> String {
    match count {
        0 => "Select Files".to_string(),
        1 => "1 file selected".to_string(),
        n => format!("{} files selected", n),
    }
}

fn files_from_input(ev: &leptos::ev::Event) -> Vec<File> {
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[component]
pub fn BatchFilesSection(vm: BatchDetailsViewModel) -> impl IntoView {
    let role = use_role();
    let selected = RwSignal::new_local(Vec::<File>::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let upload = move |_| {
        let files = selected.get_untracked();
        vm.upload(files, &role.get_untracked(), move || {
            selected.set(Vec::new());
            if let Some(input) = input_ref.get_untracked() {
                input.set_value("");
            }
        });
    };

    view! {
        <section class="details-section card">
            <div class="details-section__head">
                <h2 class="details-section__title">"Batch Files"</h2>
                <div class="details-section__actions">
                    <Show when=move || role.get().can_upload_batch_files()>
                        <label class="file-picker" class:file-picker--disabled=move || vm.uploading.get()>
                            <input
                                node_ref=input_ref
                                type="file"
                                multiple
                                class="file-picker__input"
                                disabled=move || vm.uploading.get()
                                on:change=move |ev| selected.set(files_from_input(&ev))
                            />
                            <span>{move || selected_label(selected.with(|f| f.len()))}</span>
                        </label>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || {
                                selected.with(|f| f.is_empty()) || vm.uploading.get()
                            })
                            on_click=upload
                        >
                            {move || if vm.uploading.get() { "Uploading..." } else { "Upload" }}
                        </Button>
                    </Show>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || vm.zipping.get() || vm.files.with(|f| f.is_empty()))
                        on_click=move |_| vm.download_zip()
                    >
                        {move || if vm.zipping.get() { "Preparing zip..." } else { "Download all (zip)" }}
                    </Button>
                </div>
            </div>
            {move || {
                if vm.files_loading.get() {
                    return view! { <LoadingIndicator label="Loading files..." /> }.into_any();
                }
                if vm.files_error.get() {
                    return view! { <p class="alert alert--error">"Error loading Google files"</p> }.into_any();
                }
                let files = vm.files.get();
                if files.is_empty() {
                    return view! { <p class="empty-state">"No uploaded files found."</p> }.into_any();
                }
                view! {
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Type"</TableHeaderCell>
                                <TableHeaderCell>"Size"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {files
                                .into_iter()
                                .map(|file| {
                                    let name = file.name.clone();
                                    let mime = file.mime_type.clone().unwrap_or_else(|| "-".into());
                                    let size = file.size_label();
                                    let for_download = StoredValue::new(file);
                                    view! {
                                        <TableRow>
                                            <TableCell>{name}</TableCell>
                                            <TableCell>{mime}</TableCell>
                                            <TableCell>{size}</TableCell>
                                            <TableCell>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Transparent
                                                    on_click=move |_| {
                                                        vm.download(for_download.get_value(), role.get_untracked())
                                                    }
                                                >
                                                    "Download"
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()}
                        </TableBody>
                    </Table>
                }
                .into_any()
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_label() {
        assert_eq!(selected_label(0), "Select Files");
        assert_eq!(selected_label(1), "1 file selected");
        assert_eq!(selected_label(3), "3 files selected");
    }
}
