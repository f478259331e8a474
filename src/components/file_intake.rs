//! File intake widget with drag & drop, browse and folder selection.
//!
//! Owns the current selection and its image previews. The parent hands in
//! the selection signal pair and is notified of every mutation through the
//! setter; `None` is the "nothing selected" sentinel. Three input paths
//! (drop, click-to-browse, folder pick) all funnel into the same ingest
//! handler. No file-type or size validation happens here.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement, MouseEvent};

use crate::selection::{self, PreviewMap};
use crate::services::read_as_data_url;
use crate::types::{SelectedFile, SelectionMode};

/// Flatten a browser `FileList` into selection entries.
fn collect_files(list: Option<FileList>) -> Vec<SelectedFile> {
    let mut batch = Vec::new();
    if let Some(list) = list {
        for index in 0..list.length() {
            if let Some(file) = list.get(index) {
                batch.push(SelectedFile::from_handle(file));
            }
        }
    }
    batch
}

/// Forward a click to one of the hidden file inputs.
fn click_input(id: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(input) = document.get_element_by_id(id) {
                if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                    html_input.click();
                }
            }
        }
    }
}

#[component]
pub fn FileIntake(
    /// Current selection, controlled by the parent
    files: ReadSignal<Option<Vec<SelectedFile>>>,
    /// Parent notification: called with the new list, `None` when empty
    set_files: WriteSignal<Option<Vec<SelectedFile>>>,
    /// Selection cardinality; folder picking only makes sense with `Multiple`
    #[prop(default = SelectionMode::Multiple)]
    mode: SelectionMode,
) -> impl IntoView {
    let (previews, set_previews) = create_signal(PreviewMap::new());
    let (drag_active, set_drag_active) = create_signal(false);

    let allow_multiple = mode == SelectionMode::Multiple;

    // La sélection est contrôlée par le parent : toute mutation (y compris
    // un reset externe après soumission) doit purger les aperçus orphelins
    create_effect(move |_| {
        let current = files.get();
        set_previews.update(|previews| selection::purge_orphans(previews, &current));
    });

    // Chemin unique d'entrée : drop, browse et dossier passent tous ici
    let ingest = move |batch: Vec<SelectedFile>| {
        if batch.is_empty() {
            return;
        }
        log::info!("📎 {} file(s) picked", batch.len());

        let images: Vec<File> = batch
            .iter()
            .filter(|entry| entry.is_image())
            .map(|entry| entry.handle.clone())
            .collect();

        set_files.update(|current| selection::ingest(current, batch, mode));

        // Lectures fire-and-forget : chaque aperçu arrive quand il arrive,
        // pas forcément dans l'ordre du drop
        for handle in images {
            let name = handle.name();
            let started = read_as_data_url(&handle, move |data_url| {
                set_previews.update(|previews| {
                    if !selection::store_preview(previews, &files.get_untracked(), &name, data_url) {
                        log::debug!("🗑️ Dropped late preview for removed file {}", name);
                    }
                });
            });
            if let Err(e) = started {
                log::warn!("⚠️ {}", e);
            }
        }
    };

    let on_input_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let batch = collect_files(input.files());
        // Ré-armer l'input : re-sélectionner le même fichier doit re-déclencher
        input.set_value("");
        ingest(batch);
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        let batch = ev
            .data_transfer()
            .map(|transfer| collect_files(transfer.files()))
            .unwrap_or_default();
        ingest(batch);
    };

    let remove_one = move |entry: SelectedFile| {
        set_files.update(|current| {
            selection::remove_first(current, &entry);
        });
    };

    let remove_all = move |_| {
        log::info!("🗑️ Selection cleared");
        set_files.set(None);
    };

    view! {
        <div class="file-intake">
            <div
                class="drop-zone"
                id="dropZone"
                class:dragging=move || drag_active.get()
                on:click=move |_| click_input("fileInput")
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="drop-icon">"📤"</div>
                <div class="drop-text">
                    {move || if drag_active.get() {
                        "Drop the files here"
                    } else if allow_multiple {
                        "Drag & drop files here, or click to select"
                    } else {
                        "Drag & drop a file here, or click to select"
                    }}
                </div>

                <Show
                    when=move || allow_multiple
                    fallback=|| view! { }
                >
                    <button
                        type="button"
                        class="folder-button"
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            click_input("folderInput");
                        }
                    >
                        "Select a folder instead"
                    </button>
                </Show>

                <input
                    type="file"
                    id="fileInput"
                    multiple=allow_multiple
                    style="display:none"
                    on:change=on_input_change
                />

                // Attribut non standard mais supporté par les navigateurs :
                // l'input énumère récursivement le dossier choisi
                <input
                    type="file"
                    id="folderInput"
                    webkitdirectory=""
                    style="display:none"
                    on:change=on_input_change
                />
            </div>

            <Show
                when=move || files.get().is_some()
                fallback=|| view! { }
            >
                <div class="file-list">
                    <For
                        each=move || files.get().unwrap_or_default().into_iter().enumerate()
                        key=|(idx, _)| *idx
                        children=move |(_, entry)| {
                            let preview = {
                                let name = entry.name.clone();
                                move || previews.get().get(&name).cloned()
                            };
                            let on_remove = {
                                let entry = entry.clone();
                                move |_| remove_one(entry.clone())
                            };

                            view! {
                                <div class="file-row">
                                    {move || match preview() {
                                        Some(data_url) => view! {
                                            <img class="file-thumb" src=data_url alt="Preview"/>
                                        }.into_view(),
                                        None => view! {
                                            <div class="file-thumb file-thumb-placeholder">"📄"</div>
                                        }.into_view(),
                                    }}
                                    <div class="file-info">
                                        <div class="file-name">{entry.name.clone()}</div>
                                        <div class="file-size">{selection::human_size(entry.size_bytes)}</div>
                                    </div>
                                    <button type="button" class="file-remove" on:click=on_remove>
                                        "✕"
                                    </button>
                                </div>
                            }
                        }
                    />

                    <div class="file-actions">
                        <button type="button" class="btn btn-secondary" on:click=remove_all>
                            "Remove all"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
