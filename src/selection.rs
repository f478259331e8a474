//! Pure file-list and preview-map operations.
//!
//! The intake widget keeps two pieces of state: the ordered selection
//! (`Option<Vec<SelectedFile>>`, where `None` is the "no selection"
//! sentinel reported to the parent) and the preview map (file name to
//! data-URL, image files only). Everything that mutates them funnels
//! through the functions here, which keep the invariant that a preview
//! entry exists only for names still present in the selection.
//!
//! Preview reads are fire-and-forget and may complete after their file
//! was removed; [`store_preview`] drops such late arrivals instead of
//! inserting a stale entry.

use std::collections::HashMap;

use crate::types::{SelectedFile, SelectionMode};

/// File name -> base64 data-URL, populated asynchronously for image files.
pub type PreviewMap = HashMap<String, String>;

/// Fold a batch of picked files into the current selection.
///
/// `Multiple` appends in order, duplicates included. `Single` replaces
/// the whole selection with the batch's first file. An empty batch is a
/// no-op either way.
pub fn ingest<H>(
    selection: &mut Option<Vec<SelectedFile<H>>>,
    batch: Vec<SelectedFile<H>>,
    mode: SelectionMode,
) {
    if batch.is_empty() {
        return;
    }
    match mode {
        SelectionMode::Single => {
            *selection = batch.into_iter().next().map(|entry| vec![entry]);
        }
        SelectionMode::Multiple => {
            selection.get_or_insert_with(Vec::new).extend(batch);
        }
    }
}

/// Remove the first entry structurally equal to `target`.
///
/// Equality is by field comparison, not content hash, so with duplicate
/// entries only the earliest match goes. An emptied selection collapses
/// to the `None` sentinel. Returns whether anything was removed.
pub fn remove_first<H: PartialEq>(
    selection: &mut Option<Vec<SelectedFile<H>>>,
    target: &SelectedFile<H>,
) -> bool {
    if let Some(list) = selection.as_mut() {
        if let Some(pos) = list.iter().position(|entry| entry == target) {
            list.remove(pos);
            if list.is_empty() {
                *selection = None;
            }
            return true;
        }
    }
    false
}

/// Record a finished preview read, unless its file is already gone.
///
/// Returns whether the entry was stored.
pub fn store_preview<H>(
    previews: &mut PreviewMap,
    selection: &Option<Vec<SelectedFile<H>>>,
    name: &str,
    data_url: String,
) -> bool {
    let present = selection
        .as_ref()
        .map(|list| list.iter().any(|entry| entry.name == name))
        .unwrap_or(false);
    if present {
        previews.insert(name.to_string(), data_url);
    }
    present
}

/// Drop preview entries whose name no longer appears in the selection.
pub fn purge_orphans<H>(previews: &mut PreviewMap, selection: &Option<Vec<SelectedFile<H>>>) {
    match selection {
        Some(list) => previews.retain(|name, _| list.iter().any(|entry| entry.name == *name)),
        None => previews.clear(),
    }
}

/// Human-readable file size for the selection list.
pub fn human_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;

    let size = bytes as f64;
    if size >= MIB {
        format!("{:.2} MB", size / MIB)
    } else if size >= KIB {
        format!("{:.1} KB", size / KIB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, size_bytes: u64, mime_type: &str, handle: u32) -> SelectedFile<u32> {
        SelectedFile {
            name: name.to_string(),
            size_bytes,
            mime_type: mime_type.to_string(),
            handle,
        }
    }

    #[test]
    fn ingest_appends_onto_empty_selection() {
        let mut selection = None;
        ingest(
            &mut selection,
            vec![entry("cat.png", 10, "image/png", 1)],
            SelectionMode::Multiple,
        );

        let list = selection.expect("selection should exist");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "cat.png");
    }

    #[test]
    fn ingest_appends_in_order_and_keeps_duplicate_names() {
        let mut selection = Some(vec![entry("a.txt", 1, "text/plain", 1)]);
        ingest(
            &mut selection,
            vec![entry("a.txt", 2, "text/plain", 2), entry("b.txt", 3, "text/plain", 3)],
            SelectionMode::Multiple,
        );

        let list = selection.unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].handle, 1);
        assert_eq!(list[1].handle, 2);
        assert_eq!(list[2].name, "b.txt");
    }

    #[test]
    fn ingest_replaces_selection_in_single_mode() {
        let mut selection = Some(vec![entry("old.png", 5, "image/png", 1)]);
        ingest(
            &mut selection,
            vec![entry("new.png", 6, "image/png", 2), entry("extra.png", 7, "image/png", 3)],
            SelectionMode::Single,
        );

        let list = selection.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "new.png");
    }

    #[test]
    fn ingest_ignores_empty_batch() {
        let mut selection = Some(vec![entry("keep.txt", 1, "text/plain", 1)]);
        ingest(&mut selection, Vec::new(), SelectionMode::Single);

        assert_eq!(selection.as_ref().map(|list| list.len()), Some(1));
    }

    #[test]
    fn remove_first_takes_only_the_earliest_match() {
        let twin_a = entry("cat.png", 10, "image/png", 1);
        let twin_b = entry("cat.png", 10, "image/png", 1);
        let mut selection = Some(vec![twin_a.clone(), twin_b, entry("dog.png", 20, "image/png", 2)]);

        assert!(remove_first(&mut selection, &twin_a));

        let list = selection.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "cat.png");
        assert_eq!(list[1].name, "dog.png");
    }

    #[test]
    fn remove_last_entry_collapses_to_sentinel() {
        let only = entry("cat.png", 10, "image/png", 1);
        let mut selection = Some(vec![only.clone()]);

        assert!(remove_first(&mut selection, &only));
        assert_eq!(selection, None);
    }

    #[test]
    fn remove_missing_entry_is_a_noop() {
        let mut selection = Some(vec![entry("cat.png", 10, "image/png", 1)]);
        let absent = entry("dog.png", 20, "image/png", 2);

        assert!(!remove_first(&mut selection, &absent));
        assert_eq!(selection.as_ref().map(|list| list.len()), Some(1));

        let mut empty: Option<Vec<SelectedFile<u32>>> = None;
        assert!(!remove_first(&mut empty, &absent));
    }

    #[test]
    fn store_preview_keys_by_name_for_present_files() {
        let selection = Some(vec![entry("cat.png", 10, "image/png", 1)]);
        let mut previews = PreviewMap::new();

        assert!(store_preview(&mut previews, &selection, "cat.png", "data:image/png;base64,AAAA".into()));
        assert_eq!(previews.len(), 1);
        assert_eq!(previews["cat.png"], "data:image/png;base64,AAAA");
    }

    #[test]
    fn store_preview_drops_late_arrival_for_removed_file() {
        // The read finished after the file left the selection
        let selection = Some(vec![entry("dog.png", 20, "image/png", 2)]);
        let mut previews = PreviewMap::new();

        assert!(!store_preview(&mut previews, &selection, "cat.png", "data:...".into()));
        assert!(previews.is_empty());

        let none: Option<Vec<SelectedFile<u32>>> = None;
        assert!(!store_preview(&mut previews, &none, "cat.png", "data:...".into()));
        assert!(previews.is_empty());
    }

    #[test]
    fn purge_orphans_keeps_previews_for_remaining_names() {
        let selection = Some(vec![
            entry("cat.png", 10, "image/png", 1),
            entry("cat.png", 10, "image/png", 2),
        ]);
        let mut previews = PreviewMap::new();
        previews.insert("cat.png".into(), "data:cat".into());
        previews.insert("dog.png".into(), "data:dog".into());

        purge_orphans(&mut previews, &selection);

        // One cat remains selected, so its preview survives; dog is gone
        assert_eq!(previews.len(), 1);
        assert!(previews.contains_key("cat.png"));
    }

    #[test]
    fn purge_orphans_clears_everything_for_empty_selection() {
        let mut previews = PreviewMap::new();
        previews.insert("cat.png".into(), "data:cat".into());

        purge_orphans::<u32>(&mut previews, &None);
        assert!(previews.is_empty());
    }

    #[test]
    fn human_size_picks_a_sensible_unit() {
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(2048), "2.0 KB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.00 MB");
    }
}
