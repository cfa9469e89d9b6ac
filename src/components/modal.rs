use leptos::html::Dialog;
use leptos::prelude::*;

/// Keeps a `<dialog>` element's open state in step with `open`.
pub fn sync_dialog(dialog_ref: NodeRef<Dialog>, open: Signal<bool>) {
    Effect::new(move |_| {
        let should_open = open.get();
        if let Some(dialog) = dialog_ref.get() {
            if should_open && !dialog.open() {
                let _ = dialog.show_modal();
            } else if !should_open && dialog.open() {
                dialog.close();
            }
        }
    });
}
