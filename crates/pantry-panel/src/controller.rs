//! Controller flows: drive the accessors, mutate the view-model.
//!
//! Every flow reads what it needs from the view-model, drops the lock,
//! performs its backend calls, then writes the outcome back. In-flight
//! requests are not cancelled by navigation; a load that settles after the
//! user moved on simply overwrites that screen's state.

use pantry_api::{dashboard, extract_rows};
use pantry_core::{fields, Draft, Envelope, ResourceKind};

use crate::state::{AppState, ModalState, Notice, Page, ScreenState};

/// Switch the visible page and load its data. A successful switch
/// discards any open modal; unrecognized slugs are a no-op and cause
/// no navigation, no modal change, and no backend traffic.
pub async fn switch_page(state: &AppState, slug: &str) -> Option<Page> {
    let page = state.view_mut().switch_page(slug)?;
    close_modal(state);
    load_page(state, page).await;
    Some(page)
}

/// Load whatever the given page shows.
pub async fn load_page(state: &AppState, page: Page) {
    match page.resource() {
        None => load_dashboard(state).await,
        Some(kind) => load_screen(state, kind).await,
    }
}

/// Refresh the dashboard counts.
pub async fn load_dashboard(state: &AppState) {
    let counts = dashboard::load_counts(state.accessors()).await;
    state.view_mut().counts = counts;
}

/// Load one resource screen: `Loading`, then `Rendered` or `Failed`.
pub async fn load_screen(state: &AppState, kind: ResourceKind) {
    state.view_mut().set_screen(kind, ScreenState::Loading);

    let envelope = state.accessors().for_kind(kind).get_all().await;
    let next = match envelope {
        Envelope::Success(data) => ScreenState::Rendered(extract_rows(kind, &data)),
        Envelope::Failure(_) => ScreenState::Failed,
    };
    state.view_mut().set_screen(kind, next);
}

/// Open the modal empty, for creating a record.
pub fn open_create_modal(state: &AppState, kind: ResourceKind) {
    state.view_mut().modal = ModalState::Open {
        kind,
        record_id: None,
        prefill: None,
    };
}

/// Open the modal for editing: fetch the record and prefill the form.
///
/// If the fetch fails the modal stays open with the requested id and blank
/// fields. If it succeeds, the effective id is re-read from the record
/// through the kind's candidate-key chain.
pub async fn open_edit_modal(state: &AppState, kind: ResourceKind, id: &str) {
    state.view_mut().modal = ModalState::Open {
        kind,
        record_id: Some(id.to_string()),
        prefill: None,
    };

    let envelope = state.accessors().for_kind(kind).get_by_id(id).await;
    if let Some(record) = envelope.data() {
        let resolved = fields::text(record, kind.id_keys());
        state.view_mut().modal = ModalState::Open {
            kind,
            record_id: (!resolved.is_empty()).then_some(resolved),
            prefill: Some(record.clone()),
        };
    }
}

pub fn close_modal(state: &AppState) {
    state.view_mut().modal = ModalState::Closed;
}

/// Submit a modal form: update when an id is present, create otherwise.
/// Success closes the modal and refreshes both the screen and the
/// dashboard; failure leaves the modal open behind an error notice.
pub async fn submit(state: &AppState, draft: Draft, record_id: Option<String>) {
    let kind = draft.kind();
    let body = draft.body();
    let accessor = state.accessors().for_kind(kind);

    let (envelope, verb) = match &record_id {
        Some(id) => (accessor.update(id, &body).await, "updated"),
        None => (accessor.create(&body).await, "created"),
    };

    match envelope {
        Envelope::Success(_) => {
            {
                let mut view = state.view_mut();
                view.notice = Some(Notice::success(format!(
                    "{} {verb} successfully",
                    kind.noun()
                )));
                view.modal = ModalState::Closed;
            }
            load_screen(state, kind).await;
            load_dashboard(state).await;
        }
        Envelope::Failure(error) => {
            state.view_mut().notice = Some(Notice::error(format!("Error: {error}")));
        }
    }
}

/// Delete a record. The backend is only contacted when the confirmation
/// flag is affirmative.
pub async fn delete(state: &AppState, kind: ResourceKind, id: &str, confirmed: bool) {
    if !confirmed {
        return;
    }

    let envelope = state.accessors().for_kind(kind).remove(id).await;
    match envelope {
        Envelope::Success(_) => {
            state.view_mut().notice = Some(Notice::success(format!(
                "{} deleted successfully",
                kind.noun()
            )));
            load_screen(state, kind).await;
            load_dashboard(state).await;
        }
        Envelope::Failure(error) => {
            state.view_mut().notice = Some(Notice::error(format!(
                "Error deleting {}: {error}",
                kind.noun().to_lowercase()
            )));
        }
    }
}

/// Clear the blocking notice.
pub fn dismiss_notice(state: &AppState) {
    state.view_mut().notice = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_api::Accessors;
    use pantry_core::config::ApiConfig;
    use pantry_core::{ProductDraft, SupplierDraft};
    use tokio::net::TcpListener;

    async fn mock_state() -> AppState {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { pantry_mock::run(listener).await });

        let accessors = Accessors::new(&ApiConfig {
            base_url: format!("http://{addr}/api"),
            timeout_secs: 5,
        })
        .unwrap();
        AppState::new(accessors)
    }

    fn dead_state() -> AppState {
        let accessors = Accessors::new(&ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        })
        .unwrap();
        AppState::new(accessors)
    }

    fn milk() -> Draft {
        Draft::Product(ProductDraft {
            name: "Milk".to_string(),
            category: "Dairy".to_string(),
            stock: 10,
            price: 3.5,
        })
    }

    fn rendered_rows(state: &AppState, kind: ResourceKind) -> Vec<serde_json::Value> {
        match state.view().screen(kind) {
            ScreenState::Rendered(rows) => rows.clone(),
            other => panic!("expected rendered screen, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_screen_renders_with_no_rows() {
        let state = mock_state().await;
        load_screen(&state, ResourceKind::Products).await;
        assert!(rendered_rows(&state, ResourceKind::Products).is_empty());
    }

    #[tokio::test]
    async fn unreachable_backend_fails_the_screen() {
        let state = dead_state();
        load_screen(&state, ResourceKind::Products).await;
        assert_eq!(
            *state.view().screen(ResourceKind::Products),
            ScreenState::Failed
        );
    }

    #[tokio::test]
    async fn submit_without_id_creates_and_refreshes() {
        let state = mock_state().await;
        open_create_modal(&state, ResourceKind::Products);

        submit(&state, milk(), None).await;

        let view = state.view();
        assert_eq!(view.modal, ModalState::Closed);
        assert_eq!(
            view.notice,
            Some(Notice::success("Product created successfully"))
        );
        assert_eq!(view.counts.products, 1);
        drop(view);
        assert_eq!(rendered_rows(&state, ResourceKind::Products).len(), 1);
    }

    #[tokio::test]
    async fn submit_with_id_updates_instead_of_creating() {
        let state = mock_state().await;
        submit(&state, milk(), None).await;
        let id = {
            let rows = rendered_rows(&state, ResourceKind::Products);
            fields::text(&rows[0], ResourceKind::Products.id_keys())
        };

        let edited = Draft::Product(ProductDraft {
            name: "Oat Milk".to_string(),
            category: "Dairy".to_string(),
            stock: 4,
            price: 4.25,
        });
        submit(&state, edited, Some(id)).await;

        // Still one record: the edit produced an update, never a create.
        assert_eq!(state.view().counts.products, 1);
        let rows = rendered_rows(&state, ResourceKind::Products);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], "Oat Milk");
        assert_eq!(
            state.view().notice,
            Some(Notice::success("Product updated successfully"))
        );
    }

    #[tokio::test]
    async fn failed_submit_keeps_the_modal_open() {
        let state = dead_state();
        open_create_modal(&state, ResourceKind::Products);

        submit(&state, milk(), None).await;

        let view = state.view();
        assert!(matches!(view.modal, ModalState::Open { .. }));
        let notice = view.notice.as_ref().unwrap();
        assert!(!notice.success);
        assert!(notice.message.starts_with("Error: "));
    }

    #[tokio::test]
    async fn unconfirmed_delete_never_reaches_the_backend() {
        let state = mock_state().await;
        submit(&state, milk(), None).await;
        let id = {
            let rows = rendered_rows(&state, ResourceKind::Products);
            fields::text(&rows[0], ResourceKind::Products.id_keys())
        };
        dismiss_notice(&state);

        delete(&state, ResourceKind::Products, &id, false).await;

        // Record intact, no notice raised.
        assert!(state.view().notice.is_none());
        load_screen(&state, ResourceKind::Products).await;
        assert_eq!(rendered_rows(&state, ResourceKind::Products).len(), 1);
    }

    #[tokio::test]
    async fn confirmed_delete_removes_and_refreshes() {
        let state = mock_state().await;
        submit(&state, milk(), None).await;
        let id = {
            let rows = rendered_rows(&state, ResourceKind::Products);
            fields::text(&rows[0], ResourceKind::Products.id_keys())
        };

        delete(&state, ResourceKind::Products, &id, true).await;

        assert_eq!(
            state.view().notice,
            Some(Notice::success("Product deleted successfully"))
        );
        assert!(rendered_rows(&state, ResourceKind::Products).is_empty());
        assert_eq!(state.view().counts.products, 0);
    }

    #[tokio::test]
    async fn failed_delete_reports_the_resource_noun() {
        let state = dead_state();
        delete(&state, ResourceKind::PurchaseOrders, "7", true).await;

        let view = state.view();
        let notice = view.notice.as_ref().unwrap();
        assert!(!notice.success);
        assert!(notice.message.starts_with("Error deleting purchase order: "));
    }

    #[tokio::test]
    async fn edit_modal_prefills_from_the_backend() {
        let state = mock_state().await;
        let draft = Draft::Supplier(SupplierDraft {
            name: "Acme".to_string(),
            address: "1 Industrial Way".to_string(),
            email: "sales@acme.test".to_string(),
            phone: vec!["555-1111".to_string()],
        });
        submit(&state, draft, None).await;
        let id = {
            let rows = rendered_rows(&state, ResourceKind::Suppliers);
            fields::text(&rows[0], ResourceKind::Suppliers.id_keys())
        };

        open_edit_modal(&state, ResourceKind::Suppliers, &id).await;

        let view = state.view();
        match &view.modal {
            ModalState::Open {
                kind,
                record_id,
                prefill,
            } => {
                assert_eq!(*kind, ResourceKind::Suppliers);
                assert_eq!(record_id.as_deref(), Some(id.as_str()));
                assert_eq!(prefill.as_ref().unwrap()["name"], "Acme");
            }
            other => panic!("expected open modal, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn switching_to_an_unknown_page_loads_nothing() {
        let state = dead_state();
        assert!(switch_page(&state, "reports").await.is_none());

        let view = state.view();
        assert_eq!(view.page(), Page::Dashboard);
        // No screen was touched by the failed navigation.
        for kind in ResourceKind::ALL {
            assert_eq!(*view.screen(kind), ScreenState::Idle);
        }
    }
}
