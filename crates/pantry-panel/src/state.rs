//! Panel view-model and shared application state.
//!
//! UI state lives here as plain data (the visible page, each screen's
//! load state, the modal, and the pending notice) instead of being
//! encoded in rendered markup. Rendering reads this model; the controller
//! mutates it. A new screen state always replaces the old one wholesale,
//! so if two loads race the one that settles last owns the screen.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use pantry_api::{Accessors, DashboardCounts};
use pantry_core::ResourceKind;
use serde_json::Value;

/// The pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Resource(ResourceKind),
}

impl Page {
    /// Every page, in navigation order.
    pub const fn all() -> [Page; 8] {
        [
            Page::Dashboard,
            Page::Resource(ResourceKind::Customers),
            Page::Resource(ResourceKind::Products),
            Page::Resource(ResourceKind::Suppliers),
            Page::Resource(ResourceKind::Employees),
            Page::Resource(ResourceKind::Invoices),
            Page::Resource(ResourceKind::PurchaseOrders),
            Page::Resource(ResourceKind::OrderDetails),
        ]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Resource(kind) => kind.path_segment(),
        }
    }

    /// Parse a navigation slug. Unrecognized names yield `None`.
    pub fn from_slug(slug: &str) -> Option<Page> {
        if slug == "dashboard" {
            return Some(Page::Dashboard);
        }
        ResourceKind::from_segment(slug).map(Page::Resource)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Resource(kind) => kind.title(),
        }
    }

    pub fn resource(&self) -> Option<ResourceKind> {
        match self {
            Page::Dashboard => None,
            Page::Resource(kind) => Some(*kind),
        }
    }
}

/// Load state of one resource screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScreenState {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    /// A list request is in flight.
    Loading,
    /// The list arrived; may be empty.
    Rendered(Vec<Value>),
    /// The list request failed.
    Failed,
}

/// Create/edit modal lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        kind: ResourceKind,
        /// Present when editing; submission updates instead of creating.
        record_id: Option<String>,
        /// The fetched record backing an edit form's initial values.
        prefill: Option<Value>,
    },
}

/// A blocking message the operator must dismiss, mirroring the alert the
/// backend mutations used to raise.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub success: bool,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

/// The whole panel UI as data.
#[derive(Debug)]
pub struct ViewModel {
    page: Page,
    screens: HashMap<ResourceKind, ScreenState>,
    pub counts: DashboardCounts,
    pub modal: ModalState,
    pub notice: Option<Notice>,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self {
            page: Page::Dashboard,
            screens: HashMap::new(),
            counts: DashboardCounts::default(),
            modal: ModalState::default(),
            notice: None,
        }
    }
}

impl ViewModel {
    /// The currently visible page.
    pub fn page(&self) -> Page {
        self.page
    }

    /// Switch to the named page. Unrecognized names leave the visible
    /// page unchanged and return `None`.
    pub fn switch_page(&mut self, slug: &str) -> Option<Page> {
        let page = Page::from_slug(slug)?;
        self.page = page;
        Some(page)
    }

    pub fn screen(&self, kind: ResourceKind) -> &ScreenState {
        static IDLE: ScreenState = ScreenState::Idle;
        self.screens.get(&kind).unwrap_or(&IDLE)
    }

    /// Replace a screen's state wholesale.
    pub fn set_screen(&mut self, kind: ResourceKind, state: ScreenState) {
        self.screens.insert(kind, state);
    }
}

/// Shared application state for the panel.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    view: RwLock<ViewModel>,
    accessors: Accessors,
}

impl AppState {
    /// Create panel state around the injected accessors.
    pub fn new(accessors: Accessors) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                view: RwLock::new(ViewModel::default()),
                accessors,
            }),
        }
    }

    /// Read access to the view-model.
    pub fn view(&self) -> RwLockReadGuard<'_, ViewModel> {
        self.inner.view.read().unwrap()
    }

    /// Write access to the view-model. Never held across an await.
    pub fn view_mut(&self) -> RwLockWriteGuard<'_, ViewModel> {
        self.inner.view.write().unwrap()
    }

    pub fn accessors(&self) -> &Accessors {
        &self.inner.accessors
    }
}
