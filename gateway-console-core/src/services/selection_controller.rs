//! Selection <-> URL synchronization
//!
//! The controller owns the editor's selection and keeps it bound to the
//! `name` query parameter in both directions: `select` writes the URL, and
//! external navigation comes back through the observer subscription. After
//! any call the selection and the parameter agree.

use std::sync::{Arc, PoisonError, RwLock, Weak};

use crate::traits::{UrlObserver, UrlParams, UrlState};
use crate::types::Selection;

/// Query parameter carrying the selected resource name
pub const RESOURCE_PARAM: &str = "name";

/// Selection controller bound to a `UrlState`
pub struct SelectionController {
    url_state: Arc<dyn UrlState>,
    selection: RwLock<Selection>,
}

impl SelectionController {
    /// Attach a controller to a URL state.
    ///
    /// The initial selection comes from the current `name` parameter (the
    /// sentinel when it is missing or empty), and the controller subscribes
    /// itself weakly for external changes.
    #[must_use]
    pub fn attach(url_state: Arc<dyn UrlState>) -> Arc<Self> {
        let initial = Selection::from_param(url_state.get(RESOURCE_PARAM).as_deref());
        let controller = Arc::new(Self {
            url_state: Arc::clone(&url_state),
            selection: RwLock::new(initial),
        });

        let observer: Weak<Self> = Arc::downgrade(&controller);
        url_state.subscribe(observer);
        controller
    }

    /// Current selection
    #[must_use]
    pub fn current(&self) -> Selection {
        self.selection
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Change the selection and reflect it into the URL.
    ///
    /// The sentinel removes the `name` parameter, a named selection sets it.
    /// The local state is written first, so the re-entrant notification from
    /// the controller's own URL write observes the value it is about to
    /// recompute.
    pub fn select(&self, selection: &Selection) {
        {
            let mut current = self
                .selection
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *current = selection.clone();
        }

        match selection {
            Selection::New => self.url_state.remove(RESOURCE_PARAM),
            Selection::Named(name) => self.url_state.set(RESOURCE_PARAM, name),
        }
    }
}

impl UrlObserver for SelectionController {
    fn url_changed(&self, params: &UrlParams) {
        let next = Selection::from_param(params.get(RESOURCE_PARAM).map(String::as_str));
        let mut current = self
            .selection
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if *current != next {
            log::debug!("Selection follows URL change: {}", next.as_name());
            *current = next;
        }
    }
}
