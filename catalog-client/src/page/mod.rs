//! Page-level controllers
//!
//! Each page owns its own state and error message. Nothing is escalated
//! beyond the page: failures end in [`LoadState::Failed`] with a message
//! fit for inline display.

mod catalogs;
mod dashboard;
mod products;
mod viewer;

pub use catalogs::CatalogsPage;
pub use dashboard::Dashboard;
pub use products::ProductsPage;
pub use viewer::CatalogViewer;

/// Load status of a page; replaces deferred initialization with an explicit flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
