use thiserror::Error;

/// The single error kind produced by path resolution.
///
/// Raised whenever a required candidate key is absent from a property bag, a
/// resolved candidate fails a validity check (missing parent directory,
/// missing secondary file-name key), or no selected entity yields a usable
/// path. Carries a short context describing what could not be found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unable to find {context}")]
pub struct NotFound {
    context: &'static str,
}

impl NotFound {
    pub(crate) fn new(context: &'static str) -> Self {
        NotFound { context }
    }

    /// Short description of what was missing.
    pub fn context(&self) -> &str {
        self.context
    }
}

pub type ResolveResult<T> = Result<T, NotFound>;

// Context strings shared across resolvers. One per failure site the host
// model can produce.
pub(crate) const SELECTED_ITEM_PATH: &str = "the path for the selected item";
pub(crate) const PROJECT_PATH: &str = "the project path";
pub(crate) const PROJECT_OUTPUT_PATH: &str = "the project output path";
pub(crate) const PROJECT_ITEM_PATH: &str = "the project item full path";
pub(crate) const ACTIVE_CONFIGURATION: &str = "the active configuration";
pub(crate) const EXISTING_ANCESTOR: &str = "an existing ancestor directory";
