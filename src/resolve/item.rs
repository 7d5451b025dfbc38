use std::path::PathBuf;

use crate::props::PropertyBag;
use crate::resolve::error::{NotFound, ResolveResult, PROJECT_ITEM_PATH};

/// The single key a project item's path is read from.
const FULL_PATH_KEY: &str = "FullPath";

/// Resolve a project item's path from its property bag.
///
/// Items are always resolved as files; there is no directory disambiguation.
/// An absent `FullPath` key is `NotFound`.
pub fn resolve(bag: &PropertyBag) -> ResolveResult<PathBuf> {
    bag.text(FULL_PATH_KEY)
        .map(PathBuf::from)
        .ok_or(NotFound::new(PROJECT_ITEM_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::PropertyValue;

    #[test]
    fn full_path_resolves_as_is() {
        let bag: PropertyBag = [(
            "FullPath".to_string(),
            PropertyValue::Text("/proj/src/main.c".to_string()),
        )]
        .into_iter()
        .collect();
        let got = resolve(&bag).unwrap();
        assert_eq!(got, PathBuf::from("/proj/src/main.c"));
    }

    #[test]
    fn missing_full_path_is_not_found() {
        let err = resolve(&PropertyBag::default()).unwrap_err();
        assert_eq!(err.context(), "the project item full path");
    }
}
