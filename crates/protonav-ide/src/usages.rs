use protonav_hir::{ProtoFile, SymbolId};
use protonav_java_index::{JavaElement, JavaIndex};

use crate::convert::ProtoToJavaConverter;

/// Anything a find-usages action can be anchored on.
#[derive(Clone, Copy)]
pub enum UsageTarget<'a> {
    Proto(&'a ProtoFile, SymbolId),
    Java(JavaElement),
}

/// Whether a target can contribute additional search elements. Only proto
/// symbols can: this integration handles the proto → Java direction only.
#[must_use]
pub fn can_find_usages(target: &UsageTarget<'_>) -> bool {
    matches!(target, UsageTarget::Proto(..))
}

/// A usages search anchored on a proto symbol, widened with the Java
/// elements its generated code occupies.
pub struct UsagesHandler<'a> {
    file: &'a ProtoFile,
    root: SymbolId,
    secondary: Vec<JavaElement>,
}

impl<'a> UsagesHandler<'a> {
    #[must_use]
    pub fn file(&self) -> &'a ProtoFile {
        self.file
    }

    /// The proto symbol the search is anchored on.
    #[must_use]
    pub fn root(&self) -> SymbolId {
        self.root
    }

    /// Resolved Java elements searched alongside the root symbol.
    #[must_use]
    pub fn secondary_elements(&self) -> &[JavaElement] {
        &self.secondary
    }
}

/// Builds the handler for a find-usages action on `symbol`.
///
/// Returns `None` for highlight-only sessions — the editor showing a proto
/// file cannot usefully display Java elements in the same view — and when
/// no generated code resolves, in which case the host runs its ordinary
/// unaugmented search.
pub fn create_find_usages_handler<'a>(
    file: &'a ProtoFile,
    index: &dyn JavaIndex,
    symbol: SymbolId,
    for_highlight_usages: bool,
) -> Option<UsagesHandler<'a>> {
    if for_highlight_usages {
        return None;
    }
    let converter = ProtoToJavaConverter::new(file, index);
    let secondary = converter.convert(symbol)?;
    Some(UsagesHandler {
        file,
        root: symbol,
        secondary,
    })
}
