use protonav_hir::{ApiVersion, ProtoFile};

use crate::generator::NameGenerator;
use crate::immutable::ImmutableNameGenerator;
use crate::legacy::LegacyNameGenerator;

/// The generators whose naming conventions apply to `file`, in a
/// deterministic order.
///
/// Files without an explicit api version get the modern convention. Files
/// still declaring the legacy version get both: while a migration is in
/// flight, generated code may exist in either convention, so candidates are
/// unioned rather than prioritized. The order only pins down result order
/// for tests; membership is what matters.
pub fn select_for_file(file: &ProtoFile) -> Vec<Box<dyn NameGenerator + '_>> {
    let generators: Vec<Box<dyn NameGenerator + '_>> = match file.options().api_version {
        ApiVersion::V1 => vec![
            Box::new(LegacyNameGenerator::new(file)),
            Box::new(ImmutableNameGenerator::new(file)),
        ],
        ApiVersion::V2 => vec![Box::new(ImmutableNameGenerator::new(file))],
    };
    tracing::debug!(
        file = file.file_name(),
        api_version = ?file.options().api_version,
        count = generators.len(),
        "selected name generators"
    );
    generators
}
