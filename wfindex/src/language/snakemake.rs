//! Snakemake workflows laid out in the standardized repository structure.
//!
//! ```text
//! /
//! |-- README.md, LICENSE, .snakemake-workflow-catalog.yml
//! |-- workflow/
//! |   |-- Snakefile
//! |   |-- envs/ report/ rules/ schemas/ scripts/ notebooks/
//! |-- config/
//! |-- resources/
//! `-- .tests/
//! ```
//!
//! Only the folders above are scanned, one level deep. Files in deeper
//! user-defined directories (for example `workflow/scripts/utils/`) are not
//! indexed.

use crate::convention::ScanStep;
use crate::language::{IndexingRule, LanguagePolicy, SetRule};
use crate::metadata::MetadataRule;

pub const SHORT_NAME: &str = "SMK";
pub const LONG_NAME: &str = "Snakemake";
pub const INITIAL_PATH_PATTERN: &str = r"(?i)^/(workflow/)?snakefile$";

/// Catalog file whose presence at the repository root opts a workflow in.
pub const SNAKEMAKE_WORKFLOW_CATALOG_YML: &str = ".snakemake-workflow-catalog.yml";

/// Entry point inside the `workflow` folder; gates the nested folder scans.
pub const WORKFLOW_SNAKEFILE: &str = "/workflow/Snakefile";

/// Version hint recorded on the primary descriptor.
pub const PLACEHOLDER_VERSION: &str = "1.0";

pub const INVALID_INITIAL_PATH_MESSAGE: &str = "Invalid initial path: the primary descriptor must be a Snakefile at the repository root or in the workflow folder";
pub const MISSING_CATALOG_MESSAGE: &str =
    "Missing .snakemake-workflow-catalog.yml at the repository root";

/// Accepted primary descriptor paths, compared ignoring case.
pub const CANONICAL_INITIAL_PATHS: &[&str] = &["/Snakefile", WORKFLOW_SNAKEFILE];

/// Scan order for a Snakemake repository.
pub const CONVENTION: &[ScanStep] = &[
    // licenses, readmes, the catalog file
    ScanStep::root(),
    ScanStep::folder("workflow"),
    ScanStep::folder("workflow/envs").when_discovered(WORKFLOW_SNAKEFILE),
    ScanStep::folder("workflow/report").when_discovered(WORKFLOW_SNAKEFILE),
    ScanStep::folder("workflow/rules").when_discovered(WORKFLOW_SNAKEFILE),
    ScanStep::folder("workflow/schemas").when_discovered(WORKFLOW_SNAKEFILE),
    ScanStep::folder("workflow/scripts").when_discovered(WORKFLOW_SNAKEFILE),
    ScanStep::folder("workflow/notebooks").when_discovered(WORKFLOW_SNAKEFILE),
    ScanStep::folder("config"),
    ScanStep::folder("resources"),
    ScanStep::folder(".tests"),
];

/// # Errors
///
/// Returns an error if the built-in path pattern fails to compile.
pub fn policy() -> Result<LanguagePolicy, regex::Error> {
    Ok(LanguagePolicy::new(
        SHORT_NAME,
        LONG_NAME,
        INITIAL_PATH_PATTERN,
        IndexingRule::FolderConvention(CONVENTION),
    )?
    .with_primary_version(PLACEHOLDER_VERSION)
    .with_set_rule(SetRule::PathShape {
        canonical: CANONICAL_INITIAL_PATHS,
        message: INVALID_INITIAL_PATH_MESSAGE,
    })
    .with_set_rule(SetRule::MarkerFile {
        name: SNAKEMAKE_WORKFLOW_CATALOG_YML,
        message: MISSING_CATALOG_MESSAGE,
    })
    .with_metadata(MetadataRule::ColonSeparated))
}
