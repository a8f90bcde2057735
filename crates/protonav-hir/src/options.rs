use serde::{Deserialize, Serialize};

/// The generated-Java naming convention a file opts into.
///
/// Absent options mean the modern convention; files still on the legacy API
/// may have generated code in either convention while a migration is in
/// flight, so the selector unions both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiVersion {
    V1,
    #[default]
    V2,
}

/// Java generation options carried by a proto file.
///
/// These mirror the file-level options the Java code generator consumes
/// (`java_package`, `java_outer_classname`, `java_multiple_files`). They are
/// produced by the external parser; serde derives let hosts carry them
/// through their own config plumbing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JavaOptions {
    /// Overrides the proto package as the Java package.
    pub java_package: Option<String>,
    /// Explicit outer wrapper class name; derived from the file name when
    /// absent.
    pub java_outer_classname: Option<String>,
    /// When set, top-level types are emitted as their own files instead of
    /// being nested in the outer class.
    pub java_multiple_files: bool,
    /// Naming convention identifier.
    pub api_version: ApiVersion,
}
