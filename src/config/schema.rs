//! Configuration data structures for jarhook.
//!
//! Defines the YAML config format: the active pipeline profile, repository
//! layout paths, external tool names, and signing parameters. Designed for
//! multi-source loading with serde.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Root configuration for jarhook.
///
/// Loaded from `.jarhook.yaml`, environment variables, and CLI flags.
/// Multiple sources are merged with well-defined priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Config format version (currently "1.0").
    #[serde(default = "default_version")]
    pub version: String,

    /// Active pipeline profile.
    #[serde(default = "default_profile")]
    pub profile: ProfileName,

    /// Repository layout paths, all relative to the repository root.
    #[serde(default)]
    pub paths: PathsConfig,

    /// The packaged artifact.
    #[serde(default)]
    pub artifact: ArtifactConfig,

    /// Version-marker bump settings.
    #[serde(default)]
    pub bump: BumpConfig,

    /// External tool names (overridable for non-standard installs and tests).
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Jar signing parameters.
    #[serde(default)]
    pub signing: SigningConfig,

    /// Source tree settings.
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Hook installer settings.
    #[serde(default)]
    pub hooks: HooksConfig,

    /// Documentation generation settings.
    #[serde(default)]
    pub docs: DocsConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            profile: ProfileName::Classic,
            paths: PathsConfig::default(),
            artifact: ArtifactConfig::default(),
            bump: BumpConfig::default(),
            tools: ToolsConfig::default(),
            signing: SigningConfig::default(),
            sources: SourcesConfig::default(),
            hooks: HooksConfig::default(),
            docs: DocsConfig::default(),
        }
    }
}

impl BuildConfig {
    /// File name of the primary packaged artifact, e.g. `library.jar`.
    pub fn jar_name(&self) -> String {
        format!("{}.jar", self.artifact.name)
    }

    /// File name of the documentation archive, e.g. `library-javadoc.jar`.
    pub fn javadoc_jar_name(&self) -> String {
        format!("{}-javadoc.jar", self.artifact.name)
    }

    /// File name of the sources archive, e.g. `library-sources.jar`.
    pub fn sources_jar_name(&self) -> String {
        format!("{}-sources.jar", self.artifact.name)
    }
}

// ---------------------------------------------------------------------------
// ProfileName
// ---------------------------------------------------------------------------

/// Named pipeline profiles that control which stages run.
///
/// The observed hook revisions differ in which stages are present; each
/// revision maps to an independent profile rather than a single canonical
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileName {
    /// Compile, package, and stage — the minimal pre-commit build.
    Classic,
    /// Classic plus version bump, signing, and javadoc.
    Release,
    /// Delegate compile+package+docs to the external build tool.
    Maven,
}

impl ProfileName {
    /// Parse from a loose string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Some(Self::Classic),
            "release" => Some(Self::Release),
            "maven" => Some(Self::Maven),
            _ => None,
        }
    }

    /// Canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Release => "release",
            Self::Maven => "maven",
        }
    }
}

impl std::fmt::Display for ProfileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PathsConfig
// ---------------------------------------------------------------------------

/// Repository layout, relative to the repository root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Java sources tree.
    #[serde(default = "default_sources_dir")]
    pub sources_dir: String,

    /// Scratch directory the compiler writes class files into. Created by
    /// the compile stage and removed after packaging.
    #[serde(default = "default_scratch_dir")]
    pub scratch_dir: String,

    /// Fixed-name license file copied into the artifact.
    #[serde(default = "default_license_file")]
    pub license_file: String,

    /// Directory holding the hook shims installed into `.git/hooks`.
    #[serde(default = "default_hooks_dir")]
    pub hooks_dir: String,

    /// Generated documentation directory.
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,

    /// Output directory of the delegated build tool.
    #[serde(default = "default_build_output_dir")]
    pub build_output_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            sources_dir: default_sources_dir(),
            scratch_dir: default_scratch_dir(),
            license_file: default_license_file(),
            hooks_dir: default_hooks_dir(),
            docs_dir: default_docs_dir(),
            build_output_dir: default_build_output_dir(),
        }
    }
}

// ---------------------------------------------------------------------------
// ArtifactConfig
// ---------------------------------------------------------------------------

/// Naming of the packaged artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Base name: the primary artifact is `{name}.jar`, documentation is
    /// `{name}-javadoc.jar`, sources are `{name}-sources.jar`.
    #[serde(default = "default_artifact_name")]
    pub name: String,

    /// Optional manifest file packed into the jar (`jar -cfm`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            name: default_artifact_name(),
            manifest: None,
        }
    }
}

// ---------------------------------------------------------------------------
// BumpConfig
// ---------------------------------------------------------------------------

/// Which file and key the version-bump stage rewrites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BumpConfig {
    /// Properties or manifest file holding the version marker.
    #[serde(default = "default_bump_file")]
    pub file: String,

    /// Key prefix of the marker line (`key=value` or `key: value`).
    #[serde(default = "default_bump_key")]
    pub key: String,
}

impl Default for BumpConfig {
    fn default() -> Self {
        Self {
            file: default_bump_file(),
            key: default_bump_key(),
        }
    }
}

// ---------------------------------------------------------------------------
// ToolsConfig
// ---------------------------------------------------------------------------

/// External tool names. Overridable so tests can substitute stubs and so
/// non-standard installations can point at absolute paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_compiler")]
    pub compiler: String,

    #[serde(default = "default_archiver")]
    pub archiver: String,

    #[serde(default = "default_signer")]
    pub signer: String,

    #[serde(default = "default_doc_generator")]
    pub doc_generator: String,

    /// Delegated build tool used by the `maven` profile.
    #[serde(default = "default_build_tool")]
    pub build_tool: String,

    /// Arguments passed to the delegated build tool.
    #[serde(default = "default_build_args")]
    pub build_args: Vec<String>,

    #[serde(default = "default_git")]
    pub git: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            compiler: default_compiler(),
            archiver: default_archiver(),
            signer: default_signer(),
            doc_generator: default_doc_generator(),
            build_tool: default_build_tool(),
            build_args: default_build_args(),
            git: default_git(),
        }
    }
}

// ---------------------------------------------------------------------------
// SigningConfig
// ---------------------------------------------------------------------------

/// Jar signing parameters. The storepass file gates the whole pipeline:
/// when the active profile signs and this file is absent, the builder
/// performs no work at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigningConfig {
    /// Keystore file, relative to the repository root.
    #[serde(default = "default_keystore")]
    pub keystore: String,

    /// One-line secret file. Read once, never logged.
    #[serde(default = "default_storepass_file")]
    pub storepass_file: String,

    /// Key alias inside the keystore.
    #[serde(default = "default_alias")]
    pub alias: String,
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            keystore: default_keystore(),
            storepass_file: default_storepass_file(),
            alias: default_alias(),
        }
    }
}

// ---------------------------------------------------------------------------
// SourcesConfig
// ---------------------------------------------------------------------------

/// Source tree settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Extension (without dot) identifying compilable sources.
    #[serde(default = "default_source_extension")]
    pub extension: String,

    /// Filenames the resource-copy stage ignores.
    #[serde(default = "default_resource_ignore")]
    pub resource_ignore: Vec<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            extension: default_source_extension(),
            resource_ignore: default_resource_ignore(),
        }
    }
}

// ---------------------------------------------------------------------------
// HooksConfig
// ---------------------------------------------------------------------------

/// Hook installer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HooksConfig {
    /// Extension (without dot) of implementation sources living next to the
    /// hook shims; files with this extension are not installed.
    #[serde(default = "default_skip_extension")]
    pub skip_extension: String,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            skip_extension: default_skip_extension(),
        }
    }
}

// ---------------------------------------------------------------------------
// DocsConfig
// ---------------------------------------------------------------------------

/// Documentation generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Whether to archive the generated documentation directory into
    /// `{name}-javadoc.jar`.
    #[serde(default = "default_docs_archive")]
    pub archive: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            archive: default_docs_archive(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_version() -> String {
    "1.0".to_string()
}

fn default_profile() -> ProfileName {
    ProfileName::Classic
}

fn default_sources_dir() -> String {
    "src".to_string()
}

fn default_scratch_dir() -> String {
    "tmp".to_string()
}

fn default_license_file() -> String {
    "LICENSE".to_string()
}

fn default_hooks_dir() -> String {
    "git-hooks".to_string()
}

fn default_docs_dir() -> String {
    "javadoc".to_string()
}

fn default_build_output_dir() -> String {
    "target".to_string()
}

fn default_artifact_name() -> String {
    "library".to_string()
}

fn default_bump_file() -> String {
    "buildNumber.properties".to_string()
}

fn default_bump_key() -> String {
    "buildNumber".to_string()
}

fn default_compiler() -> String {
    "javac".to_string()
}

fn default_archiver() -> String {
    "jar".to_string()
}

fn default_signer() -> String {
    "jarsigner".to_string()
}

fn default_doc_generator() -> String {
    "javadoc".to_string()
}

fn default_build_tool() -> String {
    "mvn".to_string()
}

fn default_build_args() -> Vec<String> {
    vec!["package".to_string()]
}

fn default_git() -> String {
    "git".to_string()
}

fn default_keystore() -> String {
    "keystore.jks".to_string()
}

fn default_storepass_file() -> String {
    "keystore.pass".to_string()
}

fn default_alias() -> String {
    "release".to_string()
}

fn default_source_extension() -> String {
    "java".to_string()
}

fn default_resource_ignore() -> Vec<String> {
    vec![".directory".to_string()]
}

fn default_skip_extension() -> String {
    "py".to_string()
}

fn default_docs_archive() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
