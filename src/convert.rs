//! Converts SonarQube generic issue data into a SARIF log.

use crate::document;
use crate::error::Result;
use crate::paths;
use crate::provider::scanner::semantic_version;
use crate::provider::{GitInfo, VersionProvider};
use crate::types::sarif::{
    ArtifactLocation, Conversion, Driver, Invocation, Level, Location, Message, PhysicalLocation,
    Region, Run, SarifLog, SarifResult, Tool, VersionControlDetails,
};
use crate::types::sonar::{Issue, IssueReport};
use std::path::Path;
use tracing::info;

pub const DOCUMENT_KIND: &str = "issue report";

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub base_dir: Option<String>,
    pub git_repo_url: Option<String>,
    /// Recorded verbatim as `conversion.invocation.commandLine`.
    pub command_line: String,
    pub scanner_name: String,
    pub conversion_tool: String,
}

/// `MINOR` is a note, everything else (including unknown or missing
/// severities) is a warning.
pub fn level_for_severity(severity: Option<&str>) -> Level {
    match severity {
        Some("MINOR") => Level::Note,
        Some("MAJOR") => Level::Warning,
        _ => Level::Warning,
    }
}

/// Maps issues to results in input order; location ids count up from 0.
pub fn convert_issues(issues: &[Issue], base_dir: Option<&str>) -> Vec<SarifResult> {
    issues
        .iter()
        .zip(0u64..)
        .map(|(issue, id)| {
            let location = &issue.primary_location;
            SarifResult {
                rule_id: issue.rule_id.clone(),
                level: level_for_severity(issue.severity.as_deref()),
                message: Message {
                    text: location.message.clone(),
                },
                locations: vec![Location {
                    id,
                    physical_location: PhysicalLocation {
                        artifact_location: ArtifactLocation {
                            uri: paths::rebase(base_dir, &location.file_path),
                        },
                        region: Region {
                            start_line: location.text_range.start_line,
                            end_line: location.text_range.end_line,
                        },
                    },
                }],
            }
        })
        .collect()
}

pub fn convert(
    report: &IssueReport,
    options: &ConvertOptions,
    version: &dyn VersionProvider,
    git: &dyn GitInfo,
) -> Result<SarifLog> {
    let results = convert_issues(&report.issues, options.base_dir.as_deref());

    let scanner_version = version.scanner_version()?;
    let driver = Driver {
        name: options.scanner_name.clone(),
        semantic_version: Some(semantic_version(&scanner_version).to_string()),
        version: Some(scanner_version),
    };

    let version_control_provenance = match &options.git_repo_url {
        Some(repository_uri) => vec![VersionControlDetails {
            repository_uri: repository_uri.clone(),
            revision_id: git.commit_sha()?.trim().to_string(),
            branch: git.branch()?.trim().to_string(),
        }],
        None => Vec::new(),
    };

    let run = Run {
        tool: Tool { driver },
        conversion: Conversion {
            tool: Tool {
                driver: Driver::named(options.conversion_tool.clone()),
            },
            invocation: Invocation {
                command_line: options.command_line.clone(),
                execution_successful: true,
            },
        },
        version_control_provenance,
        results,
    };
    Ok(SarifLog::new(vec![run]))
}

/// Converts `in_file` into `out_file`. An existing `out_file` is only replaced
/// with `force`; that check runs before anything is read.
pub fn convert_file(
    in_file: &Path,
    out_file: &Path,
    force: bool,
    options: &ConvertOptions,
    version: &dyn VersionProvider,
    git: &dyn GitInfo,
) -> Result<usize> {
    document::ensure_writable(out_file, force)?;
    let report: IssueReport = document::read_json(in_file, DOCUMENT_KIND)?;
    let log = convert(&report, options, version, git)?;
    document::write_json(out_file, &log)?;

    let converted: usize = log.runs.iter().map(|run| run.results.len()).sum();
    info!(
        in_file = %in_file.display(),
        out_file = %out_file.display(),
        converted,
        "converted issue report to SARIF"
    );
    Ok(converted)
}
