//! SonarQube generic issue import format (`sonarQubeGenericIssueData`).

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct IssueReport {
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub rule_id: String,
    /// Free-form on purpose: unknown or missing severities are not an error.
    #[serde(default)]
    pub severity: Option<String>,
    pub primary_location: PrimaryLocation,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryLocation {
    pub file_path: String,
    pub message: String,
    pub text_range: TextRange,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRange {
    pub start_line: u64,
    #[serde(default)]
    pub end_line: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_accepts_null_severity_and_extra_keys() {
        let report: IssueReport = serde_json::from_str(
            r#"{"issues":[{
                "engineId":"dscanner",
                "ruleId":"dscanner.style.phobos_naming_convention",
                "severity":null,
                "type":"CODE_SMELL",
                "primaryLocation":{
                    "message":"name",
                    "filePath":"src/a.d",
                    "textRange":{"startLine":3,"endLine":3,"startColumn":1}
                }
            }]}"#,
        )
        .expect("issue report should parse");

        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].severity.is_none());
        assert_eq!(report.issues[0].primary_location.text_range.end_line, Some(3));
    }

    #[test]
    fn issue_requires_primary_location() {
        let parsed = serde_json::from_str::<IssueReport>(
            r#"{"issues":[{"ruleId":"r","severity":"MAJOR"}]}"#,
        );
        assert!(parsed.is_err());
    }
}
