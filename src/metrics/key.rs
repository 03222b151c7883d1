//! Metric keys
//!
//! The closed vocabulary of metric identifiers understood by the analysis
//! backend. The string values are wire identifiers: renaming one is a
//! breaking change for every consumer that stores or requests metrics by key.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::OnboardingError;

/// Macro to generate the metric key enum together with its wire values
macro_rules! define_metric_keys {
    ($($variant:ident => $wire:literal,)+) => {
        /// Identifier of a metric reported by the analysis backend
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum MetricKey {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl MetricKey {
            /// Every declared key, in wire-value order
            pub const ALL: &'static [MetricKey] = &[$(MetricKey::$variant,)+];

            /// The wire identifier for this key
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(MetricKey::$variant => $wire,)+
                }
            }
        }
    };
}

define_metric_keys! {
    AlertStatus => "alert_status",
    BlockerViolations => "blocker_violations",
    BranchCoverage => "branch_coverage",
    Bugs => "bugs",
    BurnedBudget => "burned_budget",
    BusinessValue => "business_value",
    ClassComplexity => "class_complexity",
    Classes => "classes",
    CodeSmells => "code_smells",
    CognitiveComplexity => "cognitive_complexity",
    CommentLines => "comment_lines",
    CommentLinesData => "comment_lines_data",
    CommentLinesDensity => "comment_lines_density",
    Complexity => "complexity",
    ComplexityInClasses => "complexity_in_classes",
    ComplexityInFunctions => "complexity_in_functions",
    ConditionsToCover => "conditions_to_cover",
    ConfirmedIssues => "confirmed_issues",
    Coverage => "coverage",
    CriticalViolations => "critical_violations",
    DevelopmentCost => "development_cost",
    Directories => "directories",
    DuplicatedBlocks => "duplicated_blocks",
    DuplicatedFiles => "duplicated_files",
    DuplicatedLines => "duplicated_lines",
    DuplicatedLinesDensity => "duplicated_lines_density",
    DuplicationsData => "duplications_data",
    EffortToReachMaintainabilityRatingA => "effort_to_reach_maintainability_rating_a",
    ExecutableLinesData => "executable_lines_data",
    FalsePositiveIssues => "false_positive_issues",
    FileComplexity => "file_complexity",
    FileComplexityDistribution => "file_complexity_distribution",
    FilenameSize => "filename_size",
    FilenameSizeRating => "filename_size_rating",
    Files => "files",
    FunctionComplexity => "function_complexity",
    FunctionComplexityDistribution => "function_complexity_distribution",
    Functions => "functions",
    GeneratedLines => "generated_lines",
    GeneratedNcloc => "generated_ncloc",
    InfoViolations => "info_violations",
    LastChangeOnMaintainabilityRating => "last_change_on_maintainability_rating",
    LastChangeOnReleasabilityRating => "last_change_on_releasability_rating",
    LastChangeOnReliabilityRating => "last_change_on_reliability_rating",
    LastChangeOnSecurityRating => "last_change_on_security_rating",
    LastChangeOnSecurityReviewRating => "last_change_on_security_review_rating",
    LastCommitDate => "last_commit_date",
    LeakProjects => "leak_projects",
    LineCoverage => "line_coverage",
    Lines => "lines",
    LinesToCover => "lines_to_cover",
    MaintainabilityRatingEffort => "maintainability_rating_effort",
    MajorViolations => "major_violations",
    MinorViolations => "minor_violations",
    Ncloc => "ncloc",
    NclocData => "ncloc_data",
    NclocLanguageDistribution => "ncloc_language_distribution",
    NewBlockerViolations => "new_blocker_violations",
    NewBranchCoverage => "new_branch_coverage",
    NewBugs => "new_bugs",
    NewCodeSmells => "new_code_smells",
    NewConditionsToCover => "new_conditions_to_cover",
    NewCoverage => "new_coverage",
    NewCriticalViolations => "new_critical_violations",
    NewDevelopmentCost => "new_development_cost",
    NewDuplicatedBlocks => "new_duplicated_blocks",
    NewDuplicatedLines => "new_duplicated_lines",
    NewDuplicatedLinesDensity => "new_duplicated_lines_density",
    NewInfoViolations => "new_info_violations",
    NewLineCoverage => "new_line_coverage",
    NewLines => "new_lines",
    NewLinesToCover => "new_lines_to_cover",
    NewMaintainabilityRating => "new_maintainability_rating",
    NewMajorViolations => "new_major_violations",
    NewMinorViolations => "new_minor_violations",
    NewReliabilityRating => "new_reliability_rating",
    NewReliabilityRemediationEffort => "new_reliability_remediation_effort",
    NewSecurityHotspots => "new_security_hotspots",
    NewSecurityHotspotsReviewed => "new_security_hotspots_reviewed",
    NewSecurityRating => "new_security_rating",
    NewSecurityRemediationEffort => "new_security_remediation_effort",
    NewSecurityReviewRating => "new_security_review_rating",
    NewSqaleDebtRatio => "new_sqale_debt_ratio",
    NewTechnicalDebt => "new_technical_debt",
    NewUncoveredConditions => "new_uncovered_conditions",
    NewUncoveredLines => "new_uncovered_lines",
    NewViolations => "new_violations",
    NewVulnerabilities => "new_vulnerabilities",
    OpenIssues => "open_issues",
    Projects => "projects",
    PublicApi => "public_api",
    PublicDocumentedApiDensity => "public_documented_api_density",
    PublicUndocumentedApi => "public_undocumented_api",
    QualityGateDetails => "quality_gate_details",
    QualityProfiles => "quality_profiles",
    ReleasabilityEffort => "releasability_effort",
    ReleasabilityRating => "releasability_rating",
    ReliabilityRating => "reliability_rating",
    ReliabilityRatingEffort => "reliability_rating_effort",
    ReliabilityRemediationEffort => "reliability_remediation_effort",
    ReopenedIssues => "reopened_issues",
    SecurityHotspots => "security_hotspots",
    SecurityHotspotsReviewed => "security_hotspots_reviewed",
    SecurityRating => "security_rating",
    SecurityRatingEffort => "security_rating_effort",
    SecurityRemediationEffort => "security_remediation_effort",
    SecurityReviewRating => "security_review_rating",
    SecurityReviewRatingEffort => "security_review_rating_effort",
    SkippedTests => "skipped_tests",
    SonarjavaFeedback => "sonarjava_feedback",
    SqaleDebtRatio => "sqale_debt_ratio",
    SqaleIndex => "sqale_index",
    SqaleRating => "sqale_rating",
    Statements => "statements",
    TeamAtSonarsource => "team_at_sonarsource",
    TeamSize => "team_size",
    TestErrors => "test_errors",
    TestExecutionTime => "test_execution_time",
    TestFailures => "test_failures",
    TestSuccessDensity => "test_success_density",
    Tests => "tests",
    UncoveredConditions => "uncovered_conditions",
    UncoveredLines => "uncovered_lines",
    Violations => "violations",
    Vulnerabilities => "vulnerabilities",
    WontFixIssues => "wont_fix_issues",
}

static KEYS_BY_WIRE: Lazy<HashMap<&'static str, MetricKey>> = Lazy::new(|| {
    MetricKey::ALL
        .iter()
        .map(|key| (key.as_str(), *key))
        .collect()
});

/// Returns true iff `candidate` is exactly one of the declared metric keys.
///
/// Matching is case-sensitive and does no normalization.
pub fn is_metric_key(candidate: &str) -> bool {
    KEYS_BY_WIRE.contains_key(candidate)
}

impl MetricKey {
    /// Look up a key by its exact wire identifier
    pub fn parse(s: &str) -> Option<Self> {
        KEYS_BY_WIRE.get(s).copied()
    }

    /// Whether this metric is computed on the new-code period only
    pub fn is_new_code(&self) -> bool {
        self.as_str().starts_with("new_")
    }

    /// The overall-code counterpart of a new-code metric, if the catalog declares one
    pub fn overall(&self) -> Option<Self> {
        self.as_str().strip_prefix("new_").and_then(Self::parse)
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKey {
    type Err = OnboardingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| OnboardingError::metric_not_found(s))
    }
}

impl AsRef<str> for MetricKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
