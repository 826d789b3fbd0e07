//! Domain model for the project roadmap.
//!
//! The phase table is fixed at compile time: nine phases of the pneumonia
//! detection project plan, never mutated at runtime. Everything derived from
//! it (progress counts, percentages) is recomputed on demand.

use ratatui::style::Color;

use crate::theme::colors;

/// Completion status of a phase (closed enumeration)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Completed,
    InProgress,
    Planned,
}

impl Status {
    /// Display label for the status badge
    pub fn label(&self) -> &'static str {
        match self {
            Status::Completed => "Completed",
            Status::InProgress => "In Progress",
            Status::Planned => "Planned",
        }
    }

    /// Badge color for the status. Exhaustive: no fallback arm exists.
    pub fn color(&self) -> Color {
        match self {
            Status::Completed => colors::STATUS_COMPLETED,
            Status::InProgress => colors::STATUS_IN_PROGRESS,
            Status::Planned => colors::STATUS_PLANNED,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Symbolic glyph reference carried by each phase.
///
/// Opaque to the core logic; only the renderer maps it to a terminal glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Search,
    FileText,
    Brain,
    Zap,
    Clock,
    Heart,
    Shield,
    BarChart3,
    FileCheck,
}

impl Icon {
    /// Single-width terminal glyph for this icon
    pub fn glyph(&self) -> char {
        match self {
            Icon::Search => '⌕',
            Icon::FileText => '▤',
            Icon::Brain => '◉',
            Icon::Zap => '↯',
            Icon::Clock => '◷',
            Icon::Heart => '♥',
            Icon::Shield => '◈',
            Icon::BarChart3 => '▥',
            Icon::FileCheck => '✔',
        }
    }
}

/// One stage of the project plan (immutable record)
#[derive(Debug, Clone, Copy)]
pub struct Phase {
    pub name: &'static str,
    /// Free-form display text, e.g. a week range
    pub duration: &'static str,
    pub status: Status,
    pub icon: Icon,
    /// Display order is meaningful for all three lists
    pub tasks: &'static [&'static str],
    pub deliverables: &'static [&'static str],
    /// Empty slice means the phase has no success metrics
    pub metrics: &'static [&'static str],
}

impl Phase {
    pub fn has_metrics(&self) -> bool {
        !self.metrics.is_empty()
    }
}

/// Aggregate counts derived from the phase list.
///
/// Recomputed from the phase table on every render; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub in_progress: usize,
    pub total: usize,
    /// Completion percentage, rounded to the nearest integer
    pub percent: u16,
}

impl ProgressSummary {
    /// Derive the summary from a phase list. Pure; an empty list reports 0%.
    pub fn from_phases(phases: &[Phase]) -> Self {
        let completed = phases
            .iter()
            .filter(|p| p.status == Status::Completed)
            .count();
        let in_progress = phases
            .iter()
            .filter(|p| p.status == Status::InProgress)
            .count();
        let total = phases.len();
        let percent = if total == 0 {
            0
        } else {
            (completed as f64 / total as f64 * 100.0).round() as u16
        };

        Self {
            completed,
            in_progress,
            total,
            percent,
        }
    }
}

/// Static page header text
pub const TITLE: &str = "Pneumonia Detector: Deep Learning Project Timeline";
pub const SUBTITLE: &str =
    "Advanced Pneumonia Detection System Development and Deployment Timeline";

/// The project plan. Fixed at definition time, never mutated.
pub const PHASES: &[Phase] = &[
    Phase {
        name: "Data Collection and Exploration",
        duration: "Weeks 1-4",
        status: Status::Completed,
        icon: Icon::Search,
        tasks: &[
            "Dataset integration (NIH ChestX-ray14, CheXpert)",
            "Initial data quality assessment",
            "Population demographics analysis",
        ],
        deliverables: &[
            "Compiled dataset",
            "EDA report",
            "Data quality assessment report",
        ],
        metrics: &[
            "Dataset size > 300,000 images",
            "Balanced demographic distribution",
            "Complete metadata availability",
        ],
    },
    Phase {
        name: "Data Preprocessing",
        duration: "Weeks 5-8",
        status: Status::InProgress,
        icon: Icon::FileText,
        tasks: &[
            "Quality control protocol implementation",
            "Image standardization pipeline",
            "Data augmentation setup",
        ],
        deliverables: &[
            "Preprocessing pipeline",
            "Quality control documentation",
            "Augmentation strategy",
        ],
        metrics: &["Quality Score > 0.95/1.0", "SNR > 15dB", "Artifact rate < 2%"],
    },
    Phase {
        name: "Model Selection and Development",
        duration: "Weeks 9-12",
        status: Status::Planned,
        icon: Icon::Brain,
        tasks: &[
            "Architecture evaluation",
            "Model implementation",
            "Initial testing setup",
        ],
        deliverables: &[
            "Model architecture document",
            "Implementation codebase",
            "Testing framework",
        ],
        metrics: &[
            "Model complexity assessment",
            "Initial accuracy > 85%",
            "Training time < 24h",
        ],
    },
    Phase {
        name: "Model Training & Validation",
        duration: "Weeks 13-16",
        status: Status::Planned,
        icon: Icon::Zap,
        tasks: &[
            "Training pipeline setup",
            "Cross-validation implementation",
            "Performance optimization",
        ],
        deliverables: &[
            "Trained model checkpoints",
            "Validation reports",
            "Performance analysis",
        ],
        metrics: &["Accuracy > 90%", "Sensitivity > 85%", "Specificity > 85%"],
    },
    Phase {
        name: "Uncertainty Quantification",
        duration: "Weeks 17-20",
        status: Status::Planned,
        icon: Icon::Clock,
        tasks: &[
            "Uncertainty estimation implementation",
            "Confidence scoring setup",
            "Edge case analysis",
        ],
        deliverables: &[
            "Uncertainty metrics report",
            "Confidence threshold document",
            "Edge case documentation",
        ],
        metrics: &[
            "Calibration error < 0.1",
            "Confidence correlation > 0.8",
            "Edge case detection rate > 90%",
        ],
    },
    Phase {
        name: "Clinical Integration",
        duration: "Weeks 21-24",
        status: Status::Planned,
        icon: Icon::Heart,
        tasks: &[
            "Clinical workflow integration",
            "Interface development",
            "User acceptance testing",
        ],
        deliverables: &[
            "Integration documentation",
            "User interface",
            "Testing results",
        ],
        metrics: &[
            "System response time < 2s",
            "User satisfaction > 4/5",
            "Workflow efficiency improvement > 20%",
        ],
    },
    Phase {
        name: "Safety and Compliance",
        duration: "Weeks 25-28",
        status: Status::Planned,
        icon: Icon::Shield,
        tasks: &[
            "Safety assessment",
            "Regulatory compliance check",
            "Documentation review",
        ],
        deliverables: &[
            "Safety report",
            "Compliance documentation",
            "Risk assessment",
        ],
        metrics: &[
            "Safety requirements met 100%",
            "Compliance score > 95%",
            "Risk mitigation completion",
        ],
    },
    Phase {
        name: "Evaluation and Results",
        duration: "Weeks 29-32",
        status: Status::Planned,
        icon: Icon::BarChart3,
        tasks: &[
            "Final performance evaluation",
            "Clinical validation",
            "Results analysis",
        ],
        deliverables: &[
            "Evaluation report",
            "Clinical validation results",
            "Performance metrics",
        ],
        metrics: &[
            "Clinical accuracy > 92%",
            "False positive rate < 5%",
            "Clinical validation success",
        ],
    },
    Phase {
        name: "Documentation and Handover",
        duration: "Weeks 33-36",
        status: Status::Planned,
        icon: Icon::FileCheck,
        tasks: &[
            "Technical documentation",
            "User manual creation",
            "Knowledge transfer",
        ],
        deliverables: &[
            "Complete documentation package",
            "User manuals",
            "Training materials",
        ],
        metrics: &[
            "Documentation completeness",
            "Knowledge transfer completion",
            "Stakeholder sign-off",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let summary = ProgressSummary::from_phases(PHASES);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.total, 9);
        // round(1/9 * 100) = 11
        assert_eq!(summary.percent, 11);
    }

    #[test]
    fn test_summary_empty_list_reports_zero() {
        let summary = ProgressSummary::from_phases(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.percent, 0);
    }

    #[test]
    fn test_summary_rounds_to_nearest() {
        let half = &PHASES[..2]; // 1 of 2 completed
        assert_eq!(ProgressSummary::from_phases(half).percent, 50);
        let third = &PHASES[..3]; // 1 of 3 completed, round(33.3) = 33
        assert_eq!(ProgressSummary::from_phases(third).percent, 33);
    }

    #[test]
    fn test_phase_names_unique() {
        for (i, a) in PHASES.iter().enumerate() {
            for b in &PHASES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_sample_data_lists_non_empty() {
        for phase in PHASES {
            assert!(!phase.tasks.is_empty(), "{} has no tasks", phase.name);
            assert!(
                !phase.deliverables.is_empty(),
                "{} has no deliverables",
                phase.name
            );
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::Completed.label(), "Completed");
        assert_eq!(Status::InProgress.label(), "In Progress");
        assert_eq!(Status::Planned.label(), "Planned");
    }

    #[test]
    fn test_status_colors_distinct() {
        assert_ne!(Status::Completed.color(), Status::InProgress.color());
        assert_ne!(Status::InProgress.color(), Status::Planned.color());
        assert_ne!(Status::Completed.color(), Status::Planned.color());
    }
}
