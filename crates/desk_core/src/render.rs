use std::fmt;

use crate::display::{display_string, humanize_label};
use crate::{Recommendations, Report};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    KeyMetrics,
    Trends,
    Recommendations,
}

impl SectionKind {
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Summary => "Executive Summary",
            SectionKind::KeyMetrics => "Key Metrics",
            SectionKind::Trends => "Trends & Correlations",
            SectionKind::Recommendations => "Recommendations",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub label: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Paragraph(String),
    Metrics(Vec<MetricCard>),
    List(Vec<ListItem>),
}

impl SectionBody {
    /// Number of rendered entries: one for a paragraph, else cards or list items.
    pub fn item_count(&self) -> usize {
        match self {
            SectionBody::Paragraph(_) => 1,
            SectionBody::Metrics(cards) => cards.len(),
            SectionBody::List(items) => items.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub body: SectionBody,
}

/// Display tree for one report. Only sections present in the report appear.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportView {
    pub sections: Vec<ReportSection>,
}

impl ReportView {
    pub fn section(&self, kind: SectionKind) -> Option<&ReportSection> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Builds the display tree for `report`. Pure; absent sections produce nothing.
pub fn render_report(report: &Report) -> ReportView {
    let mut sections = Vec::new();

    if let Some(summary) = &report.summary {
        sections.push(ReportSection {
            kind: SectionKind::Summary,
            body: SectionBody::Paragraph(summary.clone()),
        });
    }

    if let Some(metrics) = &report.key_metrics {
        let cards = metrics
            .iter()
            .map(|(key, value)| MetricCard {
                label: humanize_label(key),
                value: display_string(value),
            })
            .collect();
        sections.push(ReportSection {
            kind: SectionKind::KeyMetrics,
            body: SectionBody::Metrics(cards),
        });
    }

    if let Some(trends) = &report.trends_and_correlations {
        sections.push(ReportSection {
            kind: SectionKind::Trends,
            body: SectionBody::List(labelled_items(trends)),
        });
    }

    if let Some(recommendations) = &report.recommendations {
        let items = match recommendations {
            Recommendations::ByIndex(entries) => entries
                .iter()
                .map(|text| ListItem {
                    label: None,
                    text: text.clone(),
                })
                .collect(),
            Recommendations::ByKey(entries) => labelled_items(entries),
        };
        sections.push(ReportSection {
            kind: SectionKind::Recommendations,
            body: SectionBody::List(items),
        });
    }

    ReportView { sections }
}

fn labelled_items(entries: &[(String, String)]) -> Vec<ListItem> {
    entries
        .iter()
        .map(|(key, value)| ListItem {
            label: Some(humanize_label(key)),
            text: value.clone(),
        })
        .collect()
}

impl fmt::Display for ReportView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "== {} ==", section.kind.title())?;
            match &section.body {
                SectionBody::Paragraph(text) => writeln!(f, "{text}")?,
                SectionBody::Metrics(cards) => {
                    for card in cards {
                        if card.value.contains('\n') {
                            writeln!(f, "{}:", card.label)?;
                            for line in card.value.lines() {
                                writeln!(f, "    {line}")?;
                            }
                        } else {
                            writeln!(f, "{}: {}", card.label, card.value)?;
                        }
                    }
                }
                SectionBody::List(items) => {
                    for item in items {
                        match &item.label {
                            Some(label) => writeln!(f, "  - {label}: {}", item.text)?,
                            None => writeln!(f, "  - {}", item.text)?,
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
