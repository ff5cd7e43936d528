// crates/domain/src/report.rs
//! Render-agnostic report model: four fixed sections of `(key, count)` rows.

use log_analyzer_shared_kernel::DisplayLimit;

use crate::analytics::{AnalysisResults, RankedRow, in_insertion_order, rank};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    RequestCounts,
    MostAccessed,
    SuspiciousActivity,
    EndpointCounts,
}

impl SectionKind {
    /// Rendering order.
    pub const ALL: [Self; 4] =
        [Self::RequestCounts, Self::MostAccessed, Self::SuspiciousActivity, Self::EndpointCounts];

    /// Header row of the persisted table.
    pub const fn columns(self) -> [&'static str; 2] {
        match self {
            Self::RequestCounts => ["IP Address", "Request Count"],
            Self::MostAccessed => ["Most Accessed Endpoint", "Access Count"],
            Self::SuspiciousActivity => ["IP Address", "Failed Login Attempts"],
            Self::EndpointCounts => ["Endpoint", "Access Count"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub rows: Vec<RankedRow>,
}

impl ReportSection {
    pub fn columns(&self) -> [&'static str; 2] {
        self.kind.columns()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    sections: Vec<ReportSection>,
}

impl Report {
    /// Full, untruncated report.
    ///
    /// Request and endpoint tables are ranked by count (descending, stable);
    /// suspicious clients keep first-seen order. A missing most-accessed
    /// endpoint leaves that section without rows.
    pub fn from_results(results: &AnalysisResults) -> Self {
        let most_accessed = results
            .endpoints
            .most_accessed
            .iter()
            .map(|m| RankedRow::new(m.endpoint.clone(), m.count))
            .collect();

        let sections = vec![
            ReportSection {
                kind: SectionKind::RequestCounts,
                rows: rank(&results.request_counts),
            },
            ReportSection { kind: SectionKind::MostAccessed, rows: most_accessed },
            ReportSection {
                kind: SectionKind::SuspiciousActivity,
                rows: in_insertion_order(&results.suspicious),
            },
            ReportSection {
                kind: SectionKind::EndpointCounts,
                rows: rank(&results.endpoints.counts),
            },
        ];
        Self { sections }
    }

    /// Console view: request and endpoint tables cut to the given limits.
    pub fn limited(&self, top_ips: DisplayLimit, top_endpoints: DisplayLimit) -> Self {
        let sections = self
            .sections
            .iter()
            .map(|section| {
                let limit = match section.kind {
                    SectionKind::RequestCounts => top_ips,
                    SectionKind::EndpointCounts => top_endpoints,
                    SectionKind::MostAccessed | SectionKind::SuspiciousActivity => DisplayLimit::UNBOUNDED,
                };
                ReportSection { kind: section.kind, rows: limit.apply(&section.rows).to_vec() }
            })
            .collect();
        Self { sections }
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> &ReportSection {
        let pos = SectionKind::ALL.iter().position(|k| *k == kind).unwrap_or_default();
        &self.sections[pos]
    }

    pub fn rows(&self, kind: SectionKind) -> &[RankedRow] {
        &self.section(kind).rows
    }

    pub fn most_accessed(&self) -> Option<&RankedRow> {
        self.rows(SectionKind::MostAccessed).first()
    }
}
