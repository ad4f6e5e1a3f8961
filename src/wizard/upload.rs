// ABOUTME: Document upload slots for the documents step
// An upload is only a flag flip; no file content is read or stored

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{info, warn};

use super::error::ParseError;

/// The three documents the wizard asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    Financial,
    Registration,
    BusinessPlan,
}

impl DocumentKind {
    pub fn all() -> &'static [DocumentKind] {
        &[Self::Financial, Self::Registration, Self::BusinessPlan]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::Registration => "registration",
            Self::BusinessPlan => "business-plan",
        }
    }

    /// Display name of the document requested for this slot
    pub fn document_name(&self) -> &'static str {
        match self {
            Self::Financial => "Audited Financial Statements",
            Self::Registration => "CTOS Business Profile",
            Self::BusinessPlan => "SSM Registration Document",
        }
    }
}

impl FromStr for DocumentKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "financial" => Ok(Self::Financial),
            "registration" => Ok(Self::Registration),
            "business-plan" => Ok(Self::BusinessPlan),
            other => Err(ParseError::UnknownDocumentKind(other.to_string())),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadSlot {
    pub name: String,
    pub kind: DocumentKind,
    pub uploaded: bool,
}

/// Fixed set of three upload slots, one per document kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTracker {
    slots: Vec<UploadSlot>,
}

impl UploadTracker {
    pub fn new() -> Self {
        let slots = DocumentKind::all()
            .iter()
            .map(|kind| UploadSlot {
                name: kind.document_name().to_string(),
                kind: *kind,
                uploaded: false,
            })
            .collect();
        Self { slots }
    }

    pub fn slots(&self) -> &[UploadSlot] {
        &self.slots
    }

    /// Mark the slot for `kind` as uploaded. Returns true if the flag changed.
    pub fn mark_uploaded(&mut self, kind: DocumentKind) -> bool {
        let Some(slot) = self.slots.iter_mut().find(|s| s.kind == kind) else {
            return false;
        };
        if slot.uploaded {
            return false;
        }
        slot.uploaded = true;
        info!("Document uploaded: {} ({})", slot.name, kind);
        true
    }

    /// Mark by raw kind name. Unknown names change nothing.
    pub fn mark_uploaded_named(&mut self, kind: &str) -> bool {
        match kind.parse::<DocumentKind>() {
            Ok(kind) => self.mark_uploaded(kind),
            Err(e) => {
                warn!("Ignoring upload: {}", e);
                false
            }
        }
    }

    pub fn all_uploaded(&self) -> bool {
        self.slots.iter().all(|s| s.uploaded)
    }

    /// Number of slots still waiting for a document
    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|s| !s.uploaded).count()
    }
}

impl Default for UploadTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_has_three_pending_slots() {
        let tracker = UploadTracker::new();
        assert_eq!(tracker.slots().len(), 3);
        assert_eq!(tracker.remaining(), 3);
        assert!(!tracker.all_uploaded());
        assert_eq!(
            tracker.slots()[1].name,
            "CTOS Business Profile"
        );
    }

    #[test]
    fn test_all_uploaded_requires_every_slot() {
        let mut tracker = UploadTracker::new();
        for (idx, kind) in DocumentKind::all().iter().enumerate() {
            assert!(!tracker.all_uploaded(), "all_uploaded true after {} uploads", idx);
            tracker.mark_uploaded(*kind);
        }
        assert!(tracker.all_uploaded());
        assert_eq!(tracker.remaining(), 0);
    }

    #[test]
    fn test_mark_uploaded_is_idempotent() {
        let mut tracker = UploadTracker::new();
        assert!(tracker.mark_uploaded(DocumentKind::Financial));
        let snapshot = tracker.clone();

        assert!(!tracker.mark_uploaded(DocumentKind::Financial));
        assert_eq!(tracker, snapshot);
    }

    #[test]
    fn test_unknown_kind_is_ignored() {
        let mut tracker = UploadTracker::new();
        assert!(!tracker.mark_uploaded_named("tax-return"));
        assert_eq!(tracker.remaining(), 3);

        assert!(tracker.mark_uploaded_named("business-plan"));
        assert_eq!(tracker.remaining(), 2);
    }
}
