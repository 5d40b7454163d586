//! Pose sequence - snapshots accumulated during one capture window

use std::time::Duration;

use crate::{MimicError, MimicResult, PoseSnapshot};

/// Time-ordered snapshots sharing one skeleton layout
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoseSequence {
    snapshots: Vec<PoseSnapshot>,
}

impl PoseSequence {
    pub fn new() -> Self {
        PoseSequence::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PoseSequence {
            snapshots: Vec::with_capacity(capacity),
        }
    }

    /// Build a sequence from already captured snapshots
    pub fn from_snapshots(snapshots: Vec<PoseSnapshot>) -> MimicResult<Self> {
        let mut sequence = PoseSequence::with_capacity(snapshots.len());
        for snapshot in snapshots {
            sequence.push(snapshot)?;
        }
        Ok(sequence)
    }

    /// Append a snapshot, which must match the skeleton of the first one
    pub fn push(&mut self, snapshot: PoseSnapshot) -> MimicResult<()> {
        if let Some(expected) = self.skeleton_len() {
            if snapshot.len() != expected {
                return Err(MimicError::SkeletonMismatch {
                    expected,
                    actual: snapshot.len(),
                });
            }
        }
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Landmark count shared by every snapshot, `None` while empty
    pub fn skeleton_len(&self) -> Option<usize> {
        self.snapshots.first().map(PoseSnapshot::len)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PoseSnapshot> {
        self.snapshots.get(index)
    }

    pub fn snapshots(&self) -> &[PoseSnapshot] {
        &self.snapshots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PoseSnapshot> {
        self.snapshots.iter()
    }

    /// Span between the first and last captured frame
    pub fn duration(&self) -> Duration {
        match (self.snapshots.first(), self.snapshots.last()) {
            (Some(first), Some(last)) => last.timestamp - first.timestamp,
            _ => Duration::ZERO,
        }
    }
}

impl<'a> IntoIterator for &'a PoseSequence {
    type Item = &'a PoseSnapshot;
    type IntoIter = std::slice::Iter<'a, PoseSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

impl From<PoseSnapshot> for PoseSequence {
    fn from(snapshot: PoseSnapshot) -> Self {
        PoseSequence {
            snapshots: vec![snapshot],
        }
    }
}
