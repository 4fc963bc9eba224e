//! Position markers.
//!
//! Each position carries a small set of tags. Transient tags (comparing,
//! current, pivot) live for one step; `Sorted` persists until the sequence
//! is regenerated.

/// Visual tag attached to a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Being swapped
    Comparing,
    /// Being compared, or inside the active merge span
    Current,
    /// Partition pivot or selection candidate minimum
    Pivot,
    /// In its final position
    Sorted,
}

impl Marker {
    pub const ALL: [Marker; 4] = [
        Marker::Comparing,
        Marker::Current,
        Marker::Pivot,
        Marker::Sorted,
    ];

    fn bit(self) -> u8 {
        match self {
            Marker::Comparing => 1,
            Marker::Current => 1 << 1,
            Marker::Pivot => 1 << 2,
            Marker::Sorted => 1 << 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Marker::Comparing => "comparing",
            Marker::Current => "current",
            Marker::Pivot => "pivot",
            Marker::Sorted => "sorted",
        }
    }
}

/// Set of markers on one position. The empty set means "none".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct MarkerSet(u8);

impl MarkerSet {
    pub const EMPTY: MarkerSet = MarkerSet(0);

    pub fn contains(&self, marker: Marker) -> bool {
        self.0 & marker.bit() != 0
    }

    pub fn insert(&mut self, marker: Marker) {
        self.0 |= marker.bit();
    }

    pub fn remove(&mut self, marker: Marker) {
        self.0 &= !marker.bit();
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Marker> + '_ {
        Marker::ALL.into_iter().filter(|m| self.contains(*m))
    }

    /// The marker that wins when only one color can be drawn.
    ///
    /// Active step tags take precedence over `Sorted` so the cursor stays
    /// visible while it moves over already-placed bars.
    pub fn dominant(&self) -> Option<Marker> {
        [
            Marker::Comparing,
            Marker::Current,
            Marker::Pivot,
            Marker::Sorted,
        ]
        .into_iter()
        .find(|m| self.contains(*m))
    }
}

/// Marker sets for every position of a sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markers {
    sets: Vec<MarkerSet>,
}

impl Markers {
    pub fn new(len: usize) -> Self {
        Self {
            sets: vec![MarkerSet::EMPTY; len],
        }
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn as_slice(&self) -> &[MarkerSet] {
        &self.sets
    }

    pub fn get(&self, index: usize) -> MarkerSet {
        self.sets.get(index).copied().unwrap_or_default()
    }

    /// Add a marker. Indices are validated by the caller.
    pub fn add(&mut self, index: usize, marker: Marker) {
        if let Some(set) = self.sets.get_mut(index) {
            set.insert(marker);
        }
    }

    pub fn remove(&mut self, index: usize, marker: Marker) {
        if let Some(set) = self.sets.get_mut(index) {
            set.remove(marker);
        }
    }

    pub fn mark_all(&mut self, marker: Marker) {
        for set in &mut self.sets {
            set.insert(marker);
        }
    }

    /// Drop every tag except `Sorted`.
    pub fn clear_transient(&mut self) {
        for set in &mut self.sets {
            let sorted = set.contains(Marker::Sorted);
            *set = MarkerSet::EMPTY;
            if sorted {
                set.insert(Marker::Sorted);
            }
        }
    }

    /// Number of positions carrying `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.sets.iter().filter(|s| s.contains(marker)).count()
    }
}
