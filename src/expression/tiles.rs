/// Set of input tile positions consumed by an expression subtree.
///
/// Tiles are identified by their position in the input sequence, not by
/// value, so duplicate tile values stay independent. Stored as a bitmask,
/// which caps the supported tile count at [`TileSet::MAX_TILES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileSet(u64);

impl TileSet {
    /// Largest number of input tiles a set can track.
    pub const MAX_TILES: usize = 64;

    /// The set containing only the tile at `index`.
    pub fn single(index: usize) -> Self {
        debug_assert!(index < Self::MAX_TILES);
        TileSet(1 << index)
    }

    pub fn union(self, other: Self) -> Self {
        TileSet(self.0 | other.0)
    }

    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn contains(self, index: usize) -> bool {
        index < Self::MAX_TILES && self.0 & (1 << index) != 0
    }

    /// Number of tiles in the set, i.e. the expression's size.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}
