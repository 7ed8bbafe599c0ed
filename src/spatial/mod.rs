use rustc_hash::FxHashMap;

/// Uniform-grid spatial hash for proximity queries.
///
/// Entities are registered into every cell of the 3×3 key neighborhood
/// around their position (offsets of half a cell on each axis), so a
/// single-cell `query` finds everything within roughly one cell radius of
/// the query point without any distance computation. The index holds no
/// entity semantics; callers choose what a `T` means.
///
/// Buckets are only valid until the registered entities move: `clear` and
/// re-insert every tick, or queries will keep returning entities at their
/// old cells.
pub struct SpatialIndex<T> {
    cell_size: f32,
    cells: FxHashMap<(i32, i32), Vec<T>>,
}

impl<T: Copy + PartialEq> SpatialIndex<T> {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: FxHashMap::default(),
        }
    }

    /// Drop every bucket. Must run before a rebuild so no stale membership
    /// survives.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    fn cell_key(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (x / self.cell_size).floor() as i32,
            (y / self.cell_size).floor() as i32,
        )
    }

    /// Register `entity` into the 3×3 neighborhood covering a half-cell
    /// radius around (x, y). Deduplicated per bucket: offsets that land in
    /// the same cell insert once.
    pub fn insert(&mut self, x: f32, y: f32, entity: T) {
        let o = self.cell_size / 2.0;
        for dx in [-o, 0.0, o] {
            for dy in [-o, 0.0, o] {
                let key = self.cell_key(x + dx, y + dy);
                let cell = self.cells.entry(key).or_default();
                if !cell.contains(&entity) {
                    cell.push(entity);
                }
            }
        }
    }

    /// Bucket for the cell containing (x, y), in insertion order. An
    /// unpopulated cell yields an empty slice, never an error.
    pub fn query(&self, x: f32, y: f32) -> &[T] {
        self.cells
            .get(&self.cell_key(x, y))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
