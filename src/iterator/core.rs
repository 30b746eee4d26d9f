use log::debug;

use crate::expression::Expression;
use crate::iterator::generator::ExpressionGenerator;

/// Streams every valid expression over the input tiles, smallest first.
///
/// Expressions are organized into buckets by size (the number of tiles
/// consumed). Bucket 1 holds one leaf per input tile, in input order;
/// bucket k is built by pairing tile-disjoint expressions from smaller
/// buckets whose sizes sum to k. Buckets are built lazily as the stream
/// reaches them, but all of them stay resident until iteration completes
/// since larger sizes re-read the smaller ones.
#[derive(Debug, Clone)]
pub struct ExpressionIterator {
    buckets: Vec<Vec<Expression>>,
    size: usize,
    pos: usize,
    tile_count: usize,
}

impl ExpressionIterator {
    pub fn new(tiles: &[i64]) -> Self {
        let leaves = tiles
            .iter()
            .enumerate()
            .map(|(index, &value)| Expression::tile(value, index))
            .collect();

        Self {
            buckets: vec![Vec::new(), leaves],
            size: 1,
            pos: 0,
            tile_count: tiles.len(),
        }
    }

    /// Build the bucket one size above the current one.
    ///
    /// For each split of the new size into two smaller sizes, pairs are
    /// unordered within a single bucket (equal split) or the full cross
    /// product of two buckets (unequal split); pairs sharing a tile are
    /// skipped, all other pairs expand through the operand combiner.
    fn build_next_bucket(&mut self) {
        let size = self.size + 1;
        let mut bucket = Vec::new();

        for lhs_size in 1..=size / 2 {
            let rhs_size = size - lhs_size;
            if lhs_size == rhs_size {
                let pool = &self.buckets[lhs_size];
                for i in 0..pool.len() {
                    for j in (i + 1)..pool.len() {
                        let (lhs, rhs) = (&pool[i], &pool[j]);
                        if lhs.tiles().intersects(rhs.tiles()) {
                            continue;
                        }
                        bucket.extend(ExpressionGenerator::binary_ops(lhs, rhs));
                    }
                }
            } else {
                for lhs in &self.buckets[lhs_size] {
                    for rhs in &self.buckets[rhs_size] {
                        if lhs.tiles().intersects(rhs.tiles()) {
                            continue;
                        }
                        bucket.extend(ExpressionGenerator::binary_ops(lhs, rhs));
                    }
                }
            }
        }

        debug!("built {} expressions of size {}", bucket.len(), size);
        self.buckets.push(bucket);
    }
}

impl Iterator for ExpressionIterator {
    type Item = Expression;

    fn next(&mut self) -> Option<Expression> {
        loop {
            if let Some(expr) = self.buckets[self.size].get(self.pos) {
                let expr = expr.clone();
                self.pos += 1;
                return Some(expr);
            }
            if self.size >= self.tile_count {
                return None;
            }
            self.build_next_bucket();
            self.size += 1;
            self.pos = 0;
        }
    }
}
