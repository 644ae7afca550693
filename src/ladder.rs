//! Ladder: one side of the book — a price-ordered map of [`Level`]s.
//!
//! Bids sort high → low (best = highest price); asks sort low → high
//! (best = lowest price). A `BTreeMap` gives O(log n) insert/remove with
//! sorted iteration, which the matcher needs for best-price lookup; a
//! hash map would not.

use std::collections::BTreeMap;

use crate::{Level, Order, Price, Side, Slot};

/// One side of the order book (all bids, or all asks).
#[derive(Clone, Debug)]
pub struct Ladder {
    levels: BTreeMap<Price, Level>,
    best_price: Option<Price>,
    side: Side,
}

impl Ladder {
    pub fn new(side: Side) -> Self {
        Self { levels: BTreeMap::new(), best_price: None, side }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    #[inline]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// O(1): cached value, kept current on every insert/removal.
    #[inline]
    pub fn best_price(&self) -> Option<Price> {
        self.best_price
    }

    pub fn best_level(&self) -> Option<&Level> {
        self.best_price.and_then(|p| self.levels.get(&p))
    }

    pub fn get_level(&self, price: Price) -> Option<&Level> {
        self.levels.get(&price)
    }

    pub fn get_level_mut(&mut self, price: Price) -> Option<&mut Level> {
        self.levels.get_mut(&price)
    }

    fn get_or_create_level(&mut self, price: Price) -> &mut Level {
        if !self.levels.contains_key(&price) {
            self.update_best_price_after_insert(price);
            self.levels.insert(price, Level::new());
        }
        self.levels.get_mut(&price).unwrap()
    }

    /// Admit `order` at its price, creating the level if needed. Returns
    /// the slot handle the central index must remember for O(1) removal.
    pub fn insert_order(&mut self, order: Order) -> Slot {
        let price = order.price;
        self.get_or_create_level(price).push_back(order)
    }

    /// Remove the order at `price`/`slot` and return it. Erases the level
    /// if it becomes empty — the book never holds an empty level.
    ///
    /// # Panics
    ///
    /// Panics if `price` has no level — this indicates an index/ladder
    /// desync, which should never happen from within `Book`.
    pub fn remove_order(&mut self, price: Price, slot: Slot) -> Order {
        let level = self.levels.get_mut(&price).expect("ladder missing price level for slot");
        let order = level.remove(slot);
        if level.is_empty() {
            self.remove_level(price);
        }
        order
    }

    /// Remove a price level entirely, updating the best-price cache if
    /// it was the one removed.
    pub fn remove_level(&mut self, price: Price) {
        if self.levels.remove(&price).is_some() && self.best_price == Some(price) {
            self.recompute_best_price();
        }
    }

    /// Iterate levels from best to worst price.
    pub fn iter_best_to_worst(&self) -> impl Iterator<Item = (&Price, &Level)> {
        BestToWorstIter {
            inner: if self.side == Side::Buy {
                IterDirection::Reverse(self.levels.iter().rev())
            } else {
                IterDirection::Forward(self.levels.iter())
            },
        }
    }

    /// Total remaining quantity across every level on this side.
    pub fn total_quantity(&self) -> u64 {
        self.levels.values().map(Level::total_quantity).sum()
    }

    /// Total remaining quantity at prices "at or better" than `price`
    /// from this ladder's own perspective: for a bid ladder, prices
    /// `>= price`; for an ask ladder, prices `<= price`.
    ///
    /// This is exactly the crossable quantity an opposite-side order at
    /// `price` would see, which is what `canFillCompletely` needs
    /// — callers pass the *opposite* ladder and get the right answer
    /// without having to also know the initiator's side.
    pub fn quantity_at_or_better(&self, price: Price) -> u64 {
        match self.side {
            Side::Buy => self.levels.range(price..).map(|(_, l)| l.total_quantity()).sum(),
            Side::Sell => self.levels.range(..=price).map(|(_, l)| l.total_quantity()).sum(),
        }
    }

    fn recompute_best_price(&mut self) {
        self.best_price = match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        };
    }

    fn update_best_price_after_insert(&mut self, new_price: Price) {
        let is_better = match self.best_price {
            None => true,
            Some(current_best) => match self.side {
                Side::Buy => new_price > current_best,
                Side::Sell => new_price < current_best,
            },
        };
        if is_better {
            self.best_price = Some(new_price);
        }
    }
}

enum IterDirection<F, R> {
    Forward(F),
    Reverse(R),
}

type BTreeIter<'a> = std::collections::btree_map::Iter<'a, Price, Level>;

struct BestToWorstIter<'a> {
    inner: IterDirection<BTreeIter<'a>, std::iter::Rev<BTreeIter<'a>>>,
}

impl<'a> Iterator for BestToWorstIter<'a> {
    type Item = (&'a Price, &'a Level);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterDirection::Forward(iter) => iter.next(),
            IterDirection::Reverse(iter) => iter.next(),
        }
    }
}
