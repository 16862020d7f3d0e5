//! Per-session shopping cart ledger.
//!
//! The ledger owns an insertion-ordered collection of cart lines and enforces
//! the quantity rules of the storefront: a configured floor on the stepper
//! path, removal when a quantity is driven to zero, and a flat per-lot
//! subtotal that does not scale with the requested amount.

use crate::config::{CART_STEP_UNITS, MIN_CART_UNITS};
use crate::error::{MarketError, Result};
use crate::models::{CartLine, LineId, Listing};

/// Mutable cart state for one user session.
///
/// Construct one ledger per session, via
/// [`Marketplace::new_cart`](crate::Marketplace::new_cart) or
/// [`CartLedger::new`], and pass it by reference to callers; there is no
/// shared or global cart.
///
/// Line ids are synthetic and never reused. Adding the same listing twice
/// creates two independent lines; removal is terminal.
#[derive(Debug, Default)]
pub struct CartLedger {
    lines: Vec<CartLine>,
    next_id: u64,
}

impl CartLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    // -- Mutations -----------------------------------------------------------

    /// Add a listing to the cart, capturing its price as the line snapshot.
    ///
    /// The new line is appended after all existing lines. There is no
    /// de-duplication against other lines for the same listing.
    ///
    /// # Errors
    ///
    /// `InvalidQuantity` if `initial_amount` is not positive; a line enters
    /// the ledger active or not at all.
    pub fn add_line(&mut self, listing: &Listing, initial_amount: i64) -> Result<LineId> {
        if initial_amount <= 0 {
            return Err(MarketError::InvalidQuantity(initial_amount));
        }
        let line_id = LineId(self.next_id);
        self.next_id += 1;
        self.lines
            .push(CartLine::from_listing(line_id, listing, initial_amount));
        Ok(line_id)
    }

    /// Set a line's quantity verbatim.
    ///
    /// A quantity of zero or below removes the line; there is no
    /// zero-quantity state. Values between 1 and the stepper floor are
    /// honored on this path; only [`adjust_amount`](Self::adjust_amount)
    /// applies the floor. The quantity is not clamped against the listing's
    /// stock.
    ///
    /// # Errors
    ///
    /// `LineNotFound` if the id is not in the ledger; the ledger is left
    /// unchanged.
    pub fn set_amount(&mut self, line_id: LineId, new_amount: i64) -> Result<()> {
        let idx = self.find(line_id)?;
        if new_amount <= 0 {
            self.lines.remove(idx);
        } else {
            self.lines[idx].amount = new_amount;
        }
        Ok(())
    }

    /// Step a line's quantity by `delta`, as the +/- cart controls do.
    ///
    /// Decrements stop at the floor of [`MIN_CART_UNITS`] and never remove
    /// the line; increments are unclamped. Returns the resulting amount.
    ///
    /// # Errors
    ///
    /// `LineNotFound` if the id is not in the ledger.
    pub fn adjust_amount(&mut self, line_id: LineId, delta: i64) -> Result<i64> {
        let idx = self.find(line_id)?;
        let current = self.lines[idx].amount;
        let new_amount = if delta < 0 {
            (current + delta).max(MIN_CART_UNITS)
        } else {
            current + delta
        };
        self.lines[idx].amount = new_amount;
        Ok(new_amount)
    }

    /// Step a line down by one stepper unit.
    pub fn step_down(&mut self, line_id: LineId) -> Result<i64> {
        self.adjust_amount(line_id, -CART_STEP_UNITS)
    }

    /// Step a line up by one stepper unit.
    pub fn step_up(&mut self, line_id: LineId) -> Result<i64> {
        self.adjust_amount(line_id, CART_STEP_UNITS)
    }

    /// Remove a line.
    ///
    /// Idempotent: removing an absent line is a no-op. Returns whether a line
    /// was actually removed.
    pub fn remove_line(&mut self, line_id: LineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.line_id != line_id);
        self.lines.len() < before
    }

    // -- Derived state -------------------------------------------------------

    /// Sum of the price snapshots of all current lines.
    ///
    /// Each line contributes its flat lot price once, independent of its
    /// requested amount.
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(|line| line.unit_price_snapshot).sum()
    }

    /// Number of lines, as shown on a cart badge.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by id.
    pub fn get(&self, line_id: LineId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.line_id == line_id)
    }

    // -- Private helpers -----------------------------------------------------

    fn find(&self, line_id: LineId) -> Result<usize> {
        self.lines
            .iter()
            .position(|line| line.line_id == line_id)
            .ok_or(MarketError::LineNotFound(line_id))
    }
}
