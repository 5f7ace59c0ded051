//! # Shopping Cart
//!
//! In-memory cart state. The cart is never persisted; it lives only as long
//! as the session that owns it.
//!
//! ## Cart Operations Flow
//! ```text
//! UI Action                 Cart Change
//! ─────────                 ───────────
//! Click "Add to Cart"  ───► add_item()    items.push / qty += n
//! Click remove         ───► remove_item() items.remove(i)
//! Checkout / logout    ───► clear()       items.clear()
//! View cart            ───► items(), total()
//! ```
//!
//! ## Thread Safety
//! `Cart` itself is plain data. A caller that shares one cart across tasks
//! wraps it in `Arc<Mutex<Cart>>`; nothing here requires it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Product;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// An item in the shopping cart.
///
/// Carries a frozen snapshot of the product at the moment it was added, so
/// the cart keeps displaying consistent data even if the catalog row is
/// deleted or changed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Product id (for catalog lookup).
    pub product_id: i64,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Seller at time of adding (frozen).
    pub seller: String,

    /// Unit price at time of adding (frozen).
    pub unit_price: f64,

    /// Quantity in cart.
    pub quantity: i64,

    /// When this item was added to the cart.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a cart item from a catalog product, freezing the price.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id,
            name: product.name.clone(),
            seller: product.seller.clone(),
            unit_price: product.price,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Line total (unit price × quantity).
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding the same product again
///   increases quantity)
/// - Quantity is always > 0
/// - At most [`MAX_CART_ITEMS`] distinct items
/// - At most [`MAX_ITEM_QUANTITY`] units per item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,

    /// When the cart was created / last cleared.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart, merging with an existing line if the
    /// product is already present.
    ///
    /// ## Errors
    /// - [`CoreError::Validation`] if `quantity` is not strictly positive
    /// - [`CoreError::QuantityTooLarge`] if the line would exceed the
    ///   per-item cap
    /// - [`CoreError::CartTooLarge`] if a new line would exceed the cart cap
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }
            .into());
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_qty = item.quantity + quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity = new_qty;
            return Ok(());
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }
        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(CartItem::from_product(product, quantity));
        Ok(())
    }

    /// Removes the line for `product_id`. Returns whether a line was removed.
    pub fn remove_item(&mut self, product_id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() != before
    }

    /// Empties the cart and resets its creation time.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Items currently in the cart.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of all line totals.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: None,
            price,
            seller: "TestSeller".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_add_and_total() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, "Phone", 300.0), 1).unwrap();
        cart.add_item(&product(2, "Case", 15.5), 2).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 331.0);
    }

    #[test]
    fn test_adding_same_product_merges_quantity() {
        let mut cart = Cart::new();
        let phone = product(1, "Phone", 300.0);
        cart.add_item(&phone, 1).unwrap();
        cart.add_item(&phone, 2).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_price_is_frozen_at_add_time() {
        let mut cart = Cart::new();
        let mut phone = product(1, "Phone", 300.0);
        cart.add_item(&phone, 1).unwrap();

        // Catalog price changes after the item is in the cart.
        phone.price = 350.0;
        assert_eq!(cart.items()[0].unit_price, 300.0);
        assert_eq!(cart.total(), 300.0);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, "Phone", 300.0), 1).unwrap();

        assert!(cart.remove_item(1));
        assert!(!cart.remove_item(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_cap() {
        let mut cart = Cart::new();
        let err = cart
            .add_item(&product(1, "Phone", 300.0), MAX_ITEM_QUANTITY + 1)
            .unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));

        // Merging past the cap is also rejected.
        cart.add_item(&product(1, "Phone", 300.0), MAX_ITEM_QUANTITY)
            .unwrap();
        let err = cart.add_item(&product(1, "Phone", 300.0), 1).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));
    }

    #[test]
    fn test_quantity_must_be_strictly_positive() {
        let mut cart = Cart::new();
        let phone = product(1, "Phone", 300.0);

        for qty in [0, -1] {
            let err = cart.add_item(&phone, qty).unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)));
        }
        assert!(cart.is_empty());

        // Merging must not smuggle in a non-positive quantity either.
        cart.add_item(&phone, 2).unwrap();
        assert!(cart.add_item(&phone, 0).is_err());
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_cart_size_cap() {
        let mut cart = Cart::new();
        for id in 0..MAX_CART_ITEMS as i64 {
            cart.add_item(&product(id, "Item", 1.0), 1).unwrap();
        }
        let err = cart
            .add_item(&product(MAX_CART_ITEMS as i64, "One too many", 1.0), 1)
            .unwrap_err();
        assert!(matches!(err, CoreError::CartTooLarge { .. }));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, "Phone", 300.0), 1).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }
}
