//! Turning a cart into an order.

use crate::cart::Cart;
use crate::catalog::Product;
use crate::checkout::Order;
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Currency;
use chrono::{DateTime, Utc};

/// Place an order for everything in `cart`.
///
/// Every line is checked against the current catalog first; if any product
/// is gone or has less stock than the line asks for, nothing changes. On
/// success each product's stock drops by the ordered quantity and the cart
/// is emptied.
pub fn place_order(
    products: &mut [Product],
    cart: &mut Cart,
    id: OrderId,
    currency: Currency,
    now: DateTime<Utc>,
) -> Result<Order, CommerceError> {
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    let mut reservations = Vec::with_capacity(cart.items().len());
    for item in cart.items() {
        let index = products
            .iter()
            .position(|p| p.id == item.product_id)
            .ok_or_else(|| CommerceError::ProductNotFound(item.product_id.to_string()))?;
        let available = products[index].stock;
        if item.quantity > available {
            return Err(CommerceError::InsufficientStock {
                product_id: item.product_id.to_string(),
                requested: item.quantity,
                available,
            });
        }
        reservations.push((index, item.quantity));
    }

    let order = Order::from_cart(id, cart, currency, now)?;

    for (index, quantity) in reservations {
        products[index].stock -= quantity;
    }
    cart.clear();
    Ok(order)
}
