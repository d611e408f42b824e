//! Order types.

use crate::cart::{Cart, CartItem};
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::money::{Currency, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fulfilment stage. Every new order starts as `Pending`; nothing in the
/// storefront advances it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Delivered orders have nowhere further to go.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

/// A line captured at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub name: String,
    /// Unit price the shopper saw in the cart.
    pub price: Money,
    pub quantity: u32,
    pub image: String,
}

impl OrderLineItem {
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.price
            .try_multiply(i64::from(self.quantity))
            .ok_or(CommerceError::Overflow)
    }
}

impl From<&CartItem> for OrderLineItem {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            image: item.image.clone(),
        }
    }
}

/// A placed order. Orders are never edited once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// `ORD-<millis>` of the placement time.
    pub id: OrderId,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub items: Vec<OrderLineItem>,
    /// Sum of price times quantity over the lines.
    pub total: Money,
}

impl Order {
    /// Snapshot a cart into a pending order.
    pub fn from_cart(
        id: OrderId,
        cart: &Cart,
        currency: Currency,
        created_at: DateTime<Utc>,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        Ok(Self {
            id,
            created_at,
            status: OrderStatus::Pending,
            items: cart.items().iter().map(OrderLineItem::from).collect(),
            total: cart.subtotal(currency)?,
        })
    }

    /// Total units ordered.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}
