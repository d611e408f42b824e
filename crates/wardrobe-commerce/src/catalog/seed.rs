//! The demo catalog the storefront starts with.

use crate::catalog::{Category, Product};
use crate::money::{Currency, Money};
use chrono::{DateTime, TimeZone, Utc};

fn inr(amount: f64) -> Money {
    Money::from_decimal(amount, Currency::INR)
}

fn seeded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Eight products across five categories, ids `"1"` to `"8"`.
pub fn sample_catalog() -> Vec<Product> {
    let created = seeded_at();
    vec![
        Product::new("Rose Gold Pearl Earrings", inr(1999.99), Category::Earrings)
            .with_id("1")
            .with_original_price(inr(2799.99))
            .with_rating(4.8, 124)
            .new_arrival()
            .with_colors(["rose-gold", "silver", "gold"])
            .with_description("Elegant rose gold pearl earrings perfect for any occasion")
            .with_tags(["pearl", "rose gold", "elegant", "formal", "wedding"])
            .with_stock(15)
            .with_created_at(created),
        Product::new("Butterfly Hair Clips Set", inr(999.99), Category::HairClips)
            .with_id("2")
            .with_rating(4.6, 89)
            .bestseller()
            .with_colors(["pink", "blue", "purple"])
            .with_description("Adorable butterfly hair clips set for a whimsical look")
            .with_tags(["butterfly", "hair clips", "cute", "colorful", "set"])
            .with_stock(8)
            .with_created_at(created),
        Product::new("Crystal Stud Earrings", inr(1499.99), Category::Earrings)
            .with_id("3")
            .with_original_price(inr(1999.99))
            .with_rating(4.9, 156)
            .with_colors(["clear", "pink", "blue"])
            .with_description("Sparkling crystal stud earrings that catch the light beautifully")
            .with_tags(["crystal", "stud", "sparkle", "daily wear", "versatile"])
            .with_stock(22)
            .with_created_at(created),
        Product::new("Silk Hair Scrunchies", inr(1299.99), Category::HairAccessories)
            .with_id("4")
            .with_rating(4.7, 203)
            .with_colors(["pink", "lavender", "mint"])
            .with_description("Luxurious silk scrunchies gentle on your hair")
            .with_tags(["silk", "scrunchies", "gentle", "luxury", "hair care"])
            .with_stock(3)
            .with_created_at(created),
        Product::new("Charm Bracelet", inr(2399.99), Category::Bracelets)
            .with_id("5")
            .with_rating(4.5, 67)
            .new_arrival()
            .with_colors(["silver", "gold"])
            .with_description("Beautiful charm bracelet to collect memories")
            .with_tags(["charm", "bracelet", "collectible", "memories", "gift"])
            .with_stock(12)
            .with_created_at(created),
        Product::new("Floral Hair Headband", inr(1599.99), Category::HairAccessories)
            .with_id("6")
            .with_rating(4.4, 45)
            .with_colors(["white", "pink", "lavender"])
            .with_description("Delicate floral headband for a romantic touch")
            .with_tags(["floral", "headband", "romantic", "delicate", "flowers"])
            .with_stock(0)
            .unavailable()
            .with_created_at(created),
        Product::new("Delicate Chain Necklace", inr(2699.99), Category::Necklaces)
            .with_id("7")
            .with_original_price(inr(3499.99))
            .with_rating(4.8, 178)
            .bestseller()
            .with_colors(["gold", "silver", "rose-gold"])
            .with_description("Minimalist chain necklace perfect for layering")
            .with_tags(["chain", "necklace", "minimalist", "layering", "delicate"])
            .with_stock(18)
            .with_created_at(created),
        Product::new("Vintage Hair Pins", inr(699.99), Category::HairClips)
            .with_id("8")
            .with_rating(4.3, 92)
            .with_colors(["gold", "silver", "bronze"])
            .with_description("Vintage-inspired hair pins for a classic look")
            .with_tags(["vintage", "hair pins", "classic", "retro", "antique"])
            .with_stock(25)
            .with_created_at(created),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_is_valid() {
        let products = sample_catalog();
        assert_eq!(products.len(), 8);
        for product in &products {
            assert!(product.validate().is_ok(), "{} failed validation", product.name);
        }
    }

    #[test]
    fn test_sample_catalog_headband_unavailable() {
        let products = sample_catalog();
        let headband = products.iter().find(|p| p.id.as_str() == "6").unwrap();
        assert_eq!(headband.stock, 0);
        assert!(!headband.is_available);
    }
}
