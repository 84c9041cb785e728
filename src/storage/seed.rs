//! Development and test fixtures
//!
//! The same catalog the original storefront shipped with: enough rows to
//! exercise search, sorting, and multi-page pagination without being random.

use crate::core::auth::Role;
use crate::entities::{
    Banner, Category, ContentBlock, Offer, Order, OrderItem, OrderStatus, Product, User,
};
use chrono::{DateTime, TimeZone, Utc};

/// First id handed out for new products (seed uses 1..=17)
pub const NEXT_PRODUCT_ID: u64 = 18;
/// First id handed out for new categories (seed uses 1..=8)
pub const NEXT_CATEGORY_ID: u64 = 9;
/// First id handed out for new offers (seed uses 1..=3)
pub const NEXT_OFFER_ID: u64 = 4;
/// First id handed out for new banners (seed uses 1..=2)
pub const NEXT_BANNER_ID: u64 = 3;
/// First order number (seed uses 10001..=10015)
pub const NEXT_ORDER_NUMBER: u64 = 10016;

fn picsum(id: u32, w: u32, h: u32) -> String {
    format!("https://picsum.photos/id/{id}/{w}/{h}")
}

pub fn categories() -> Vec<Category> {
    let rows: [(u64, &str, &str, u32); 8] = [
        (1, "Special Travel Souvenirs", "Unique keepsakes from around the world.", 101),
        (2, "Lifestyle Accessories", "Gadgets and accessories for the modern traveler.", 102),
        (3, "Limited Travel Finds", "Rare and exclusive items discovered on our journeys.", 103),
        (4, "Snacks & Treats", "Delicious and portable snacks for your adventures.", 104),
        (5, "Beauty & Self Care", "Travel-sized beauty and self-care essentials.", 106),
        (6, "Travel Specials", "On-sale items and special bundles for your next trip.", 108),
        (7, "Hidden Gems", "Lesser-known products that are travel must-haves.", 110),
        (8, "General", "Other miscellaneous travel items.", 111),
    ];
    rows.into_iter()
        .map(|(id, name, description, img)| Category {
            id,
            name: name.to_string(),
            description: description.to_string(),
            image_url: picsum(img, 400, 300),
        })
        .collect()
}

pub fn products() -> Vec<Product> {
    let rows: [(u64, &str, u64, f64, u32, u32, Option<u32>, bool); 17] = [
        (1, "Wireless Mouse", 2, 25.99, 150, 75, Some(0), true),
        (2, "Mechanical Keyboard", 2, 120.00, 80, 40, Some(1), false),
        (3, "Travel Pillow", 3, 199.50, 50, 15, None, true),
        (4, "Portable Monitor", 2, 350.00, 100, 60, Some(2), false),
        (5, "Local Artisan Coffee", 4, 12.00, 300, 125, Some(3), true),
        (6, "Passport Holder", 2, 45.00, 200, 90, None, false),
        (7, "Universal Adapter", 2, 59.99, 120, 85, Some(4), true),
        (8, "Hand-woven Scarf", 3, 49.90, 30, 10, None, false),
        (9, "Noise Cancelling Headphones", 2, 249.99, 70, 55, Some(5), false),
        (10, "Travel Journal", 7, 35.50, 150, 30, None, false),
        (11, "Sunscreen SPF 50", 5, 22.50, 200, 95, Some(6), false),
        (12, "Linen Shirt", 6, 25.00, 400, 250, None, false),
        (13, "City Guide Book", 7, 18.99, 120, 45, Some(7), false),
        (14, "Reusable Water Bottle", 8, 15.00, 300, 180, Some(8), false),
        (15, "Gourmet Chocolate Box", 4, 89.99, 90, 35, None, false),
        (16, "Face Mist", 5, 14.00, 150, 88, Some(9), false),
        (17, "Eiffel Tower Keychain", 1, 9.99, 500, 250, Some(10), false),
    ];
    rows.into_iter()
        .map(
            |(id, name, category_id, price, stock, sold, img, is_featured)| Product {
                id,
                name: name.to_string(),
                category_id,
                price,
                stock,
                sold,
                image_url: img.map(|i| picsum(i, 200, 200)),
                is_featured,
            },
        )
        .collect()
}

pub fn offers() -> Vec<Offer> {
    vec![
        Offer {
            id: 3,
            title: "New User Welcome".to_string(),
            description: "First time here? Enjoy 15% off your entire first order as a welcome gift!".to_string(),
            promo_code: "WELCOME15".to_string(),
        },
        Offer {
            id: 2,
            title: "Electronics Bonanza".to_string(),
            description: "Save $50 on any electronics purchase over $500. Upgrade your tech today.".to_string(),
            promo_code: "TECH50".to_string(),
        },
        Offer {
            id: 1,
            title: "Summer Kick-off Sale".to_string(),
            description: "Get 25% off on all apparel. Perfect for the sunny days ahead!".to_string(),
            promo_code: "SUNNY25".to_string(),
        },
    ]
}

fn date(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 10, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

pub fn orders() -> Vec<Order> {
    struct Row(u64, &'static str, &'static str, DateTime<Utc>, OrderStatus, u64, &'static str, u32, f64);

    let rows = [
        Row(10015, "Liam Johnson", "liam.j@example.com", date(28, 14, 48), OrderStatus::Delivered, 2, "Mechanical Keyboard", 1, 120.00),
        Row(10014, "Olivia Smith", "olivia.s@example.com", date(27, 11, 23), OrderStatus::Delivered, 3, "Travel Pillow", 1, 199.50),
        Row(10013, "Noah Williams", "noah.w@example.com", date(27, 9, 15), OrderStatus::Shipped, 4, "Portable Monitor", 1, 350.00),
        Row(10012, "Emma Brown", "emma.b@example.com", date(26, 18, 2), OrderStatus::Shipped, 5, "Local Artisan Coffee", 2, 12.00),
        Row(10011, "Oliver Jones", "oliver.j@example.com", date(25, 13, 45), OrderStatus::Processing, 6, "Passport Holder", 1, 45.00),
        Row(10010, "Ava Garcia", "ava.g@example.com", date(25, 10, 10), OrderStatus::Processing, 7, "Universal Adapter", 1, 59.99),
        Row(10009, "Elijah Miller", "elijah.m@example.com", date(24, 20, 55), OrderStatus::Pending, 8, "Hand-woven Scarf", 10, 49.90),
        Row(10008, "Charlotte Davis", "charlotte.d@example.com", date(24, 16, 20), OrderStatus::Cancelled, 9, "Noise Cancelling Headphones", 1, 249.99),
        Row(10007, "James Rodriguez", "james.r@example.com", date(23, 11, 30), OrderStatus::Delivered, 10, "Travel Journal", 2, 35.50),
        Row(10006, "Sophia Wilson", "sophia.w@example.com", date(22, 9, 5), OrderStatus::Shipped, 11, "Sunscreen SPF 50", 1, 22.50),
        Row(10005, "Benjamin Martinez", "benjamin.m@example.com", date(21, 17, 40), OrderStatus::Delivered, 12, "Linen Shirt", 2, 25.00),
        Row(10004, "Isabella Anderson", "isabella.a@example.com", date(20, 12, 0), OrderStatus::Delivered, 13, "City Guide Book", 1, 18.99),
        Row(10003, "Lucas Taylor", "lucas.t@example.com", date(19, 15, 18), OrderStatus::Processing, 14, "Reusable Water Bottle", 2, 15.00),
        Row(10002, "Mia Thomas", "mia.t@example.com", date(18, 10, 25), OrderStatus::Shipped, 15, "Gourmet Chocolate Box", 2, 89.99),
        Row(10001, "Henry Hernandez", "henry.h@example.com", date(17, 19, 0), OrderStatus::Delivered, 16, "Face Mist", 3, 14.00),
    ];

    let mut orders: Vec<Order> = rows
        .into_iter()
        .map(|Row(n, name, email, placed, status, pid, pname, qty, price)| Order {
            id: format!("ORD-{n}"),
            customer_name: name.to_string(),
            customer_email: email.to_string(),
            date: placed,
            total_amount: price * f64::from(qty),
            status,
            items: vec![OrderItem {
                product_id: pid,
                product_name: pname.to_string(),
                quantity: qty,
                price,
            }],
        })
        .collect();

    // The newest order carried a second line item.
    if let Some(latest) = orders.first_mut() {
        latest.items.push(OrderItem {
            product_id: 1,
            product_name: "Wireless Mouse".to_string(),
            quantity: 1,
            price: 25.99,
        });
        latest.total_amount = 145.99;
    }
    orders
}

pub fn banners() -> Vec<Banner> {
    vec![
        Banner {
            id: 2,
            image_url: "https://images.unsplash.com/photo-1476514525535-07fb3b4ae5f1?q=80&w=1920".to_string(),
            title: "Unforgettable Journeys".to_string(),
            subtitle: "Souvenirs from every corner of the globe.".to_string(),
        },
        Banner {
            id: 1,
            image_url: "https://images.unsplash.com/photo-1501785888041-af3ef285b470?q=80&w=1920".to_string(),
            title: "Explore the World".to_string(),
            subtitle: "Find the best travel deals and hidden gems.".to_string(),
        },
    ]
}

pub fn content_blocks() -> Vec<ContentBlock> {
    let rows = [
        ("promoHeadline", "Promo Section Headline", "Find Your Next Adventure"),
        ("promoSubheadline", "Promo Section Sub-headline", "Special offers on travel accessories and souvenirs."),
        ("footerAbout", "Footer \"About Us\" Text", "Your one-stop shop for unique travel finds from around the world. We bring the best souvenirs to your doorstep."),
    ];
    rows.into_iter()
        .map(|(key, label, value)| ContentBlock {
            key: key.to_string(),
            label: label.to_string(),
            value: value.to_string(),
        })
        .collect()
}

pub fn users() -> Vec<User> {
    vec![User {
        id: 1,
        name: "Marcus Robb".to_string(),
        email: "admin@example.com".to_string(),
        role: Role::Admin,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_stay_below_sequences() {
        assert!(products().iter().all(|p| p.id < NEXT_PRODUCT_ID));
        assert!(categories().iter().all(|c| c.id < NEXT_CATEGORY_ID));
        assert!(offers().iter().all(|o| o.id < NEXT_OFFER_ID));
        assert!(banners().iter().all(|b| b.id < NEXT_BANNER_ID));
    }

    #[test]
    fn test_every_seed_product_resolves_its_category() {
        let category_ids: Vec<u64> = categories().iter().map(|c| c.id).collect();
        assert!(products().iter().all(|p| category_ids.contains(&p.category_id)));
    }

    #[test]
    fn test_orders_newest_first() {
        let orders = orders();
        assert_eq!(orders.len(), 15);
        assert_eq!(orders[0].id, "ORD-10015");
        assert!(orders.windows(2).all(|w| w[0].date >= w[1].date));
    }
}
