//! Seed data for generated orders.

use rand::Rng;

const CUSTOMER_NAMES: &[&str] = &[
    "Ravi Kumar",
    "Sneha Reddy",
    "Arjun Verma",
    "Meena Sharma",
    "Deepak Nair",
];

const ADDRESSES: &[&str] = &[
    "123 MG Road",
    "456 Jubilee Hills",
    "789 Banjara Hills",
    "12 Park Avenue",
    "34 Green Valley",
];

const RESTAURANT_NAMES: &[&str] = &[
    "Pizza Palace",
    "Burger Hut",
    "Curry Express",
    "Tandoori Treats",
    "Noodle Corner",
];

pub const ITEM_POOL: &[&str] = &[
    "Veg Pizza",
    "Chicken Biryani",
    "French Fries",
    "Paneer Roll",
    "Spring Rolls",
    "Ice Cream",
    "Cold Drink",
];

pub fn random_customer() -> String {
    pick(CUSTOMER_NAMES)
}

pub fn random_address() -> String {
    pick(ADDRESSES)
}

pub fn random_restaurant() -> String {
    pick(RESTAURANT_NAMES)
}

/// A random-length (2 to 4) prefix of the item pool, in pool order. The
/// first-N selection is a quirk inherited from the demo data generator; the
/// same leading items appear on every order.
pub fn random_items() -> Vec<String> {
    let count = rand::thread_rng().gen_range(2..=4);
    ITEM_POOL[..count].iter().map(|s| s.to_string()).collect()
}

pub fn random_phone() -> String {
    let number: u64 = rand::thread_rng().gen_range(1_000_000_000..10_000_000_000);
    format!("+91{}", number)
}

fn pick(pool: &[&str]) -> String {
    let idx = rand::thread_rng().gen_range(0..pool.len());
    pool[idx].to_string()
}
