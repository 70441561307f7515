//! Sample catalog inserted into an empty store at startup

use crate::models::ProductInput;

fn sample(
    name: &str,
    description: &str,
    price: f64,
    stock: i32,
    category: &str,
    image_url: &str,
) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        description: Some(description.to_string()),
        price,
        stock,
        category: Some(category.to_string()),
        image_url: Some(image_url.to_string()),
    }
}

/// The five starter products, in insertion order
pub fn sample_products() -> Vec<ProductInput> {
    vec![
        sample(
            "Wireless Bluetooth Headphones",
            "High-quality wireless headphones with noise cancellation",
            89.99,
            50,
            "Electronics",
            "https://example.com/headphones.jpg",
        ),
        sample(
            "Smart Fitness Watch",
            "Track your fitness goals with this smart watch",
            199.99,
            30,
            "Electronics",
            "https://example.com/smartwatch.jpg",
        ),
        sample(
            "Organic Coffee Beans",
            "Premium organic coffee beans from Colombia",
            24.99,
            100,
            "Food & Beverage",
            "https://example.com/coffee.jpg",
        ),
        sample(
            "Yoga Mat",
            "Non-slip yoga mat for all your exercise needs",
            29.99,
            75,
            "Sports & Fitness",
            "https://example.com/yogamat.jpg",
        ),
        sample(
            "Laptop Stand",
            "Adjustable aluminum laptop stand for better ergonomics",
            49.99,
            40,
            "Electronics",
            "https://example.com/laptopstand.jpg",
        ),
    ]
}
