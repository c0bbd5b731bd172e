//! The business being represented by the chatbot: its profile, which
//! drives the system prompt, and its product catalog.
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BusinessProfile {
    #[serde(rename = "business_name")]
    pub name: String,
    #[serde(rename = "business_type")]
    pub category: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub products_services: Vec<String>,
    pub target_customers: String,
    #[serde(rename = "business_personality")]
    pub personality: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    // Display string including the currency symbol e.g. "$25.00"
    pub price: String,
    pub description: String,
    pub image: String,
}

impl Product {
    fn new(id: u32, name: &str, price: &str, description: &str, image: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            price: price.to_string(),
            description: description.to_string(),
            image: image.to_string(),
        }
    }
}

/// Everything the server knows about the business. Loaded once at
/// startup and never mutated.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BusinessCatalog {
    pub profile: BusinessProfile,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl BusinessCatalog {
    /// Load the catalog from a JSON file shaped like `{"profile": {...},
    /// "products": [...]}`. Falls back to the built-in demo business
    /// when no path is given.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let path = Path::new(path);
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read business catalog {}", path.display()))?;
        let catalog = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse business catalog {}", path.display()))?;
        Ok(catalog)
    }
}

impl Default for BusinessCatalog {
    fn default() -> Self {
        let profile = BusinessProfile {
            name: String::from("Paws & Shine Dog Grooming"),
            category: String::from("Dog grooming service"),
            phone: String::from("(555) 123-PAWS"),
            email: String::from("info@pawsandshine.com"),
            address: String::from("123 Dog Street, Pet City, PC 12345"),
            products_services: vec![
                String::from("Basic grooming package"),
                String::from("Deluxe grooming package"),
                String::from("Nail trimming"),
                String::from("Ear cleaning"),
                String::from("Teeth brushing"),
            ],
            target_customers: String::from(
                "Dog owners who want their pets to look and feel their best, but can also work with cats",
            ),
            personality: String::from("Friendly, caring, and professional with a touch of fun"),
        };

        let products = vec![
            Product::new(
                1,
                "Basic Grooming Package",
                "$25.00",
                "Includes a bath, brushing, and nail trimming for your pup.",
                "🛁",
            ),
            Product::new(
                2,
                "Deluxe Grooming Package",
                "$50.00",
                "Includes a bath, brushing, nail trimming, ear cleaning, and teeth brushing.",
                "✨",
            ),
            Product::new(
                3,
                "Nail Trimming",
                "$10.00",
                "Professional nail trimming to keep your dog's paws healthy.",
                "✂️",
            ),
            Product::new(
                4,
                "Ear Cleaning",
                "$15.00",
                "Gentle ear cleaning to prevent infections and discomfort.",
                "👂",
            ),
            Product::new(
                5,
                "Teeth Brushing",
                "$20.00",
                "Keep your dog's teeth clean and healthy with our brushing service.",
                "🦷",
            ),
        ];

        Self { profile, products }
    }
}
