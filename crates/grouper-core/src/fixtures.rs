//! Sample datasets for the demo queries.
//!
//! Nothing here is global: callers build a [`SampleData`] (or their own
//! [`SampleSource`]) and hand it to the demos.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_name: String,
    pub category: String,
}

impl Product {
    pub fn new(product_name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            category: category.into(),
        }
    }
}

/// Provider of the datasets the demos run against.
pub trait SampleSource {
    fn words(&self) -> &[String];
    fn numbers(&self) -> &[i32];
    /// Words padded with incidental whitespace.
    fn anagrams(&self) -> &[String];
    fn products(&self) -> &[Product];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleData {
    pub words: Vec<String>,
    pub numbers: Vec<i32>,
    pub anagrams: Vec<String>,
    pub products: Vec<Product>,
}

impl SampleData {
    /// The standard datasets.
    pub fn new() -> Self {
        Self {
            words: to_strings(&["blueberry", "chimpanzee", "abacus", "banana", "apple", "cheese"]),
            numbers: vec![5, 4, 1, 3, 9, 8, 6, 7, 2, 0],
            anagrams: to_strings(&[
                "from   ", "  mane", " salt", " earn ", "name   ", "  last   ", " near ", " form  ",
                "mean",
            ]),
            products: PRODUCT_CATALOG
                .iter()
                .map(|(name, category)| Product::new(*name, *category))
                .collect(),
        }
    }

    pub fn with_words(mut self, words: Vec<String>) -> Self {
        self.words = words;
        self
    }

    pub fn with_numbers(mut self, numbers: Vec<i32>) -> Self {
        self.numbers = numbers;
        self
    }

    pub fn with_anagrams(mut self, anagrams: Vec<String>) -> Self {
        self.anagrams = anagrams;
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }
}

impl SampleSource for SampleData {
    fn words(&self) -> &[String] {
        &self.words
    }

    fn numbers(&self) -> &[i32] {
        &self.numbers
    }

    fn anagrams(&self) -> &[String] {
        &self.anagrams
    }

    fn products(&self) -> &[Product] {
        &self.products
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const PRODUCT_CATALOG: &[(&str, &str)] = &[
    ("Chai", "Beverages"),
    ("Chang", "Beverages"),
    ("Aniseed Syrup", "Condiments"),
    ("Chef Anton's Cajun Seasoning", "Condiments"),
    ("Chef Anton's Gumbo Mix", "Condiments"),
    ("Grandma's Boysenberry Spread", "Condiments"),
    ("Uncle Bob's Organic Dried Pears", "Produce"),
    ("Northwoods Cranberry Sauce", "Condiments"),
    ("Mishi Kobe Niku", "Meat/Poultry"),
    ("Ikura", "Seafood"),
    ("Queso Cabrales", "Dairy Products"),
    ("Queso Manchego La Pastora", "Dairy Products"),
    ("Konbu", "Seafood"),
    ("Tofu", "Produce"),
    ("Genen Shouyu", "Condiments"),
    ("Pavlova", "Confections"),
    ("Alice Mutton", "Meat/Poultry"),
    ("Carnarvon Tigers", "Seafood"),
    ("Teatime Chocolate Biscuits", "Confections"),
    ("Sir Rodney's Marmalade", "Confections"),
    ("Sir Rodney's Scones", "Confections"),
    ("Gustaf's Knäckebröd", "Grains/Cereals"),
    ("Tunnbröd", "Grains/Cereals"),
    ("Guaraná Fantástica", "Beverages"),
    ("NuNuCa Nuß-Nougat-Creme", "Confections"),
    ("Gumbär Gummibärchen", "Confections"),
    ("Schoggi Schokolade", "Confections"),
    ("Rössle Sauerkraut", "Produce"),
    ("Thüringer Rostbratwurst", "Meat/Poultry"),
    ("Nord-Ost Matjeshering", "Seafood"),
    ("Gorgonzola Telino", "Dairy Products"),
    ("Mascarpone Fabioli", "Dairy Products"),
    ("Geitost", "Dairy Products"),
    ("Sasquatch Ale", "Beverages"),
    ("Steeleye Stout", "Beverages"),
    ("Inlagd Sill", "Seafood"),
    ("Gravad lax", "Seafood"),
    ("Côte de Blaye", "Beverages"),
    ("Chartreuse verte", "Beverages"),
    ("Boston Crab Meat", "Seafood"),
    ("Jack's New England Clam Chowder", "Seafood"),
    ("Singaporean Hokkien Fried Mee", "Grains/Cereals"),
    ("Ipoh Coffee", "Beverages"),
    ("Gula Malacca", "Condiments"),
    ("Rogede sild", "Seafood"),
    ("Spegesild", "Seafood"),
    ("Zaanse koeken", "Confections"),
    ("Chocolade", "Confections"),
    ("Maxilaku", "Confections"),
    ("Valkoinen suklaa", "Confections"),
    ("Manjimup Dried Apples", "Produce"),
    ("Filo Mix", "Grains/Cereals"),
    ("Perth Pasties", "Meat/Poultry"),
    ("Tourtière", "Meat/Poultry"),
    ("Pâté chinois", "Meat/Poultry"),
    ("Gnocchi di nonna Alice", "Grains/Cereals"),
    ("Ravioli Angelo", "Grains/Cereals"),
    ("Escargots de Bourgogne", "Seafood"),
    ("Raclette Courdavault", "Dairy Products"),
    ("Camembert Pierrot", "Dairy Products"),
    ("Sirop d'érable", "Condiments"),
    ("Tarte au sucre", "Confections"),
    ("Vegie-spread", "Condiments"),
    ("Wimmers gute Semmelknödel", "Grains/Cereals"),
    ("Louisiana Fiery Hot Pepper Sauce", "Condiments"),
    ("Louisiana Hot Spiced Okra", "Condiments"),
    ("Laughing Lumberjack Lager", "Beverages"),
    ("Scottish Longbreads", "Confections"),
    ("Gudbrandsdalsost", "Dairy Products"),
    ("Outback Lager", "Beverages"),
    ("Flotemysost", "Dairy Products"),
    ("Mozzarella di Giovanni", "Dairy Products"),
    ("Röd Kaviar", "Seafood"),
    ("Longlife Tofu", "Produce"),
    ("Rhönbräu Klosterbier", "Beverages"),
    ("Lakkalikööri", "Beverages"),
    ("Original Frankfurter grüne Soße", "Condiments"),
];
