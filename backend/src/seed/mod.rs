use crate::models::{Category, Product};

/// Records every fresh process starts with.
pub fn products() -> Vec<Product> {
    vec![
        Product::new(1, "Indomie Godog", 3500, 10),
        Product::new(2, "Vit 1000ml", 3000, 40),
        Product::new(3, "kecap", 12000, 20),
    ]
}

pub fn categories() -> Vec<Category> {
    vec![Category::new(1, "Makanan", "Kategori Makanan")]
}
