use serde::{Deserialize, Serialize};

use super::Resource;

/// Stock item served under `/api/produk`. Field names are the wire names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: i64,
    pub nama: String,
    /// Price in the smallest currency unit (rupiah)
    pub harga: i64,
    pub stok: i64,
}

impl Product {
    pub fn new(id: i64, nama: &str, harga: i64, stok: i64) -> Self {
        Self {
            id,
            nama: nama.to_string(),
            harga,
            stok,
        }
    }
}

impl Resource for Product {
    const LABEL: &'static str = "produk";
    const COLLECTION_PATH: &'static str = "/api/produk";
    const FIELDS: &'static [&'static str] = &["id", "nama", "harga", "stok"];
    const ITEM_PREFIX: &'static str = "/api/produk/";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
