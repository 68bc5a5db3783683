use serde::{Deserialize, Serialize};

use super::Resource;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn new(id: i64, name: &str, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

impl Resource for Category {
    const LABEL: &'static str = "category";
    const COLLECTION_PATH: &'static str = "/api/categories";
    const FIELDS: &'static [&'static str] = &["id", "name", "description"];
    const ITEM_PREFIX: &'static str = "/api/categories/";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
