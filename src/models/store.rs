use serde::{Deserialize, Serialize};

/// Tienda seleccionada para comparar. El header solo mira cuántas hay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedStore {
    pub id: String,
    pub name: String,
}

impl SelectedStore {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}
