use serde::{Deserialize, Serialize};

// Menu suggestion produced by the AI route; never persisted
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GeneratedMenuItem{
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: String
}

// Served whenever the model cannot be reached, whatever the concept
pub fn simulated_menu() -> Vec<GeneratedMenuItem> {
    vec![
        GeneratedMenuItem{
            id: "901".to_string(),
            name: "Taco Cósmico".to_string(),
            price: 35.00,
            category: "2".to_string(),
            description: "Taco generado por IA.".to_string()
        },
        GeneratedMenuItem{
            id: "902".to_string(),
            name: "Quesadilla Espacial".to_string(),
            price: 65.00,
            category: "2".to_string(),
            description: "Quesadilla generada por IA.".to_string()
        }
    ]
}
