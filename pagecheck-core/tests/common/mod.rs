#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: u64,
    pub japanese: String,
    pub english: String,
}

pub fn words() -> Vec<Word> {
    vec![
        Word {
            id: 1,
            japanese: "いく".to_string(),
            english: "to go".to_string(),
        },
        Word {
            id: 2,
            japanese: "たべる".to_string(),
            english: "to eat".to_string(),
        },
    ]
}

pub fn words_page() -> Value {
    json!({
        "current_page": 1,
        "total_pages": 3,
        "total_items": 25,
        "items_per_page": 10,
        "items": words()
    })
}

pub fn empty_page() -> Value {
    json!({
        "current_page": 1,
        "total_pages": 0,
        "total_items": 0,
        "items_per_page": 100,
        "items": []
    })
}

/// A paginated body wrapped in an API envelope, as list endpoints commonly return it.
pub fn enveloped_page() -> Value {
    json!({
        "success": true,
        "data": words_page()
    })
}
