use serde::{Deserialize, Serialize};
use uuid::{uuid, Uuid};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub book_id: Uuid,
    /// 1 through 5 stars.
    pub score: u8,
    pub reviewer: String,
}

/// Ratings reference book ids from the book service's seed catalog.
pub fn seed_ratings() -> Vec<Rating> {
    vec![
        Rating {
            book_id: uuid!("7d7eb89a-3c77-4a0e-8f2b-6c2a1c0d9b01"),
            score: 5,
            reviewer: "alice".to_string(),
        },
        Rating {
            book_id: uuid!("7d7eb89a-3c77-4a0e-8f2b-6c2a1c0d9b01"),
            score: 4,
            reviewer: "bob".to_string(),
        },
        Rating {
            book_id: uuid!("f3b2a6d1-59c4-42d8-9f0a-8e7c5b4a3d02"),
            score: 5,
            reviewer: "carol".to_string(),
        },
        Rating {
            book_id: uuid!("0a1b2c3d-4e5f-4678-9abc-def012345603"),
            score: 3,
            reviewer: "dave".to_string(),
        },
    ]
}
