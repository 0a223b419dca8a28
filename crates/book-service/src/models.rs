use serde::{Deserialize, Serialize};
use uuid::{uuid, Uuid};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub year: u16,
}

/// The catalog is a fixed in-memory list; persistence is out of scope.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: uuid!("7d7eb89a-3c77-4a0e-8f2b-6c2a1c0d9b01"),
            title: "The Pragmatic Programmer".to_string(),
            author: "Andrew Hunt, David Thomas".to_string(),
            year: 1999,
        },
        Book {
            id: uuid!("f3b2a6d1-59c4-42d8-9f0a-8e7c5b4a3d02"),
            title: "Designing Data-Intensive Applications".to_string(),
            author: "Martin Kleppmann".to_string(),
            year: 2017,
        },
        Book {
            id: uuid!("0a1b2c3d-4e5f-4678-9abc-def012345603"),
            title: "Release It!".to_string(),
            author: "Michael T. Nygard".to_string(),
            year: 2007,
        },
        Book {
            id: uuid!("c9d8e7f6-a5b4-4321-8765-43210fedcb04"),
            title: "Building Microservices".to_string(),
            author: "Sam Newman".to_string(),
            year: 2015,
        },
    ]
}
