//! MongoDB document store

use mongodb::bson::doc;
use mongodb::options::ReplaceOptions;
use mongodb::{Client, Collection, Database};

use super::error::Result;
use crate::models::Item;

const DATABASE: &str = "testdb";
const COLLECTION: &str = "items";

/// Items collection in the test database, upserted by the `id` field.
pub struct DocumentStore {
    database: Database,
    items: Collection<Item>,
}

impl DocumentStore {
    /// Build a handle. The driver connects lazily, so this only fails on an
    /// unparseable URI.
    pub async fn connect(mongo_uri: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongo_uri).await?;
        let database = client.database(DATABASE);
        let items = database.collection::<Item>(COLLECTION);
        Ok(Self { database, items })
    }

    /// Reachability probe.
    pub async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    /// Insert-or-replace keyed by the item's `id`.
    pub async fn upsert_item(&self, item: &Item) -> Result<()> {
        let options = ReplaceOptions::builder().upsert(true).build();
        self.items
            .replace_one(doc! { "id": &item.id }, item, options)
            .await?;
        Ok(())
    }

    pub async fn find_item(&self, id: &str) -> Result<Option<Item>> {
        Ok(self.items.find_one(doc! { "id": id }, None).await?)
    }
}
