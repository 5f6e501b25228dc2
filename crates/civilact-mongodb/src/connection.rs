//! MongoDB connection management with health checking

use bson::{doc, Document as BsonDocument};
use civilact_common::{CivilactError, Result};
use mongodb::{
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection, Database,
};

/// Handle to one MongoDB database.
///
/// Built once at startup and passed by reference to every operation. The
/// driver closes the underlying connections when the handle is dropped.
pub struct Connection {
    database: Database,
}

impl Connection {
    /// Open a connection to the server at `uri` and select `database_name`.
    ///
    /// Pool sizes and timeouts stay at driver defaults.
    pub async fn new(uri: &str, database_name: &str) -> Result<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .map_err(|e| CivilactError::Connection(e.to_string()))?;

        // Set stable API version for compatibility
        let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
        client_options.server_api = Some(server_api);

        let client = Client::with_options(client_options)
            .map_err(|e| CivilactError::Connection(e.to_string()))?;
        let database = client.database(database_name);

        Ok(Self { database })
    }

    /// Get a collection by name (returns untyped BsonDocument collection)
    pub fn collection(&self, name: &str) -> Collection<BsonDocument> {
        self.database.collection(name)
    }

    /// Check if the connection is healthy by pinging the server
    pub async fn ping(&self) -> Result<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| CivilactError::Connection(format!("Ping failed: {}", e)))?;
        Ok(())
    }

    /// Drop the selected database (use with caution!)
    pub async fn drop_database(&self) -> Result<()> {
        self.database.drop().await?;
        Ok(())
    }
}
