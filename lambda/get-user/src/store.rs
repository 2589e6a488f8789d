use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_dynamo::aws_sdk_dynamodb_1::from_item;

use crate::error::LookupError;
use crate::model::User;

/// Attribute name of the table's partition key.
const USER_ID_ATTRIBUTE: &str = "UserID";

/// Narrow read-by-key capability over the user table. The handler only ever
/// needs this one operation, and tests stand in an in-memory implementation.
#[async_trait]
pub(crate) trait UserStore: Send + Sync {
    /// Fetch the single record whose primary key equals `user_id`.
    async fn get_user(&self, user_id: &str) -> Result<User, LookupError>;
}

/// DynamoDB-backed [`UserStore`]. Holds the one client created at cold start
/// together with the table it reads from.
pub(crate) struct DynamoUserStore {
    client: Client,
    table_name: String,
}

impl DynamoUserStore {
    pub(crate) fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl UserStore for DynamoUserStore {
    async fn get_user(&self, user_id: &str) -> Result<User, LookupError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(USER_ID_ATTRIBUTE, AttributeValue::S(user_id.to_string()))
            .send()
            .await
            .map_err(|err| LookupError::Store(err.to_string()))?;

        // A successful read with no item is the caller's 404, not a store
        // failure.
        let item = output
            .item
            .ok_or_else(|| LookupError::NotFound(user_id.to_string()))?;

        from_item(item).map_err(|err| LookupError::Serialization(err.to_string()))
    }
}
