use lambda_http::{run, service_fn, tracing, Error};

mod config;
mod error;
mod http_handler;
mod model;
mod store;

use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};

use config::Config;
use http_handler::function_handler;
use store::DynamoUserStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Configuration is resolved once at cold start; a missing table name
    // fails initialization instead of every invocation.
    let Config {
        table_name,
        region,
        operation_timeout,
    } = Config::from_env()?;

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region))
        .timeout_config(
            TimeoutConfig::builder()
                .operation_timeout(operation_timeout)
                .build(),
        )
        .load()
        .await;
    let client = aws_sdk_dynamodb::Client::new(&sdk_config);
    let store = DynamoUserStore::new(client, table_name);

    run(service_fn(|event| function_handler(&store, event))).await
}
