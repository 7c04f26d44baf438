use std::sync::Arc;

use aws_config::BehaviorVersion;
use lambda_http::{run, service_fn, Error as LambdaError, Request as LambdaRequest};
use tracing::info;

use todo_api::config::Config;
use todo_api::router::dispatch;
use todo_api::service::TodoService;
use todo_api::store::DynamoItemStore;
use todo_api::translation::AwsTranslator;

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time() // CloudWatch will add the ingestion time
        .with_target(false)
        .init();

    let config = Config::from_env();
    info!("Starting with config: {:?}", config);

    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let store = DynamoItemStore::from_config(&sdk_config, &config);
    let translator = AwsTranslator::from_config(&sdk_config, &config);
    let service = TodoService::new(Arc::new(store), Arc::new(translator));

    run(service_fn(|request: LambdaRequest| dispatch(request, &service))).await
}
