use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use std::sync::Arc;

use word_count_notifier::adapters::{
    handle_invocation, load_sdk_config, S3ObjectStore, SnsNotificationTopic,
};
use word_count_notifier::application::CountWordsHandler;
use word_count_notifier::config::AppConfig;
use word_count_notifier::logging;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Cold start: configuration and clients live for the whole container
    let config = AppConfig::load_validated()?;
    logging::init_tracing(&config.logging)?;

    let sdk_config = load_sdk_config(&config.aws).await;
    let handler = CountWordsHandler::new(
        Arc::new(S3ObjectStore::from_sdk_config(&sdk_config, &config.aws)),
        Arc::new(SnsNotificationTopic::from_sdk_config(
            &sdk_config,
            &config.notification,
        )),
    );

    tracing::info!(
        topic_arn = %config.notification.topic_arn,
        "Word count function initialized"
    );

    run(service_fn(|event: LambdaEvent<serde_json::Value>| {
        handle_invocation(&handler, event)
    }))
    .await
}
