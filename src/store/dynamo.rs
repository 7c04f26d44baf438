use async_trait::async_trait;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use tracing::info;

use crate::common::{MalformedRecord, TodoItem, TodoUpdate};
use crate::config::Config;
use crate::store::{ItemStore, StoreError};

const UPDATE_EXPRESSION: &str = "SET #todo_text = :text, checked = :checked, updatedAt = :updatedAt";

#[derive(Debug, Clone)]
pub struct DynamoItemStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
    consistent_reads: bool,
}

impl DynamoItemStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            consistent_reads: false,
        }
    }

    /// Builds the client from shared SDK settings, pointing it at
    /// `config.dynamodb_endpoint` when one is configured.
    pub fn from_config(sdk_config: &aws_config::SdkConfig, config: &Config) -> Self {
        let mut builder = aws_sdk_dynamodb::config::Builder::from(sdk_config);
        if let Some(endpoint) = &config.dynamodb_endpoint {
            info!("Using DynamoDB endpoint: {}", endpoint);
            builder = builder.endpoint_url(endpoint);
        }

        let client = aws_sdk_dynamodb::Client::from_conf(builder.build());
        Self {
            consistent_reads: config.consistent_reads,
            ..Self::new(client, &config.table_name)
        }
    }

    fn key(id: &str) -> AttributeValue {
        AttributeValue::S(id.to_string())
    }
}

#[async_trait]
impl ItemStore for DynamoItemStore {
    async fn put(&self, item: &TodoItem) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item.clone().into()))
            .send()
            .await
            .map_err(Box::new)?;

        Ok(())
    }

    async fn get_by_key(&self, id: &str) -> Result<Option<TodoItem>, StoreError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", Self::key(id))
            .consistent_read(self.consistent_reads)
            .send()
            .await
            .map_err(Box::new)?;

        Ok(result.item.map(TodoItem::try_from).transpose()?)
    }

    async fn list_all(&self) -> Result<Vec<TodoItem>, StoreError> {
        let records = self
            .client
            .scan()
            .table_name(&self.table_name)
            .consistent_read(self.consistent_reads)
            .into_paginator()
            .items()
            .send()
            .collect::<Result<Vec<_>, _>>()
            .await
            .map_err(Box::new)?;

        info!("Scanned {} items", records.len());
        records
            .into_iter()
            .map(|record| TodoItem::try_from(record).map_err(StoreError::from))
            .collect()
    }

    async fn update_fields(&self, id: &str, update: TodoUpdate) -> Result<TodoItem, StoreError> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("id", Self::key(id))
            .condition_expression("attribute_exists(id)")
            .update_expression(UPDATE_EXPRESSION)
            .expression_attribute_names("#todo_text", "text")
            .expression_attribute_values(":text", AttributeValue::S(update.text))
            .expression_attribute_values(":checked", AttributeValue::Bool(update.checked))
            .expression_attribute_values(":updatedAt", update.updated_at.into())
            .return_values(ReturnValue::AllNew)
            .send()
            .await;

        let output = match result {
            Ok(val) => val,
            Err(SdkError::ServiceError(val)) if val.err().is_conditional_check_failed_exception() => {
                return Err(StoreError::NotFound(id.to_string()));
            }
            Err(err) => return Err(Box::new(err).into()),
        };

        let attributes = output
            .attributes
            .ok_or_else(|| MalformedRecord(format!("update of {id} returned no attributes")))?;

        Ok(TodoItem::try_from(attributes)?)
    }

    async fn delete_by_key(&self, id: &str) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", Self::key(id))
            .send()
            .await
            .map_err(Box::new)?;

        Ok(())
    }
}
