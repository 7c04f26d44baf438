pub mod dynamo;
pub mod memory;

use async_trait::async_trait;
use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;

use crate::common::{MalformedRecord, TodoItem, TodoUpdate};

pub use dynamo::DynamoItemStore;
pub use memory::MemoryItemStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Raised by `update_fields` when no item has the given id.
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Malformed(#[from] MalformedRecord),

    #[error(transparent)]
    Put(#[from] Box<SdkError<PutItemError, HttpResponse>>),

    #[error(transparent)]
    Get(#[from] Box<SdkError<GetItemError, HttpResponse>>),

    #[error(transparent)]
    Scan(#[from] Box<SdkError<ScanError, HttpResponse>>),

    #[error(transparent)]
    Update(#[from] Box<SdkError<UpdateItemError, HttpResponse>>),

    #[error(transparent)]
    Delete(#[from] Box<SdkError<DeleteItemError, HttpResponse>>),
}

/// Key-value table holding todo items keyed by `id`.
///
/// Implementations do no validation of their own; callers write complete items.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn put(&self, item: &TodoItem) -> Result<(), StoreError>;

    async fn get_by_key(&self, id: &str) -> Result<Option<TodoItem>, StoreError>;

    async fn list_all(&self) -> Result<Vec<TodoItem>, StoreError>;

    /// Rewrites `text`, `checked` and `updatedAt` of an existing item and
    /// returns the item as stored afterwards.
    async fn update_fields(&self, id: &str, update: TodoUpdate) -> Result<TodoItem, StoreError>;

    /// Removing an absent key is not an error.
    async fn delete_by_key(&self, id: &str) -> Result<(), StoreError>;
}
