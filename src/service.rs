use std::sync::Arc;

use aws_sdk_translate::error::DisplayErrorContext;
use tracing::{error, info};
use uuid::Uuid;

use crate::common::errors::{Error, CREATE_VALIDATION_ERROR, UPDATE_VALIDATION_ERROR};
use crate::common::time::{Clock, SystemClock};
use crate::common::{CreateTodo, Timestamp, TodoItem, TodoUpdate, UpdateTodo};
use crate::store::ItemStore;
use crate::translation::Translator;

/// The todo operations, independent of the request envelope.
pub struct TodoService {
    store: Arc<dyn ItemStore>,
    translator: Arc<dyn Translator>,
    clock: Arc<dyn Clock>,
}

impl TodoService {
    pub fn new(store: Arc<dyn ItemStore>, translator: Arc<dyn Translator>) -> Self {
        Self {
            store,
            translator,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub async fn create(&self, payload: CreateTodo) -> Result<TodoItem, Error> {
        let Some(text) = payload.text else {
            error!("Validation Failed");
            return Err(Error::Validation(CREATE_VALIDATION_ERROR.into()));
        };

        let timestamp = Timestamp::seconds(self.clock.now());
        let item = TodoItem {
            id: Uuid::new_v4().to_string(),
            text,
            checked: false,
            created_at: timestamp.clone(),
            updated_at: timestamp,
        };

        info!("Creating item with id: {}", item.id);
        self.store.put(&item).await?;

        Ok(item)
    }

    pub async fn delete(&self, id: &str) -> Result<String, Error> {
        self.store.delete_by_key(id).await?;
        info!("Deleted item with id: {}", id);

        Ok(format!("Deleted ID: {id}"))
    }

    pub async fn get(&self, id: &str) -> Result<TodoItem, Error> {
        self.store
            .get_by_key(id)
            .await?
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    pub async fn show(&self) -> Result<Vec<TodoItem>, Error> {
        Ok(self.store.list_all().await?)
    }

    /// Rewrites `text` and `checked`. `updatedAt` is stored in integer
    /// milliseconds, unlike the fractional seconds written by `create`.
    pub async fn update(&self, id: &str, payload: UpdateTodo) -> Result<TodoItem, Error> {
        let (Some(text), Some(checked)) = (payload.text, payload.checked) else {
            error!("Validation Failed");
            return Err(Error::Validation(UPDATE_VALIDATION_ERROR.into()));
        };

        let update = TodoUpdate {
            text,
            checked,
            updated_at: Timestamp::millis(self.clock.now()),
        };

        info!("Updating item with id: {}", id);
        Ok(self.store.update_fields(id, update).await?)
    }

    /// Returns the item with its text translated to `lang`. The stored item is
    /// left untouched.
    pub async fn translate(&self, id: &str, lang: &str) -> Result<TodoItem, Error> {
        let mut item = self.get(id).await?;

        let translated = async {
            let source = self.translator.detect_dominant_language(&item.text).await?;
            info!("Translating item {} from {} to {}", id, source, lang);
            self.translator.translate(&item.text, &source, lang).await
        }
        .await
        .map_err(|err| {
            let message = DisplayErrorContext(&err).to_string();
            error!("{}", message);
            Error::Translation(message)
        })?;

        item.text = translated;
        Ok(item)
    }
}
