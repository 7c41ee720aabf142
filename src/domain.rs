pub mod contact;
pub mod search;
pub mod store;

use crate::errors::AppError;
use crate::storage::{StorageSlot, codec};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
