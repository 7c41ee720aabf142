pub use crate::cli::{command, image::acquire_image, run_app};
pub use crate::domain::{
    contact::{self, Contact},
    search::filter_by_name,
    store::ContactStore,
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, StorageMediums, StorageSlot,
    codec::{deserialize_contacts, serialize_contacts},
    file::JsonFileSlot,
    memory::MemorySlot,
    parse_storage_slot,
};
