mod resource_catalog;

pub use resource_catalog::{RESOURCES_STORAGE_KEY, ResourceCatalog, default_resources};
