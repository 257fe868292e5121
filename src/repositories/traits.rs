//! Common repository traits
//!
//! This module defines generic interfaces for database operations.
//! Methods return `Send` futures so handlers generic over a store stay `Send`.

use std::future::Future;

/// Trait for creating new entities in the database
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the database)
/// * `CreateDTO` - DTO for creation (without ID, will be automatically generated)
pub trait Create<Entity, CreateDTO> {
    /// Creates a new entity in the database
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with ID assigned by the database
    /// * `Err(sqlx::Error)` - Error during insertion
    fn create(
        &self,
        data: &CreateDTO,
    ) -> impl Future<Output = Result<Entity, sqlx::Error>> + Send;
}

/// Trait for reading a single entity by primary key
pub trait Read<Entity, Id> {
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(sqlx::Error)` - Error during reading
    fn read(&self, id: &Id) -> impl Future<Output = Result<Option<Entity>, sqlx::Error>> + Send;
}

/// Trait for reading every entity of a table
pub trait ReadAll<Entity> {
    fn read_all(&self) -> impl Future<Output = Result<Vec<Entity>, sqlx::Error>> + Send;
}

/// Trait for replacing existing entities
///
/// # Type Parameters
/// * `Entity` - Type of the updated entity
/// * `UpdateDTO` - DTO carrying the new field values
/// * `Id` - Type of the primary key
pub trait Update<Entity, UpdateDTO, Id> {
    /// # Returns
    /// * `Ok(Entity)` - Updated entity
    /// * `Err(sqlx::Error::RowNotFound)` - No entity with that ID
    fn update(
        &self,
        id: &Id,
        data: &UpdateDTO,
    ) -> impl Future<Output = Result<Entity, sqlx::Error>> + Send;
}

/// Trait for deleting entities
pub trait Delete<Id> {
    /// # Returns
    /// * `Ok(())` - Deletion successful
    /// * `Err(sqlx::Error::RowNotFound)` - No entity with that ID
    fn delete(&self, id: &Id) -> impl Future<Output = Result<(), sqlx::Error>> + Send;
}
