// SPDX-License-Identifier: MIT

//! MongoDB client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (login upserts, profile reads)
//! - Trips (save, list, ownership-checked read/delete, stats)

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Trip, TripStats, User};

/// MongoDB database client.
#[derive(Clone)]
pub struct MongoDb {
    database: Option<Database>,
}

impl MongoDb {
    /// Connect to MongoDB and select the application database.
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, AppError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to MongoDB: {}", e)))?;

        tracing::info!(db = db_name, "Connected to MongoDB");

        Ok(Self {
            database: Some(client.database(db_name)),
        })
    }

    /// Create a mock client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { database: None }
    }

    /// Helper to get the database or return an error if offline.
    fn get_db(&self) -> Result<&Database, AppError> {
        self.database
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    fn users(&self) -> Result<Collection<User>, AppError> {
        Ok(self.get_db()?.collection(collections::USERS))
    }

    fn trips(&self) -> Result<Collection<Trip>, AppError> {
        Ok(self.get_db()?.collection(collections::TRIPS))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Create or update a user on login.
    ///
    /// Keyed by email: the identity provider may reissue a subject id,
    /// so firebaseUID, name and picture are refreshed on every login
    /// while createdAt is only written once.
    pub async fn upsert_user(&self, user: &User) -> Result<User, AppError> {
        let mut set = doc! {
            "firebaseUID": &user.firebase_uid,
            "name": &user.name,
            "lastLogin": &user.last_login,
        };
        if let Some(pic) = &user.profile_pic {
            set.insert("profilePic", pic);
        }

        let update = doc! {
            "$set": set,
            "$setOnInsert": {
                "email": &user.email,
                "createdAt": &user.created_at,
            },
        };

        self.users()?
            .find_one_and_update(doc! { "email": &user.email }, update)
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .ok_or_else(|| AppError::Database("Upsert returned no document".to_string()))
    }

    /// Get a user by their identity-provider subject id.
    pub async fn get_user(&self, firebase_uid: &str) -> Result<Option<User>, AppError> {
        self.users()?
            .find_one(doc! { "firebaseUID": firebase_uid })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Trip Operations ─────────────────────────────────────────

    /// Store a trip, returning it with the assigned id.
    pub async fn insert_trip(&self, mut trip: Trip) -> Result<Trip, AppError> {
        let result = self
            .trips()?
            .insert_one(&trip)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        trip.id = result.inserted_id.as_object_id();
        Ok(trip)
    }

    /// Get all trips for a user, newest first.
    pub async fn get_trips_for_user(&self, firebase_uid: &str) -> Result<Vec<Trip>, AppError> {
        // createdAt is RFC3339 with a Z suffix, so lexicographic order is
        // chronological order
        self.trips()?
            .find(doc! { "firebaseUID": firebase_uid })
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a trip only if it is owned by the given user.
    pub async fn get_trip_for_owner(
        &self,
        trip_id: ObjectId,
        firebase_uid: &str,
    ) -> Result<Option<Trip>, AppError> {
        self.trips()?
            .find_one(doc! { "_id": trip_id, "firebaseUID": firebase_uid })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a trip if it is owned by the given user.
    ///
    /// Returns `false` when no trip matched (absent or owned by someone
    /// else); the two cases are indistinguishable to the caller.
    pub async fn delete_trip(
        &self,
        trip_id: ObjectId,
        firebase_uid: &str,
    ) -> Result<bool, AppError> {
        let result = self
            .trips()?
            .delete_one(doc! { "_id": trip_id, "firebaseUID": firebase_uid })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// Compute dashboard aggregates from the user's saved trips.
    pub async fn trip_stats(&self, firebase_uid: &str) -> Result<TripStats, AppError> {
        let trips = self.get_trips_for_user(firebase_uid).await?;
        Ok(TripStats::from_trips(&trips, chrono::Utc::now()))
    }
}
