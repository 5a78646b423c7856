// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::UserProfile;
use crate::utils::{delete_setting, get_setting, set_setting};
use anyhow::{Context, Result, anyhow};
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::cell::RefCell;

pub const LOCATIONS: [&str; 12] = [
    "Metro Manila",
    "Cebu",
    "Davao",
    "Laguna",
    "Cavite",
    "Bulacan",
    "Rizal",
    "Nueva Ecija",
    "Pangasinan",
    "Iloilo",
    "Negros Occidental",
    "Misamis Oriental",
];

pub const CROPS: [&str; 12] = [
    "Rice (Palay)",
    "Corn",
    "Coconut",
    "Sugarcane",
    "Banana",
    "Mango",
    "Tomato",
    "Eggplant",
    "Okra",
    "Kangkong",
    "Pechay",
    "Carrots",
];

const PROFILE_KEY: &str = "user_profile";

/// Storage for the single onboarding profile.
pub trait ProfileRepository {
    fn load(&self) -> Result<Option<UserProfile>>;
    fn save(&self, profile: &UserProfile) -> Result<()>;
    /// Returns whether a profile was removed.
    fn clear(&self) -> Result<bool>;
}

impl UserProfile {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(anyhow!("Profile name must not be empty"));
        }
        if self.location.trim().is_empty() {
            return Err(anyhow!("Profile location must not be empty"));
        }
        if let Some(size) = self.farm_size_hectares {
            if size <= Decimal::ZERO {
                return Err(anyhow!("Farm size must be greater than zero, got {}", size));
            }
        }
        if !LOCATIONS
            .iter()
            .any(|l| l.eq_ignore_ascii_case(self.location.trim()))
        {
            tracing::warn!(location = %self.location, "location not in the onboarding list");
        }
        if !self.primary_crop.trim().is_empty()
            && !CROPS
                .iter()
                .any(|c| c.eq_ignore_ascii_case(self.primary_crop.trim()))
        {
            tracing::warn!(crop = %self.primary_crop, "crop not in the onboarding list");
        }
        Ok(())
    }
}

pub struct SqliteProfileStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteProfileStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        SqliteProfileStore { conn }
    }
}

impl ProfileRepository for SqliteProfileStore<'_> {
    fn load(&self) -> Result<Option<UserProfile>> {
        match get_setting(self.conn, PROFILE_KEY)? {
            Some(raw) => {
                let p = serde_json::from_str(&raw).context("Stored profile is not valid JSON")?;
                Ok(Some(p))
            }
            None => Ok(None),
        }
    }

    fn save(&self, profile: &UserProfile) -> Result<()> {
        profile.validate()?;
        set_setting(self.conn, PROFILE_KEY, &serde_json::to_string(profile)?)
    }

    fn clear(&self) -> Result<bool> {
        delete_setting(self.conn, PROFILE_KEY)
    }
}

#[derive(Default)]
pub struct MemoryProfileStore {
    slot: RefCell<Option<UserProfile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileRepository for MemoryProfileStore {
    fn load(&self) -> Result<Option<UserProfile>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, profile: &UserProfile) -> Result<()> {
        profile.validate()?;
        *self.slot.borrow_mut() = Some(profile.clone());
        Ok(())
    }

    fn clear(&self) -> Result<bool> {
        Ok(self.slot.borrow_mut().take().is_some())
    }
}
