// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod calc;
pub mod cli;
pub mod commands;
pub mod db;
pub mod error;
pub mod forms;
pub mod logging;
pub mod models;
pub mod presets;
pub mod profile;
pub mod utils;

pub use error::ValidationError;
