// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod loan;
pub mod roi;
pub mod breakeven;
pub mod presets;
pub mod profile;
pub mod settings;
pub mod exporter;
