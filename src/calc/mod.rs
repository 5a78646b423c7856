// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure farm-finance formulas. No I/O, no shared state.

pub mod breakeven;
pub mod loan;
pub mod roi;

pub use breakeven::compute_breakeven;
pub use loan::compute_loan;
pub use roi::{COST_LABELS, compute_roi};
