// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod analytics;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod dates;
pub mod expenses;
pub mod models;
pub mod money;
pub mod settings;
pub mod store;
pub mod utils;
