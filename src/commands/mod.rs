// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod budget;
pub mod category;
pub mod convert;
pub mod expense;
pub mod exporter;
pub mod importer;
pub mod preset;
pub mod report;
pub mod reset;
pub mod settings;
pub mod status;
