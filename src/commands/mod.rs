// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod daily;
pub mod tea;
pub mod mahjong;
pub mod records;
pub mod calendar;
pub mod search;
pub mod categories;
pub mod players;
pub mod templates;
pub mod exporter;
pub mod doctor;
