// SPDX-License-Identifier: MPL-2.0
//! Interaction state helpers shared by the views.

pub mod swipe;

pub use swipe::{SwipeDirection, SwipeState};
