// SPDX-License-Identifier: MPL-2.0
//! `folio_lens` is a portfolio gallery viewer built with the Iced GUI framework.
//!
//! It renders a library of named image galleries whose assets live behind a
//! static HTTP prefix as extension-less base paths, resolves each base path to
//! a real file by probing candidate extensions, and presents a keyboard and
//! swipe navigable viewer with wraparound navigation.

#![doc(html_root_url = "https://docs.rs/folio_lens/0.2.0")]

pub mod app;
pub mod config;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod net;
pub mod ui;
