// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the lessonbook-core crate.
//!
//! These tests validate multi-step workflows that integrate multiple components,
//! including on-disk persistence, configuration integration, and the debounced editor
//! flow.

mod config_driven;
mod editing;
mod persistence;
