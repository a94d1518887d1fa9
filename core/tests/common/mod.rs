// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Shared helpers of the integration tests: fixtures for bells, slots and configs, lesson
//! assertions, and scratch state directories.

mod assertions;
mod fixtures;
mod temp_dir;

#[allow(unused_imports)]
pub use assertions::{assert_lesson, assert_subjects};
#[allow(unused_imports)]
pub use fixtures::{
    TestConfigBuilder, bell, open_in_memory, period, slot, test_config, wednesday_oct_21,
};
#[allow(unused_imports)]
pub use temp_dir::setup_temp_dirs;
