// SPDX-License-Identifier: MIT

pub mod cli;
pub mod diff;
pub mod utils;
