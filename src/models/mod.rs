// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure data types shared between the UI, the pipeline and CSV export.

pub mod email;
pub mod keywords;
pub mod selection;
