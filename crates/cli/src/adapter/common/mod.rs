// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Utilities shared between language adapters.

pub mod patterns;
