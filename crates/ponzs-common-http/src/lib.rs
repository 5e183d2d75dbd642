// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for ponzs.
//!
//! Every outbound request goes through a client built here so the
//! `User-Agent` header and timeout are applied the same way everywhere.

mod client;

pub use client::{builder, builder_with_user_agent, new_client_with_timeout, BROWSER_USER_AGENT};
