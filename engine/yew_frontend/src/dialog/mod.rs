// SPDX-FileCopyrightText: 2022 Softbear, Inc.

#[allow(clippy::module_inception)]
pub mod dialog;
pub mod privacy_message;
