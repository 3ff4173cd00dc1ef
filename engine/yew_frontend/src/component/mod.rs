// SPDX-FileCopyrightText: 2022 Softbear, Inc.

pub mod button;
pub mod curtain;
pub mod link;
