// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Plain data exchanged between the chat frontend and the browser that hosts it.

pub mod id;
pub mod rpc;
pub mod url;
