// SPDX-FileCopyrightText: 2022 Softbear, Inc.

pub mod event_listener;
