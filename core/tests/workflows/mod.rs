// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflows of the board and its modal against a fake API.

mod board_load;
mod draft_retention;
mod submit;
