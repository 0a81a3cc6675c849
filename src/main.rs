// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use anyhow::Result;

use hello_world::io::run;

// Arguments are never read.
fn main() -> Result<()> {
    run()
}
