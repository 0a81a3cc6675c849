// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io::{self, Write};

use anyhow::Result;

use crate::MESSAGE;

/// Writes the [MESSAGE] to `out` followed by a single line terminator, then
/// flushes. Errors from the sink are returned as-is.
pub fn write_message<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{MESSAGE}")?;
    out.flush()
}

/// Writes the [MESSAGE] to standard output. A failing stdout is not handled
/// here; the error is returned to the caller.
pub fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_message(&mut handle)?;
    Ok(())
}
