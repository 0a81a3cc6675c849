// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Hello World for GitHub Container Registry
//!
//! This crate is the payload of a `hello-world` container image published to
//! GitHub Container Registry instead of Docker Hub. Running the image prints a
//! short confirmation that the container runtime works and exits successfully.
//!
//! # Quick Start
//!
//! Printing the message to standard output:
//!
//! ```no_run
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     hello_world::io::run()
//! }
//! ```
//!
//! Writing the message somewhere else:
//!
//! ```
//! let mut buf = Vec::new();
//! hello_world::io::write_message(&mut buf).unwrap();
//! assert!(buf.starts_with(b"Hello from Docker"));
//! ```

pub mod io;

/// The text printed by the image. It already ends in a blank line; the
/// writer appends one more line terminator after it.
pub const MESSAGE: &str = "\
Hello from Docker on GitHub Container Registry!
This message shows that your installation appears to be working correctly.

As Docker Inc introduced rate-limiting in https://www.docker.com/increase-rate-limits
we simply need our own hello-world image on GitHub Container Registry.

To generate this message, Docker took the following steps:
 1. The Docker client contacted the Docker daemon.
 2. The Docker daemon pulled this \"hello-world\" image from the GitHub Container Registry.
    (amd64)
 3. The Docker daemon created a new container from that image which runs the
    executable that produces the output you are currently reading.
 4. The Docker daemon streamed that output to the Docker client, which sent it
    to your terminal.

";
