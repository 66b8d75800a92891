//! cat command - Write a blob's raw contents to stdout

use std::io::Write;

use anyhow::{Context as _, Result};

use super::Context;
use crate::core::types::Oid;

/// Write the contents of blob `oid` to stdout, byte for byte.
pub fn cat(ctx: &Context, oid: Oid) -> Result<()> {
    let repo = ctx.open()?;
    let blob = repo.blob(oid)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&blob.data)
        .and_then(|()| stdout.flush())
        .context("failed to write blob to stdout")?;
    Ok(())
}
