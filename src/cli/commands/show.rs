//! show command - Print an object

use anyhow::Result;

use super::Context;
use crate::core::types::{ObjectKind, Oid, Pointer};
use crate::ui::output;

/// Print an object, optionally requiring it to be of `kind`.
///
/// Text output is printed even in quiet mode; it is the command's result.
pub fn show(ctx: &Context, oid: Oid, kind: Option<ObjectKind>, abbrev: bool) -> Result<()> {
    let repo = ctx.open()?;

    let object = match kind {
        Some(kind) => repo.resolve(Pointer::new(kind, oid))?,
        None => repo.object(oid)?,
    };

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&output::object_json(&object)?)?);
    } else {
        println!("{}", output::format_object(&object, ctx.oid_style(abbrev)));
    }
    Ok(())
}
