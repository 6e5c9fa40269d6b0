use std::io::{self, Write};
use std::path::PathBuf;

use crate::models::UploadPlan;

pub fn write_paths<W: Write>(writer: &mut W, paths: &[PathBuf]) -> io::Result<()> {
    for path in paths {
        writeln!(writer, "{}", path.display())?;
    }
    Ok(())
}

/// One object per line: key, content type (`-` when unknown) and source,
/// separated by tabs.
pub fn write_plan<W: Write>(writer: &mut W, plan: &UploadPlan) -> io::Result<()> {
    for object in &plan.objects {
        writeln!(
            writer,
            "{}\t{}\t{}",
            object.key,
            object.content_type.as_deref().unwrap_or("-"),
            object.source.display()
        )?;
    }
    Ok(())
}

pub fn write_plan_json<W: Write>(writer: &mut W, plan: &UploadPlan) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, plan)?;
    writer.write_all(b"\n")
}
