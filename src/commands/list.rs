use anyhow::Result;

use crate::publish::stubs;

/// Print every registered stub group and the files it would publish.
pub fn execute() -> Result<()> {
    for (tag, files) in stubs::groups() {
        println!("{tag}");
        for stub in *files {
            println!("  {}", stub.relative_path);
        }
    }

    Ok(())
}
