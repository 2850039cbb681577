//! Kati stamp dump adapter (`ckati_stamp_dump --files`)

use std::path::PathBuf;
use std::process::Command;

use crate::domain::ports::StampDump;
use crate::error::SplitResult;

use super::command::{output_lines, run_tool};

#[derive(Debug, Clone)]
pub struct CkatiStampDump {
    binary: PathBuf,
    stamp_file: PathBuf,
}

impl CkatiStampDump {
    pub fn new(binary: impl Into<PathBuf>, stamp_file: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            stamp_file: stamp_file.into(),
        }
    }
}

impl StampDump for CkatiStampDump {
    fn parsed_makefiles(&self) -> SplitResult<Vec<String>> {
        let stdout = run_tool(
            "ckati_stamp_dump",
            Command::new(&self.binary).arg("--files").arg(&self.stamp_file),
        )?;
        Ok(output_lines(&stdout))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn lists_files_from_stamp() {
        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("ckati_stamp_dump");
        std::fs::write(
            &fake,
            "#!/bin/sh\n[ \"$1\" = --files ] || exit 9\necho prebuilts/bin/ckati\necho device/acme/a.mk\n",
        )
        .unwrap();
        std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).unwrap();

        let dump = CkatiStampDump::new(&fake, dir.path().join(".kati_stamp-acme"));
        assert_eq!(
            dump.parsed_makefiles().unwrap(),
            vec!["prebuilts/bin/ckati", "device/acme/a.mk"]
        );
    }
}
