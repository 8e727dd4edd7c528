use std::path::{Path, PathBuf};

const CHATGPT_EXPORT_DIR: &str = "data-export/chatgpt-export";
const CLAUDE_EXPORT_DIR: &str = "data-export/claude-export";
const INPUT_FILE_NAME: &str = "conversations.json";
const OUTPUT_DIR_NAME: &str = "split";

/// One export file and the directory its bucket files go to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    pub label: &'static str,
    pub input: PathBuf,
    pub output_dir: PathBuf,
}

/// The fixed export jobs, relative to the current working directory
pub fn export_jobs() -> Vec<ExportJob> {
    export_jobs_in(Path::new(""))
}

/// The fixed export jobs rooted at `base`
pub fn export_jobs_in(base: &Path) -> Vec<ExportJob> {
    [("ChatGPT", CHATGPT_EXPORT_DIR), ("Claude", CLAUDE_EXPORT_DIR)]
        .into_iter()
        .map(|(label, dir)| {
            let export_dir = base.join(dir);
            ExportJob {
                label,
                input: export_dir.join(INPUT_FILE_NAME),
                output_dir: export_dir.join(OUTPUT_DIR_NAME),
            }
        })
        .collect()
}
