pub mod files;
pub mod parser;

pub use files::list_resume_files;
pub use parser::{extract_text, parse_fields, ResumeFields};
