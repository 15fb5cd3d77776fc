use std::path::PathBuf;

/// What a per-row generator produced: member names in row order and the
/// files written for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    pub members: Vec<String>,
    pub files: Vec<PathBuf>,
}

impl Generated {
    pub(crate) fn push(&mut self, member: String, file: PathBuf) {
        self.members.push(member);
        self.files.push(file);
    }
}
