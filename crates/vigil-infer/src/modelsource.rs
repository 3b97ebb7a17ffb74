use std::fmt;
use std::path::PathBuf;

pub enum ModelSource {
    File(PathBuf),
    Memory(Vec<u8>),
}

impl fmt::Debug for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSource::File(path) => write!(f, "ModelSource::File({})", path.display()),
            ModelSource::Memory(bytes) => write!(f, "ModelSource::Memory({} bytes)", bytes.len()),
        }
    }
}
