use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ReadContentError>;

pub(crate) fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadContentError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    String::from_utf8(bytes)
        .map_err(|err| ReadContentError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })
}

pub(crate) fn read_stdin() -> Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(ReadContentError::StdinReadError)?;
    Ok(content)
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ReadContentError {
    #[error("Failed to decode {file_path:?} as utf-8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("{0:?} is not a file")]
    PathIsNotAFile(PathBuf),

    #[error("Failed to read from stdin: {0}")]
    StdinReadError(std::io::Error),
}
