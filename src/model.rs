//! Data model for collected and parsed sources.

use std::path::PathBuf;

/// Language tag used on the fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    C,
    Cpp,
}

impl Lang {
    /// `.cpp` and `.hpp` are tagged C++; everything else, `.h` included, is C.
    pub fn from_file_name(name: &str) -> Self {
        if name.ends_with(".cpp") || name.ends_with(".hpp") {
            Lang::Cpp
        } else {
            Lang::C
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Lang::C => "c",
            Lang::Cpp => "cpp",
        }
    }
}

/// A qualifying source file found during traversal.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub file_name: String,
}

/// A source file after header extraction.
#[derive(Debug)]
pub struct ParsedFile {
    /// `name:` from the header, or the file name
    pub display_name: String,
    /// Text following `description:`, blank edge lines removed
    pub description: Option<String>,
    /// Source with the header comment removed
    pub body: String,
    pub lang: Lang,
}

/// Files sharing one containing directory, in traversal order.
///
/// `label` is the directory path relative to the scan root with `/`
/// separators; the root itself has an empty label.
#[derive(Debug)]
pub struct DirectoryGroup<T> {
    pub label: String,
    pub files: Vec<T>,
}

impl<T> DirectoryGroup<T> {
    /// Transform every file while keeping the label and order.
    pub fn try_map<U, E>(
        self,
        f: impl FnMut(T) -> Result<U, E>,
    ) -> Result<DirectoryGroup<U>, E> {
        Ok(DirectoryGroup {
            label: self.label,
            files: self.files.into_iter().map(f).collect::<Result<_, _>>()?,
        })
    }
}
