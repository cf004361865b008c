use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// A small loop-bearing script for tests that just need a valid program.
pub const SCRIPT_FILE_CONTENT: &str = "++[>++<-]>.";
// writeln! adds a trailing newline, but that is a comment character and
// never becomes an instruction.
pub const SCRIPT_FILE_NUM_INSTRUCTIONS: usize = SCRIPT_FILE_CONTENT.len();

/// A Brainfuck script written to a temporary file, readable as a stream and
/// addressable by path.
pub struct ScriptFile {
    file: NamedTempFile,
}

impl ScriptFile {
    /// Creates a script file holding [`SCRIPT_FILE_CONTENT`].
    pub fn new() -> io::Result<Self> {
        Self::with_source(SCRIPT_FILE_CONTENT)
    }

    /// Creates a script file holding `source`.
    pub fn with_source(source: &str) -> io::Result<Self> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{}", source)?;

        // Seek back to the start so the file can be read as a stream
        file.seek(SeekFrom::Start(0))?;
        Ok(ScriptFile { file })
    }

    /// Path of the underlying temporary file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl Read for ScriptFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.as_file_mut().read(buf)
    }
}

/// Discards everything written to it.
pub struct NullWriter;

impl Write for NullWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
