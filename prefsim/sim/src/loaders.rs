pub mod degree_file {
    //! Plain text degree files: one decimal degree per line, in vertex order,
    //! no header.

    use std::fs::File;
    use std::io::{BufRead, BufReader, BufWriter, Write};
    use std::path::Path;

    use log::debug;
    use prefsim_core::DegreeSequence;

    use crate::error::{SimError, SimResult};

    /// Writes `degrees` to `path`, truncating any existing file.
    pub fn write_degree_sequence<P: AsRef<Path>>(
        path: P,
        degrees: &DegreeSequence,
    ) -> SimResult<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        for degree in degrees.iter() {
            writeln!(writer, "{degree}")?;
        }
        writer.flush()?;
        debug!("wrote {} degrees to {:?}", degrees.len(), path);
        Ok(())
    }

    /// Reads a file produced by [`write_degree_sequence`]. Blank lines are skipped.
    pub fn read_degree_sequence<P: AsRef<Path>>(path: P) -> SimResult<DegreeSequence> {
        let reader = BufReader::new(File::open(path)?);
        let mut degrees = vec![];
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let degree = trimmed.parse::<usize>().map_err(|_| SimError::Parse {
                line: i + 1,
                content: line.clone(),
            })?;
            degrees.push(degree);
        }
        Ok(DegreeSequence::new(degrees))
    }

}
