use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pb_core::frame::TranscodedText;
use pb_core::traits::Sink;

/// Écrit le texte sur stdout.
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn emit(&mut self, text: &TranscodedText) -> Result<()> {
        let mut out = std::io::stdout().lock();
        write!(out, "{text}").context("Écriture stdout impossible")?;
        out.flush()?;
        Ok(())
    }
}

/// Écrit le texte dans un fichier (créé ou tronqué).
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Target file; nothing is opened until [`Sink::emit`].
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl Sink for FileSink {
    fn emit(&mut self, text: &TranscodedText) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Impossible de créer {}", self.path.display()))?;
        let mut writer = BufWriter::new(file);
        write!(writer, "{text}")
            .and_then(|()| writer.flush())
            .with_context(|| format!("Écriture impossible dans {}", self.path.display()))?;
        log::info!("Texte écrit dans {}", self.path.display());
        Ok(())
    }
}

/// Fichier si `path` est fourni, stdout sinon.
#[must_use]
pub fn sink_for(path: Option<&Path>) -> Box<dyn Sink> {
    match path {
        Some(p) => Box::new(FileSink::new(p)),
        None => Box::new(StdoutSink),
    }
}
