// Where decoded JSON lines end up
use std::io;
use std::path::Path;
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};

pub enum Sink {
    Stdout(Stdout),
    File(File),
}

impl Sink {
    pub fn stdout() -> Self {
        Sink::Stdout(tokio::io::stdout())
    }

    /// Opens `path` for appending, creating it if needed.
    pub async fn append(path: &Path) -> Result<Self, io::Error> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        Ok(Sink::File(file))
    }

    pub async fn emit(&mut self, line: &str) -> Result<(), io::Error> {
        match self {
            Sink::Stdout(out) => write_line(out, line).await,
            Sink::File(file) => write_line(file, line).await,
        }
    }
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, line: &str) -> Result<(), io::Error> {
    let mut buf = Vec::with_capacity(line.len() + 1);
    buf.extend_from_slice(line.as_bytes());
    buf.push(b'\n');
    writer.write_all(&buf).await?;
    writer.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tempest.jsonl");
        tokio::fs::write(&path, "{\"previous\":true}\n").await.unwrap();

        let mut sink = Sink::append(&path).await.unwrap();
        sink.emit("{\"a\":1}").await.unwrap();
        sink.emit("{\"b\":2}").await.unwrap();
        drop(sink);

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(contents, "{\"previous\":true}\n{\"a\":1}\n{\"b\":2}\n");
    }

    #[tokio::test]
    async fn creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.jsonl");
        let mut sink = Sink::append(&path).await.unwrap();
        sink.emit("{}").await.unwrap();
        drop(sink);
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "{}\n");
    }
}
