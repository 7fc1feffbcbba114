//! Console prompter over async stdin/stdout.

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines};

use conjuga_core::traits::Prompter;

/// Line-oriented prompter. Answers are returned without the line terminator.
pub struct ConsolePrompter<R, W> {
    lines: Lines<R>,
    out: W,
}

impl ConsolePrompter<BufReader<tokio::io::Stdin>, tokio::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> ConsolePrompter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, out: W) -> Self {
        Self {
            lines: reader.lines(),
            out,
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out
    }
}

#[async_trait]
impl<R, W> Prompter for ConsolePrompter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn show(&mut self, text: &str) -> anyhow::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await?;
        Ok(())
    }

    async fn ask(&mut self, question: &str) -> anyhow::Result<Option<String>> {
        self.out.write_all(question.as_bytes()).await?;
        self.out.flush().await?;
        let line = self.lines.next_line().await?;
        Ok(line.map(|l| l.trim_end_matches('\r').to_string()))
    }
}
