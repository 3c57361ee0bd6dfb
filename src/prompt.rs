use crate::entity::AppError;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin};

/// Line-oriented terminal input
#[async_trait]
pub trait Prompt: Send {
    /// Print `query` and block until one line of input arrives (without the line ending)
    async fn ask(&mut self, query: &str) -> Result<String>;
}

/// Reads answers from any buffered byte stream, stdin by default.
/// Bytes that are not valid UTF-8 are replaced, so they surface as an ordinary bad answer.
pub struct StdinPrompt<R = BufReader<Stdin>> {
    reader: R,
}

impl StdinPrompt {
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(io::stdin()))
    }
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> StdinPrompt<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }

    async fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf).await? == 0 {
            return Err(AppError::InputClosed.into());
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

#[async_trait]
impl<R> Prompt for StdinPrompt<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn ask(&mut self, query: &str) -> Result<String> {
        let mut stdout = io::stdout();
        stdout.write_all(query.as_bytes()).await?;
        stdout.flush().await?;

        self.read_line().await
    }
}

/// Replays a fixed list of answers. Drives the menus without a terminal.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Queries shown so far, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[async_trait]
impl Prompt for ScriptedPrompt {
    async fn ask(&mut self, query: &str) -> Result<String> {
        self.asked.push(query.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| AppError::InputClosed.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_prompt_replays_then_closes() {
        let mut prompt = ScriptedPrompt::new(["1", "2"]);

        assert_eq!(prompt.ask("first? ").await.unwrap(), "1");
        assert_eq!(prompt.ask("second? ").await.unwrap(), "2");

        let err = prompt.ask("third? ").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::InputClosed)
        ));
        assert_eq!(prompt.asked(), ["first? ", "second? ", "third? "]);
    }

    #[tokio::test]
    async fn reader_prompt_decodes_invalid_utf8_lossily() {
        let input: &[u8] = b"\xe9\r\n2\nlast";
        let mut prompt = StdinPrompt::from_reader(input);

        assert_eq!(prompt.ask("").await.unwrap(), "\u{FFFD}");
        assert_eq!(prompt.ask("").await.unwrap(), "2");
        assert_eq!(prompt.ask("").await.unwrap(), "last");

        let err = prompt.ask("").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::InputClosed)
        ));
    }
}
