//! Frame reader: turns a response body byte stream into SSE lines.
//!
//! Bytes are buffered until a line terminator arrives, so lines (and
//! multi-byte UTF-8 sequences) split across network chunks are reassembled
//! before parsing. Only `event:` and `data:` lines are yielded; blank lines,
//! comments and anything else are dropped here.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures::Stream;
use futures_util::stream;
use futures_util::StreamExt;

use crate::sse::events::SseLine;
use crate::sse::parser::parse_sse_line;
use crate::traits::HttpError;

type LineStream = Pin<Box<dyn Stream<Item = Result<SseLine, HttpError>> + Send>>;

struct ReaderState<S> {
    bytes: S,
    buffer: BytesMut,
    /// Bytes already searched for a terminator
    scanned: usize,
    eof: bool,
    failed: bool,
}

impl<S> ReaderState<S> {
    /// Pop the next complete line off the buffer, without its terminator.
    ///
    /// `\n`, `\r\n` and a bare `\r` all end a line. A `\r` at the very end
    /// of the buffer waits for the next chunk unless the body has ended.
    fn next_line(&mut self) -> Option<String> {
        let Some(offset) = self.buffer[self.scanned..]
            .iter()
            .position(|b| *b == b'\n' || *b == b'\r')
        else {
            self.scanned = self.buffer.len();
            return None;
        };
        let pos = self.scanned + offset;

        let terminator = if self.buffer[pos] == b'\r' {
            match self.buffer.get(pos + 1) {
                Some(b'\n') => 2,
                Some(_) => 1,
                None if self.eof => 1,
                None => {
                    self.scanned = pos;
                    return None;
                }
            }
        } else {
            1
        };

        let raw = self.buffer.split_to(pos + terminator);
        self.scanned = 0;
        Some(decode_line(&raw[..pos]))
    }

    /// Take whatever is left once the body has ended.
    fn take_remainder(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let raw = self.buffer.split();
        self.scanned = 0;
        Some(decode_line(&raw))
    }
}

fn decode_line(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

/// Lazy, finite, non-restartable sequence of `event:`/`data:` lines.
///
/// Malformed lines never produce an error. A failing byte stream is
/// forwarded once as the transport error and ends the sequence.
pub struct FrameReader {
    inner: LineStream,
}

impl FrameReader {
    /// Wrap a response body byte stream.
    pub fn new<S>(bytes: S) -> Self
    where
        S: Stream<Item = Result<Bytes, HttpError>> + Send + Unpin + 'static,
    {
        let state = ReaderState {
            bytes,
            buffer: BytesMut::new(),
            scanned: 0,
            eof: false,
            failed: false,
        };

        let lines = stream::unfold(state, |mut state| async move {
            if state.failed {
                return None;
            }

            loop {
                // First, drain any complete lines already buffered
                if let Some(line) = state.next_line() {
                    let parsed = parse_sse_line(&line);
                    if parsed.is_meaningful() {
                        return Some((Ok(parsed), state));
                    }
                    continue;
                }

                if state.eof {
                    // Body ended without a trailing newline
                    let parsed = parse_sse_line(&state.take_remainder()?);
                    if parsed.is_meaningful() {
                        return Some((Ok(parsed), state));
                    }
                    return None;
                }

                match state.bytes.next().await {
                    Some(Ok(chunk)) => state.buffer.extend_from_slice(&chunk),
                    Some(Err(e)) => {
                        state.failed = true;
                        return Some((Err(e), state));
                    }
                    None => state.eof = true,
                }
            }
        });

        Self {
            inner: Box::pin(lines),
        }
    }
}

impl Stream for FrameReader {
    type Item = Result<SseLine, HttpError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader_from(chunks: &[&'static str]) -> FrameReader {
        let chunks: Vec<Result<Bytes, HttpError>> = chunks
            .iter()
            .copied()
            .map(|c| Ok(Bytes::from_static(c.as_bytes())))
            .collect();
        FrameReader::new(stream::iter(chunks))
    }

    async fn collect_ok(reader: FrameReader) -> Vec<SseLine> {
        reader.map(|r| r.unwrap()).collect().await
    }

    #[tokio::test]
    async fn test_reads_event_and_data_lines() {
        let reader = reader_from(&["event: a\ndata: {\"x\":1}\n\n"]);
        let lines = collect_ok(reader).await;
        assert_eq!(
            lines,
            vec![
                SseLine::Event("a".to_string()),
                SseLine::Data("{\"x\":1}".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_skips_blank_comment_and_unknown_lines() {
        let reader = reader_from(&[": ping\n\nid: 3\nretry: 10\ndata: y\n"]);
        let lines = collect_ok(reader).await;
        assert_eq!(lines, vec![SseLine::Data("y".to_string())]);
    }

    #[tokio::test]
    async fn test_reassembles_lines_split_across_chunks() {
        let reader = reader_from(&["eve", "nt: split\nda", "ta: {\"delta\"", ":\"ok\"}\n"]);
        let lines = collect_ok(reader).await;
        assert_eq!(
            lines,
            vec![
                SseLine::Event("split".to_string()),
                SseLine::Data("{\"delta\":\"ok\"}".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_reassembles_utf8_split_across_chunks() {
        // "ñ" is 0xC3 0xB1
        let chunks: Vec<Result<Bytes, HttpError>> = vec![
            Ok(Bytes::from_static(b"data: a\xC3")),
            Ok(Bytes::from_static(b"\xB1o\n")),
        ];
        let reader = FrameReader::new(stream::iter(chunks));
        let lines = collect_ok(reader).await;
        assert_eq!(lines, vec![SseLine::Data("año".to_string())]);
    }

    #[tokio::test]
    async fn test_strips_crlf() {
        let reader = reader_from(&["event: a\r\ndata: b\r\n\r\n"]);
        let lines = collect_ok(reader).await;
        assert_eq!(
            lines,
            vec![SseLine::Event("a".to_string()), SseLine::Data("b".to_string())]
        );
    }

    #[tokio::test]
    async fn test_bare_carriage_return_ends_line() {
        let reader = reader_from(&["event: a\rdata: b\r\rdata: c"]);
        let lines = collect_ok(reader).await;
        assert_eq!(
            lines,
            vec![
                SseLine::Event("a".to_string()),
                SseLine::Data("b".to_string()),
                SseLine::Data("c".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_crlf_split_across_chunks_is_one_terminator() {
        let reader = reader_from(&["data: a\r", "\ndata: b\r", "\n"]);
        let lines = collect_ok(reader).await;
        assert_eq!(
            lines,
            vec![SseLine::Data("a".to_string()), SseLine::Data("b".to_string())]
        );
    }

    #[tokio::test]
    async fn test_trailing_carriage_return_at_end_of_body() {
        let reader = reader_from(&["data: a\r"]);
        let lines = collect_ok(reader).await;
        assert_eq!(lines, vec![SseLine::Data("a".to_string())]);
    }

    #[tokio::test]
    async fn test_many_lines_in_one_large_chunk() {
        let body: String = (0..5000).map(|i| format!("data: {}\n", i)).collect();
        let chunks = vec![Ok(Bytes::from(body))];
        let lines = collect_ok(FrameReader::new(stream::iter(chunks))).await;
        assert_eq!(lines.len(), 5000);
        assert_eq!(lines[4999], SseLine::Data("4999".to_string()));
    }

    #[tokio::test]
    async fn test_long_line_arriving_in_small_chunks() {
        let payload = "x".repeat(20_000);
        let body = format!("data: {}\n", payload);
        let chunks: Vec<Result<Bytes, HttpError>> = body
            .as_bytes()
            .chunks(7)
            .map(|c| Ok(Bytes::copy_from_slice(c)))
            .collect();
        let lines = collect_ok(FrameReader::new(stream::iter(chunks))).await;
        assert_eq!(lines, vec![SseLine::Data(payload)]);
    }

    #[tokio::test]
    async fn test_emits_unterminated_final_line() {
        let reader = reader_from(&["event: a\ndata: last"]);
        let lines = collect_ok(reader).await;
        assert_eq!(lines.last(), Some(&SseLine::Data("last".to_string())));
    }

    #[tokio::test]
    async fn test_empty_body_yields_nothing() {
        let reader = reader_from(&[]);
        assert!(collect_ok(reader).await.is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_ends_sequence() {
        let chunks: Vec<Result<Bytes, HttpError>> = vec![
            Ok(Bytes::from_static(b"data: first\n")),
            Err(HttpError::Io("connection reset".to_string())),
            Ok(Bytes::from_static(b"data: never\n")),
        ];
        let mut reader = FrameReader::new(stream::iter(chunks));

        assert_eq!(
            reader.next().await.unwrap().unwrap(),
            SseLine::Data("first".to_string())
        );
        assert!(matches!(reader.next().await, Some(Err(HttpError::Io(_)))));
        assert!(reader.next().await.is_none());
    }
}
