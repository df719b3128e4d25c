use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Completion message of a successful emission ("sent").
pub const SEND_SUCCESS_MESSAGE: &str = "发送成功";

const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);
const DEFAULT_MAX_CHUNK_CHARS: usize = 3;

#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// Cadence of chunk delivery; the first chunk lands one full interval
    /// after the emit call, like a `setInterval` timer.
    pub tick_interval: Duration,
    /// Chunk sizes are drawn uniformly from `1..=max_chunk_chars`. The final
    /// chunk may be shorter.
    pub max_chunk_chars: usize,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            max_chunk_chars: DEFAULT_MAX_CHUNK_CHARS,
        }
    }
}

/// Terminal value of one emission, delivered after the last chunk and never
/// before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamResult {
    pub success: bool,
    pub message: String,
}

/// Transient state for one in-progress stream.
///
/// Chunking is by characters, not bytes: the catalog texts are Chinese and a
/// byte slice would split code points. The session and its tick handle live
/// on the emit call's stack frame, so no timer can outlive the call and keep
/// writing into caller state.
struct EmissionSession {
    chars: Vec<char>,
    cursor: usize,
}

impl EmissionSession {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            cursor: 0,
        }
    }

    fn is_done(&self) -> bool {
        self.cursor >= self.chars.len()
    }

    /// Take up to `max_chars` characters, clamped to the remainder.
    fn next_chunk(&mut self, max_chars: usize) -> String {
        let end = (self.cursor + max_chars).min(self.chars.len());
        let chunk: String = self.chars[self.cursor..end].iter().collect();
        self.cursor = end;
        chunk
    }
}

/// Tick-driven chunk emitter.
///
/// Single cooperative task: each tick produces at most one chunk, callbacks
/// never overlap, and the chunks form a contiguous partition of the text.
pub struct StreamEmitter {
    config: EmitterConfig,
    rng: StdRng,
}

impl StreamEmitter {
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic chunking for tests.
    pub fn with_seed(config: EmitterConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Stream `text` to `on_chunk` and report completion.
    ///
    /// Cannot fail in current behavior; it only ever resolves successfully.
    /// Empty text produces zero callbacks and an immediate result.
    pub async fn emit<F>(&mut self, text: &str, mut on_chunk: F) -> StreamResult
    where
        F: FnMut(&str),
    {
        let mut session = EmissionSession::new(text);
        let max_chunk = self.config.max_chunk_chars.max(1);

        if !session.is_done() {
            let period = self.config.tick_interval;
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            while !session.is_done() {
                ticker.tick().await;
                let size = self.rng.gen_range(1..=max_chunk);
                let chunk = session.next_chunk(size);
                trace!("Emitting chunk: chars={}, cursor={}", chunk.chars().count(), session.cursor);
                on_chunk(&chunk);
            }
            // Ticker is dropped before the result is produced; no tick can
            // fire after this point.
        }

        debug!("Emission complete: total_chars={}", session.cursor);
        StreamResult {
            success: true,
            message: SEND_SUCCESS_MESSAGE.to_string(),
        }
    }
}

impl Default for StreamEmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_chunks_partition_text() {
        let text = "您好！我是阿孝问问";
        let mut session = EmissionSession::new(text);
        let mut rebuilt = String::new();
        while !session.is_done() {
            rebuilt.push_str(&session.next_chunk(3));
        }
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn final_chunk_is_clamped() {
        let mut session = EmissionSession::new("ab");
        let chunk = session.next_chunk(3);
        assert_eq!(chunk, "ab");
        assert!(session.is_done());
        assert_eq!(session.next_chunk(3), "");
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let session = EmissionSession::new("");
        assert!(session.is_done());
    }
}
