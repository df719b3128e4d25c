use axiao_core::stream::{EmitterConfig, StreamEmitter, SEND_SUCCESS_MESSAGE};
use std::time::Duration;

fn fast_config() -> EmitterConfig {
    EmitterConfig {
        tick_interval: Duration::from_millis(1),
        max_chunk_chars: 3,
    }
}

#[tokio::test]
async fn chunks_reconstruct_text_exactly() {
    let texts = [
        "ab",
        "您好！我是阿孝问问，一个智能对话助手。",
        "mixed 中英文 content with spaces",
        "短",
    ];

    for (seed, text) in texts.iter().enumerate() {
        let mut emitter = StreamEmitter::with_seed(fast_config(), seed as u64);
        let mut rebuilt = String::new();
        let result = emitter.emit(text, |chunk| rebuilt.push_str(chunk)).await;

        assert_eq!(&rebuilt, text, "seed {} dropped or reordered chars", seed);
        assert!(result.success);
        assert_eq!(result.message, SEND_SUCCESS_MESSAGE);
    }
}

#[tokio::test]
async fn chunk_sizes_stay_in_range_except_final() {
    let text = "这是一个很好的问题。让我来帮您分析一下。";
    let mut emitter = StreamEmitter::with_seed(fast_config(), 42);

    let mut sizes = Vec::new();
    emitter
        .emit(text, |chunk| sizes.push(chunk.chars().count()))
        .await;

    assert!(!sizes.is_empty());
    let (last, head) = sizes.split_last().unwrap();
    for size in head {
        assert!((1..=3).contains(size), "non-final chunk of size {}", size);
    }
    assert!((1..=3).contains(last));

    let total: usize = sizes.iter().sum();
    assert_eq!(total, text.chars().count());
}

#[tokio::test]
async fn two_char_text_resolves_with_sent_envelope() {
    let mut emitter = StreamEmitter::with_seed(fast_config(), 0);
    let mut chunks = Vec::new();
    let result = emitter.emit("ab", |chunk| chunks.push(chunk.to_string())).await;

    assert!(!chunks.is_empty());
    assert_eq!(chunks.concat(), "ab");
    assert!(result.success);
    assert_eq!(result.message, "发送成功");
}

#[tokio::test]
async fn empty_text_completes_without_callbacks() {
    let mut emitter = StreamEmitter::with_seed(fast_config(), 9);
    let mut calls = 0usize;
    let result = emitter.emit("", |_| calls += 1).await;

    assert_eq!(calls, 0);
    assert!(result.success);
}

#[tokio::test(start_paused = true)]
async fn default_cadence_waits_one_interval_before_first_chunk() {
    let mut emitter = StreamEmitter::with_seed(EmitterConfig::default(), 1);
    let start = tokio::time::Instant::now();
    let mut first_chunk_at = None;

    emitter
        .emit("你好", |_| {
            first_chunk_at.get_or_insert(start.elapsed());
        })
        .await;

    // setInterval semantics: nothing lands before the first 50ms tick.
    assert!(first_chunk_at.expect("at least one chunk") >= Duration::from_millis(50));
}
