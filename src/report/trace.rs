//! Stack-trace collapsing for compact display.
//!
//! Raw throwables arrive with every frame the runtime captured, most of which
//! belong to the instrumentation machinery rather than the app or the test.
//! Collapsing keeps the signal: harness frames are dropped, the frame count
//! is capped, capture order (deepest frame first) is preserved, and cause
//! chains are appended after their parent.

use crate::types::RawStackTrace;
use serde::Serialize;

/// Frames owned by the test-harness machinery, dropped from display
const HARNESS_FRAME_PREFIXES: &[&str] = &[
    "androidx.test.",
    "android.test.",
    "android.app.Instrumentation",
    "org.junit.",
    "junit.framework.",
    "java.lang.reflect.",
    "jdk.internal.reflect.",
    "sun.reflect.",
    "dalvik.system.",
];

/// Most frames shown per throwable in the collapsed view
const MAX_DISPLAY_FRAMES: usize = 16;

/// Processed throwable ready for compact display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceInfo {
    /// "ExceptionClass: message", class alone when no message was captured
    pub title: String,

    /// Collapsed frames; cause chains follow their parent as "Caused by:" lines
    pub frames: Vec<String>,
}

/// Collapse an optional raw throwable; absence is not an error
pub fn process_stack_trace(trace: Option<&RawStackTrace>) -> Option<TraceInfo> {
    trace.map(process)
}

/// Collapse one raw throwable and its cause chain
pub fn process(trace: &RawStackTrace) -> TraceInfo {
    let title = headline(trace);

    let mut frames = collapse_frames(&trace.frames);

    let mut cause = trace.cause.as_deref();
    while let Some(inner) = cause {
        frames.push(format!("Caused by: {}", headline(inner)));
        frames.extend(collapse_frames(&inner.frames));
        cause = inner.cause.as_deref();
    }

    TraceInfo { title, frames }
}

fn headline(trace: &RawStackTrace) -> String {
    match &trace.message {
        Some(message) => format!("{}: {}", trace.exception_class, message),
        None => trace.exception_class.clone(),
    }
}

fn collapse_frames(frames: &[String]) -> Vec<String> {
    let kept: Vec<String> = frames.iter().filter(|frame| !is_harness_frame(frame)).cloned().collect();

    if kept.len() > MAX_DISPLAY_FRAMES {
        let hidden = kept.len() - MAX_DISPLAY_FRAMES;
        let mut capped: Vec<String> = kept.into_iter().take(MAX_DISPLAY_FRAMES).collect();
        capped.push(format!("... ({} more frames)", hidden));
        capped
    } else {
        kept
    }
}

fn is_harness_frame(frame: &str) -> bool {
    // Engines differ on whether frames carry the "at " prefix
    let frame = frame.trim().trim_start_matches("at ");
    HARNESS_FRAME_PREFIXES.iter().any(|prefix| frame.starts_with(prefix))
}
