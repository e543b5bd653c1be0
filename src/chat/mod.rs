//! Simulated chat
//!
//! - `transcript` - append-only message list and submission rules
//! - `reply` - reply policies and the task that plays a reply out
//! - `scheduler` - the delay seam (wall clock in the app, immediate in tests)
mod reply;
mod scheduler;
mod transcript;

pub use reply::{
    REPLY_TEMPLATE_PREFIX, ReplyFrame, ReplyOutcome, ReplyPolicy, abortable_reply, run_reply,
    simulated_reply,
};
pub use scheduler::{ImmediateScheduler, Scheduler, WallClockScheduler};
pub use transcript::{Submission, Transcript};

/// Enter submits the message form; Shift+Enter does not.
pub fn should_submit(is_enter: bool, shift_held: bool) -> bool {
    is_enter && !shift_held
}

/// Keydown in the message field. Submits `draft` into `transcript` when the
/// key is a plain Enter; every other key leaves the transcript untouched.
pub fn submit_on_keydown(
    is_enter: bool,
    shift_held: bool,
    draft: &str,
    transcript: &mut Transcript,
) -> Option<Submission> {
    if !should_submit(is_enter, shift_held) {
        return None;
    }
    transcript.submit(draft)
}
