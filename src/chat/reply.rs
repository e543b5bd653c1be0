use super::scheduler::Scheduler;
use futures::future::{AbortHandle, Abortable};
use rand::Rng;
use std::future::Future;
use std::time::Duration;

pub const REPLY_TEMPLATE_PREFIX: &str = "Esta es la respuesta simulada para: ";

/// The canned bot answer. `prompt` is embedded verbatim.
pub fn simulated_reply(prompt: &str) -> String {
    format!("{REPLY_TEMPLATE_PREFIX}\"{prompt}\"")
}

/// How the bot placeholder turns into the final reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyPolicy {
    /// One pause, then the whole reply.
    Fixed { delay: Duration },
    /// One pause drawn uniformly from `min..=max`, then the whole reply.
    Random { min: Duration, max: Duration },
    /// One character per tick.
    Typewriter { per_char: Duration },
}

impl ReplyPolicy {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(800);
    pub const DEFAULT_RANDOM_MIN: Duration = Duration::from_millis(1000);
    pub const DEFAULT_RANDOM_MAX: Duration = Duration::from_millis(2000);
    pub const DEFAULT_PER_CHAR: Duration = Duration::from_millis(50);

    pub fn name(&self) -> &'static str {
        match self {
            ReplyPolicy::Fixed { .. } => "fixed",
            ReplyPolicy::Random { .. } => "random",
            ReplyPolicy::Typewriter { .. } => "typewriter",
        }
    }

    /// Pause before the whole reply appears. Typewriter pauses per
    /// character instead, so it has none.
    pub fn delay(&self) -> Duration {
        match *self {
            ReplyPolicy::Fixed { delay } => delay,
            ReplyPolicy::Random { min, max } => random_between(min, max),
            ReplyPolicy::Typewriter { .. } => Duration::ZERO,
        }
    }
}

impl Default for ReplyPolicy {
    fn default() -> Self {
        ReplyPolicy::Fixed {
            delay: Self::DEFAULT_DELAY,
        }
    }
}

fn random_between(min: Duration, max: Duration) -> Duration {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let lo_ms = u64::try_from(lo.as_millis()).unwrap_or(u64::MAX);
    let hi_ms = u64::try_from(hi.as_millis()).unwrap_or(u64::MAX);
    Duration::from_millis(rand::rng().random_range(lo_ms..=hi_ms))
}

/// One visible update of the bot entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyFrame {
    Partial(String),
    Final(String),
}

impl ReplyFrame {
    pub fn text(&self) -> &str {
        match self {
            ReplyFrame::Partial(text) | ReplyFrame::Final(text) => text,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, ReplyFrame::Final(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyOutcome {
    Completed,
    Cancelled,
}

/// Plays the reply to `prompt` into `sink`. Exactly one `Final` frame is
/// emitted, always last.
pub async fn run_reply<S, F>(prompt: String, policy: ReplyPolicy, scheduler: S, mut sink: F)
where
    S: Scheduler,
    F: FnMut(ReplyFrame),
{
    let reply = simulated_reply(&prompt);
    match policy {
        ReplyPolicy::Typewriter { per_char } => {
            let total = reply.chars().count();
            let mut shown = String::with_capacity(reply.len());
            for (i, ch) in reply.chars().enumerate() {
                scheduler.sleep(per_char).await;
                shown.push(ch);
                if i + 1 == total {
                    sink(ReplyFrame::Final(shown.clone()));
                } else {
                    sink(ReplyFrame::Partial(shown.clone()));
                }
            }
        }
        ReplyPolicy::Fixed { .. } | ReplyPolicy::Random { .. } => {
            let delay = policy.delay();
            tracing::debug!(policy = policy.name(), ?delay, "simulated reply scheduled");
            scheduler.sleep(delay).await;
            sink(ReplyFrame::Final(reply));
        }
    }
}

/// `run_reply` paired with a handle that stops it. After `abort()` no
/// further frames reach the sink.
pub fn abortable_reply<S, F>(
    prompt: String,
    policy: ReplyPolicy,
    scheduler: S,
    sink: F,
) -> (impl Future<Output = ReplyOutcome>, AbortHandle)
where
    S: Scheduler,
    F: FnMut(ReplyFrame),
{
    let (handle, registration) = AbortHandle::new_pair();
    let task = Abortable::new(run_reply(prompt, policy, scheduler, sink), registration);
    let outcome = async move {
        match task.await {
            Ok(()) => ReplyOutcome::Completed,
            Err(_aborted) => {
                tracing::debug!("simulated reply cancelled");
                ReplyOutcome::Cancelled
            }
        }
    };
    (outcome, handle)
}
