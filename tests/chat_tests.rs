//! Integration tests for the simulated chat
//!
//! Drives the transcript with reply tasks on an immediate scheduler

use medichat::chat::{
    ImmediateScheduler, ReplyFrame, ReplyOutcome, ReplyPolicy, Transcript, abortable_reply,
    run_reply, simulated_reply, submit_on_keydown,
};
use medichat::types::{MessageState, Sender};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Submits `raw` and plays its reply to the end, like the chat view does.
async fn submit_and_reply(
    transcript: &Rc<RefCell<Transcript>>,
    raw: &str,
    policy: ReplyPolicy,
    scheduler: ImmediateScheduler,
) -> bool {
    let Some(submission) = transcript.borrow_mut().submit(raw) else {
        return false;
    };
    let sink_transcript = transcript.clone();
    let bot_index = submission.bot_index;
    run_reply(submission.text, policy, scheduler, move |frame| {
        sink_transcript.borrow_mut().apply(bot_index, &frame)
    })
    .await;
    true
}

mod transcript_tests {
    use super::*;

    #[tokio::test]
    async fn test_hello_round_trip() {
        let transcript = Rc::new(RefCell::new(Transcript::new()));
        let scheduler = ImmediateScheduler::new();

        assert!(
            submit_and_reply(&transcript, "hello", ReplyPolicy::default(), scheduler.clone()).await
        );

        let transcript = transcript.borrow();
        let msgs = transcript.messages();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].sender, Sender::User);
        assert_eq!(msgs[0].text, "hello");
        assert_eq!(msgs[1].sender, Sender::Bot);
        assert_eq!(msgs[1].text, "Esta es la respuesta simulada para: \"hello\"");
        assert_eq!(msgs[1].state, MessageState::Complete);
        assert_eq!(scheduler.requested(), vec![Duration::from_millis(800)]);
    }

    #[tokio::test]
    async fn test_reply_uses_trimmed_text_verbatim() {
        let transcript = Rc::new(RefCell::new(Transcript::new()));
        submit_and_reply(
            &transcript,
            "  ¿Qué es el Ibuprofeno?  ",
            ReplyPolicy::default(),
            ImmediateScheduler::new(),
        )
        .await;

        let transcript = transcript.borrow();
        assert_eq!(transcript.messages()[0].text, "¿Qué es el Ibuprofeno?");
        assert_eq!(
            transcript.messages()[1].text,
            simulated_reply("¿Qué es el Ibuprofeno?")
        );
    }

    #[tokio::test]
    async fn test_blank_submissions_add_nothing() {
        let transcript = Rc::new(RefCell::new(Transcript::new()));
        let scheduler = ImmediateScheduler::new();

        for raw in ["", "   ", "\n\t"] {
            assert!(
                !submit_and_reply(&transcript, raw, ReplyPolicy::default(), scheduler.clone())
                    .await
            );
        }
        assert!(transcript.borrow().is_empty());
        assert!(scheduler.requested().is_empty());
    }

    #[tokio::test]
    async fn test_every_user_message_is_followed_by_its_reply() {
        let transcript = Rc::new(RefCell::new(Transcript::new()));
        for raw in ["uno", "dos", "tres"] {
            submit_and_reply(
                &transcript,
                raw,
                ReplyPolicy::default(),
                ImmediateScheduler::new(),
            )
            .await;
        }

        let transcript = transcript.borrow();
        let msgs = transcript.messages();
        assert_eq!(msgs.len(), 6);
        for pair in msgs.chunks(2) {
            assert_eq!(pair[0].sender, Sender::User);
            assert_eq!(pair[1].sender, Sender::Bot);
            assert_eq!(pair[1].text, simulated_reply(&pair[0].text));
        }
    }

    #[test]
    fn test_user_entry_precedes_placeholder_before_any_reply() {
        let mut transcript = Transcript::new();
        let submission = transcript.submit("hola").expect("submission");
        assert!(submission.user_index < submission.bot_index);
        assert_eq!(transcript.messages()[1].state, MessageState::Typing);
    }
}

mod policy_tests {
    use super::*;

    #[tokio::test]
    async fn test_typewriter_reveals_every_prefix() {
        let scheduler = ImmediateScheduler::new();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink_frames = frames.clone();
        let policy = ReplyPolicy::Typewriter {
            per_char: Duration::from_millis(50),
        };

        run_reply("hi".to_string(), policy, scheduler.clone(), move |frame| {
            sink_frames.borrow_mut().push(frame)
        })
        .await;

        let expected = simulated_reply("hi");
        let frames = frames.borrow();
        let char_count = expected.chars().count();
        assert_eq!(frames.len(), char_count);
        assert_eq!(scheduler.requested().len(), char_count);
        assert_eq!(
            scheduler.requested().iter().sum::<Duration>(),
            Duration::from_millis(50) * char_count as u32
        );

        let mut prefix = String::new();
        for (frame, ch) in frames.iter().zip(expected.chars()) {
            prefix.push(ch);
            assert_eq!(frame.text(), prefix);
        }
        assert!(frames.iter().take(char_count - 1).all(|f| !f.is_final()));
        assert_eq!(frames.last(), Some(&ReplyFrame::Final(expected)));
    }

    #[test]
    fn test_typewriter_state_in_transcript() {
        let mut transcript = Transcript::new();
        let submission = transcript.submit("ok").expect("submission");
        transcript.apply(submission.bot_index, &ReplyFrame::Partial("Es".to_string()));
        assert_eq!(transcript.messages()[1].state, MessageState::Revealing);
        assert_eq!(transcript.messages()[1].text, "Es");
    }

    #[tokio::test]
    async fn test_random_policy_sleeps_once_within_bounds() {
        let scheduler = ImmediateScheduler::new();
        let policy = ReplyPolicy::Random {
            min: Duration::from_millis(1000),
            max: Duration::from_millis(2000),
        };
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink_frames = frames.clone();

        run_reply("x".to_string(), policy, scheduler.clone(), move |frame| {
            sink_frames.borrow_mut().push(frame)
        })
        .await;

        let requested = scheduler.requested();
        assert_eq!(requested.len(), 1);
        assert!(requested[0] >= Duration::from_millis(1000));
        assert!(requested[0] <= Duration::from_millis(2000));
        assert_eq!(*frames.borrow(), vec![ReplyFrame::Final(simulated_reply("x"))]);
    }
}

mod cancellation_tests {
    use super::*;

    #[tokio::test]
    async fn test_aborted_reply_emits_nothing() {
        let frames = Rc::new(RefCell::new(Vec::<ReplyFrame>::new()));
        let sink_frames = frames.clone();

        let (reply, handle) = abortable_reply(
            "hola".to_string(),
            ReplyPolicy::default(),
            ImmediateScheduler::new(),
            move |frame| sink_frames.borrow_mut().push(frame),
        );
        handle.abort();

        assert_eq!(reply.await, ReplyOutcome::Cancelled);
        assert!(frames.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_unaborted_reply_completes() {
        let frames = Rc::new(RefCell::new(Vec::<ReplyFrame>::new()));
        let sink_frames = frames.clone();

        let (reply, _handle) = abortable_reply(
            "hola".to_string(),
            ReplyPolicy::default(),
            ImmediateScheduler::new(),
            move |frame| sink_frames.borrow_mut().push(frame),
        );

        assert_eq!(reply.await, ReplyOutcome::Completed);
        assert_eq!(frames.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_wall_clock_reply_can_be_cut_short() {
        use medichat::chat::WallClockScheduler;

        let frames = Rc::new(RefCell::new(Vec::<ReplyFrame>::new()));
        let sink_frames = frames.clone();
        let (reply, handle) = abortable_reply(
            "hola".to_string(),
            ReplyPolicy::Fixed {
                delay: Duration::from_secs(30),
            },
            WallClockScheduler,
            move |frame| sink_frames.borrow_mut().push(frame),
        );

        let cancel = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            handle.abort();
        };
        let (outcome, ()) = futures::join!(reply, cancel);

        assert_eq!(outcome, ReplyOutcome::Cancelled);
        assert!(frames.borrow().is_empty());
    }
}

mod enter_to_submit_tests {
    use super::*;

    #[test]
    fn test_enter_appends_user_entry_and_placeholder() {
        let mut transcript = Transcript::new();
        let submission = submit_on_keydown(true, false, "hola", &mut transcript)
            .expect("Enter should submit");

        let msgs = transcript.messages();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].sender, Sender::User);
        assert_eq!(msgs[0].text, "hola");
        assert_eq!(msgs[1].sender, Sender::Bot);
        assert_eq!(msgs[1].state, MessageState::Typing);
        assert_eq!(submission.bot_index, 1);
    }

    #[test]
    fn test_shift_enter_appends_nothing() {
        let mut transcript = Transcript::new();
        assert!(submit_on_keydown(true, true, "hola", &mut transcript).is_none());
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_other_keys_append_nothing() {
        let mut transcript = Transcript::new();
        assert!(submit_on_keydown(false, false, "hola", &mut transcript).is_none());
        assert!(submit_on_keydown(false, true, "hola", &mut transcript).is_none());
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_enter_on_blank_draft_appends_nothing() {
        let mut transcript = Transcript::new();
        assert!(submit_on_keydown(true, false, "   ", &mut transcript).is_none());
        assert!(transcript.is_empty());
    }

    #[tokio::test]
    async fn test_enter_then_reply_completes_placeholder() {
        let transcript = Rc::new(RefCell::new(Transcript::new()));
        let submission = submit_on_keydown(true, false, "dosis", &mut transcript.borrow_mut())
            .expect("Enter should submit");

        let sink_transcript = transcript.clone();
        let bot_index = submission.bot_index;
        run_reply(
            submission.text,
            ReplyPolicy::default(),
            ImmediateScheduler::new(),
            move |frame| sink_transcript.borrow_mut().apply(bot_index, &frame),
        )
        .await;

        let transcript = transcript.borrow();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[1].text, simulated_reply("dosis"));
        assert_eq!(transcript.messages()[1].state, MessageState::Complete);
    }
}
