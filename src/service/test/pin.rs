use super::*;
use crate::error::AppError;
use test_utils::serenity::{create_test_attachment, create_test_pin_summary};

/// Tests that a message reaching the threshold is pinned.
///
/// Verifies that the summary embed is posted to the pin channel and carries the
/// synthetic source URL, author and content of the original message.
///
/// Expected: Ok(Pinned) with one embed in the pin channel
#[tokio::test]
async fn pins_message_at_threshold() {
    let api = api_with_pinnable_message(3);
    let config = test_config();
    let lock = Mutex::new(());
    let service = PinService::new(&api, &config, &lock);

    let event = reaction_event(CHANNEL, MESSAGE, MEMBER, pin_emoji());
    let outcome = service.handle_reaction(&event).await.unwrap();

    assert_eq!(outcome, PinOutcome::Pinned);

    let sent = api.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let (channel_id, embed) = &sent[0];
    assert_eq!(*channel_id, ChannelId::new(PIN_CHANNEL));
    assert_eq!(embed["url"], format!("http://msg.id/{MESSAGE}"));
    assert_eq!(embed["description"], "hi");
    assert_eq!(embed["author"]["name"], "alice");
    assert_eq!(
        embed["author"]["url"],
        format!("https://discord.com/channels/{GUILD}/{CHANNEL}/{MESSAGE}")
    );
}

/// Tests that a message below the threshold is never pinned.
///
/// Expected: Ok(BelowThreshold) with no embed sent
#[tokio::test]
async fn below_threshold_never_pins() {
    let api = api_with_pinnable_message(2);
    let config = test_config();
    let lock = Mutex::new(());
    let service = PinService::new(&api, &config, &lock);

    let event = reaction_event(CHANNEL, MESSAGE, MEMBER, pin_emoji());
    let outcome = service.handle_reaction(&event).await.unwrap();

    assert_eq!(outcome, PinOutcome::BelowThreshold { count: 2 });
    assert_eq!(api.sent_count(), 0);
}

/// Tests that reactions with other emoji do not count towards the threshold.
///
/// Expected: Ok(BelowThreshold { count: 0 }) with no embed sent
#[tokio::test]
async fn other_emoji_do_not_count() {
    let author = create_test_user(AUTHOR, "alice", false);
    let mut message = create_test_message(MESSAGE, CHANNEL, Some(GUILD), author, "hi");
    message.reactions.push(create_test_reaction(
        &ReactionType::Unicode("👍".to_string()),
        10,
    ));
    let api = MockDiscordApi::new()
        .with_user(create_test_user(MEMBER, "bob", false))
        .with_message(message);
    let config = test_config();
    let lock = Mutex::new(());
    let service = PinService::new(&api, &config, &lock);

    let event = reaction_event(CHANNEL, MESSAGE, MEMBER, ReactionType::Unicode("👍".to_string()));
    let outcome = service.handle_reaction(&event).await.unwrap();

    assert_eq!(outcome, PinOutcome::BelowThreshold { count: 0 });
    assert_eq!(api.sent_count(), 0);
}

/// Tests that pinning the same message twice produces a single summary.
///
/// The second reaction finds the first summary in the pin channel history.
///
/// Expected: Ok(Pinned) then Ok(AlreadyPinned) with one embed sent
#[tokio::test]
async fn pinning_twice_posts_once() {
    let api = api_with_pinnable_message(4);
    let config = test_config();
    let lock = Mutex::new(());
    let service = PinService::new(&api, &config, &lock);

    let first = reaction_event(CHANNEL, MESSAGE, MEMBER, pin_emoji());
    let second = reaction_event(CHANNEL, MESSAGE, AUTHOR, pin_emoji());

    assert_eq!(
        service.handle_reaction(&first).await.unwrap(),
        PinOutcome::Pinned
    );
    assert_eq!(
        service.handle_reaction(&second).await.unwrap(),
        PinOutcome::AlreadyPinned
    );
    assert_eq!(api.sent_count(), 1);
}

/// Tests that concurrent reactions on the same message pin it only once.
///
/// Both attempts are suspended inside the history scan, so without the pin lock each
/// would miss the other's summary and post its own.
///
/// Expected: exactly one Pinned outcome and one embed sent
#[tokio::test]
async fn concurrent_reactions_pin_once() {
    let api = api_with_pinnable_message(5);
    let config = test_config();
    let lock = Mutex::new(());
    let service = PinService::new(&api, &config, &lock);

    let first = reaction_event(CHANNEL, MESSAGE, MEMBER, pin_emoji());
    let second = reaction_event(CHANNEL, MESSAGE, AUTHOR, pin_emoji());

    let (a, b) = tokio::join!(
        service.handle_reaction(&first),
        service.handle_reaction(&second)
    );
    let outcomes = [a.unwrap(), b.unwrap()];

    assert_eq!(
        outcomes
            .iter()
            .filter(|outcome| **outcome == PinOutcome::Pinned)
            .count(),
        1
    );
    assert!(outcomes.contains(&PinOutcome::AlreadyPinned));
    assert_eq!(api.sent_count(), 1);
}

/// Tests that an existing summary posted before startup is detected.
///
/// Expected: Ok(AlreadyPinned) with no embed sent
#[tokio::test]
async fn existing_summary_in_history_blocks_pin() {
    let api = api_with_pinnable_message(3).with_history(
        ChannelId::new(PIN_CHANNEL),
        create_test_pin_summary(7000, PIN_CHANNEL, &format!("http://msg.id/{MESSAGE}")),
    );
    let config = test_config();
    let lock = Mutex::new(());
    let service = PinService::new(&api, &config, &lock);

    let event = reaction_event(CHANNEL, MESSAGE, MEMBER, pin_emoji());
    let outcome = service.handle_reaction(&event).await.unwrap();

    assert_eq!(outcome, PinOutcome::AlreadyPinned);
    assert_eq!(api.sent_count(), 0);
}

/// Tests that summaries outside of the scanned history window are not considered.
///
/// Expected: Ok(Pinned) when the old summary is buried under newer messages
#[tokio::test]
async fn summary_outside_history_window_is_not_found() {
    let mut api = api_with_pinnable_message(3).with_history(
        ChannelId::new(PIN_CHANNEL),
        create_test_pin_summary(7000, PIN_CHANNEL, &format!("http://msg.id/{MESSAGE}")),
    );
    for id in 0..20 {
        api = api.with_history(
            ChannelId::new(PIN_CHANNEL),
            create_test_pin_summary(8000 + id, PIN_CHANNEL, &format!("http://msg.id/{}", id + 1)),
        );
    }
    let config = test_config();
    let lock = Mutex::new(());
    let service = PinService::new(&api, &config, &lock);

    let event = reaction_event(CHANNEL, MESSAGE, MEMBER, pin_emoji());
    let outcome = service.handle_reaction(&event).await.unwrap();

    assert_eq!(outcome, PinOutcome::Pinned);
}

/// Tests that reactions by bots never trigger a pin.
///
/// Expected: Ok(Skipped(BotUser)) without fetching the message
#[tokio::test]
async fn bot_reaction_never_pins() {
    let api = api_with_pinnable_message(10);
    let config = test_config();
    let lock = Mutex::new(());
    let service = PinService::new(&api, &config, &lock);

    let event = reaction_event(CHANNEL, MESSAGE, BOT, pin_emoji());
    let outcome = service.handle_reaction(&event).await.unwrap();

    assert_eq!(outcome, PinOutcome::Skipped(SkipReason::BotUser));
    assert_eq!(api.fetch_count(), 0);
    assert_eq!(api.sent_count(), 0);
}

/// Tests that the member hint from the gateway is used instead of fetching the user.
///
/// Expected: Ok(Skipped(BotUser)) for an unknown user flagged as bot
#[tokio::test]
async fn member_hint_skips_user_lookup() {
    let api = api_with_pinnable_message(10);
    let config = test_config();
    let lock = Mutex::new(());
    let service = PinService::new(&api, &config, &lock);

    let mut event = reaction_event(CHANNEL, MESSAGE, 9999, pin_emoji());
    event.user_is_bot = Some(true);

    let outcome = service.handle_reaction(&event).await.unwrap();
    assert_eq!(outcome, PinOutcome::Skipped(SkipReason::BotUser));
}

/// Tests that reacting inside the pin channel never attempts a pin.
///
/// Expected: Ok(Skipped(PinChannel)) without fetching the message
#[tokio::test]
async fn pin_channel_reaction_never_pins() {
    let api = api_with_pinnable_message(10);
    let config = test_config();
    let lock = Mutex::new(());
    let service = PinService::new(&api, &config, &lock);

    let event = reaction_event(PIN_CHANNEL, MESSAGE, MEMBER, pin_emoji());
    let outcome = service.handle_reaction(&event).await.unwrap();

    assert_eq!(outcome, PinOutcome::Skipped(SkipReason::PinChannel));
    assert_eq!(api.fetch_count(), 0);
    assert_eq!(api.sent_count(), 0);
}

/// Tests that reactions in direct messages are ignored.
///
/// Expected: Ok(Skipped(NotGuild))
#[tokio::test]
async fn direct_message_reaction_is_ignored() {
    let api = api_with_pinnable_message(10);
    let config = test_config();
    let lock = Mutex::new(());
    let service = PinService::new(&api, &config, &lock);

    let mut event = reaction_event(CHANNEL, MESSAGE, MEMBER, pin_emoji());
    event.guild_id = None;

    let outcome = service.handle_reaction(&event).await.unwrap();
    assert_eq!(outcome, PinOutcome::Skipped(SkipReason::NotGuild));
}

/// Tests that the first attachment becomes the embed image.
///
/// Expected: Ok(Pinned) with the attachment URL as embed image
#[tokio::test]
async fn attachment_becomes_embed_image() {
    let author = create_test_user(AUTHOR, "alice", false);
    let mut message = create_test_message(MESSAGE, CHANNEL, Some(GUILD), author, "look");
    message.reactions.push(create_test_reaction(&pin_emoji(), 3));
    message
        .attachments
        .push(create_test_attachment(1, "https://cdn.example/first.png"));
    message
        .attachments
        .push(create_test_attachment(2, "https://cdn.example/second.png"));
    let api = MockDiscordApi::new()
        .with_user(create_test_user(MEMBER, "bob", false))
        .with_message(message);
    let config = test_config();
    let lock = Mutex::new(());
    let service = PinService::new(&api, &config, &lock);

    let event = reaction_event(CHANNEL, MESSAGE, MEMBER, pin_emoji());
    service.handle_reaction(&event).await.unwrap();

    let sent = api.sent.lock().unwrap();
    assert_eq!(sent[0].1["image"]["url"], "https://cdn.example/first.png");
}

/// Tests that API failures propagate to the caller.
///
/// Expected: Err(AppError::DiscordErr) when the summary cannot be sent
#[tokio::test]
async fn send_failure_propagates() {
    let api = api_with_pinnable_message(3).failing_sends();
    let config = test_config();
    let lock = Mutex::new(());
    let service = PinService::new(&api, &config, &lock);

    let event = reaction_event(CHANNEL, MESSAGE, MEMBER, pin_emoji());
    let result = service.handle_reaction(&event).await;

    assert!(matches!(result, Err(AppError::DiscordErr(_))));
}
