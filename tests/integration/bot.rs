use serde_json::json;

use shoplist::bot::api::{Outgoing, Update};
use shoplist::bot::handler::BotHandler;
use shoplist::core::persist::load_categories;

use crate::common::{build_context, make_temp_dir, run_desk, saved_list, write_valid_config};

const PARTNER: i64 = 4242;

fn text_update(update_id: i64, chat_id: i64, text: &str) -> Update {
    serde_json::from_value(json!({
        "update_id": update_id,
        "message": {
            "message_id": update_id * 10,
            "date": 1_700_000_000,
            "chat": { "id": chat_id, "type": "private" },
            "from": { "id": chat_id, "is_bot": false, "first_name": "Dana" },
            "text": text
        }
    }))
    .expect("update should deserialize")
}

fn sent_text(out: &[Outgoing]) -> String {
    match out {
        [Outgoing::Send { reply, .. }] => reply.text.clone(),
        other => panic!("expected a single send, got {other:?}"),
    }
}

#[test]
fn bot_messages_change_the_file_the_desk_reads() {
    let dir = make_temp_dir("bot");
    write_valid_config(&dir);
    let mut ctx = build_context(&dir);
    let mut handler = BotHandler::new(vec![PARTNER], ctx.logger.scoped("bot"));

    handler.handle_update(&mut ctx, &text_update(1, PARTNER, "חלב 2"));
    handler.handle_update(&mut ctx, &text_update(2, PARTNER, "לחם: מאפים"));
    handler.handle_update(&mut ctx, &text_update(3, PARTNER, "קניתי חלב"));

    let list = saved_list(&dir);
    assert_eq!(list.get("חלב").unwrap().quantity, 1);
    assert_eq!(list.category_of("לחם"), Some("מאפים"));
    let book = load_categories(&dir.join("categories.json")).unwrap();
    assert_eq!(book.get("לחם"), Some("מאפים"));

    let output = run_desk(&dir, "list\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("לחם"), "stdout: {stdout}");
    assert!(stdout.contains("Items: 2"), "stdout: {stdout}");
}

#[test]
fn desk_changes_reach_the_bot_list_reply() {
    let dir = make_temp_dir("bot");
    write_valid_config(&dir);
    let mut ctx = build_context(&dir);
    let mut handler = BotHandler::new(vec![PARTNER], ctx.logger.scoped("bot"));

    let output = run_desk(&dir, "add\nשמן זית\n3\nשמנים\n\nexit\n");
    assert!(output.status.success());

    let out = handler.handle_update(&mut ctx, &text_update(1, PARTNER, "רשימה"));
    let text = sent_text(&out);
    assert!(text.contains("שמן זית"), "reply: {text}");
    assert!(text.contains("שמנים"), "reply: {text}");
    assert!(text.contains('3'), "reply: {text}");
}

#[test]
fn strangers_cannot_touch_the_list() {
    let dir = make_temp_dir("bot");
    write_valid_config(&dir);
    let mut ctx = build_context(&dir);
    let mut handler = BotHandler::new(vec![PARTNER], ctx.logger.scoped("bot"));

    let out = handler.handle_update(&mut ctx, &text_update(1, 999, "חלב"));
    assert_eq!(sent_text(&out), shoplist::bot::replies::UNAUTHORIZED);
    assert!(saved_list(&dir).is_empty());
}
