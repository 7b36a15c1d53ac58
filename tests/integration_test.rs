use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use question_manager::clients::ApiCall;
use question_manager::error::Operation;
use question_manager::{
    Config, DraftField, MemoryQuestionClient, QuestionApi, QuestionDraft, QuestionId,
    QuestionManager, QuestionType, Severity, SubmitOutcome,
};
use tokio_test::assert_ok;

fn draft(text: &str, category: &str) -> QuestionDraft {
    QuestionDraft {
        question_text: text.to_string(),
        category: category.to_string(),
        ..Default::default()
    }
}

fn seeded_client() -> Arc<MemoryQuestionClient> {
    Arc::new(MemoryQuestionClient::seeded(vec![
        draft("What is your name?", "profile"),
        draft("How old are you?", "profile"),
        draft("Any comments?", ""),
    ]))
}

/// 确认结果可在测试中切换
fn manager_with_confirm(client: Arc<MemoryQuestionClient>, accept: Arc<AtomicBool>) -> QuestionManager {
    let _ = tracing_subscriber::fmt::try_init();
    QuestionManager::new(
        client,
        Box::new(move |_: &str| accept.load(Ordering::SeqCst)),
        &Config::default(),
    )
}

fn manager(client: Arc<MemoryQuestionClient>) -> QuestionManager {
    manager_with_confirm(client, Arc::new(AtomicBool::new(true)))
}

#[tokio::test]
async fn test_list_is_idempotent_without_mutation() {
    let client = seeded_client();
    let first = assert_ok!(client.list().await);
    let second = assert_ok!(client.list().await);
    assert_eq!(first, second);

    let mut manager = manager(client.clone());
    manager.mount().await;
    let shown = manager.state().questions.clone();
    manager.refresh().await;
    assert_eq!(manager.state().questions, shown);
}

#[tokio::test]
async fn test_create_round_trip() {
    let client = seeded_client();
    let mut manager = manager(client.clone());
    manager.mount().await;
    let before = manager.state().questions.len();

    manager.open_add();
    manager.change_field(DraftField::QuestionText("Where do you live?".to_string()));
    manager.change_field(DraftField::Category("profile".to_string()));
    let expected = manager.state().draft.clone();

    let outcome = manager.submit().await;
    assert!(matches!(outcome, SubmitOutcome::Saved(_)));

    let questions = &manager.state().questions;
    assert_eq!(questions.len(), before + 1);
    assert_eq!(questions.iter().filter(|q| q.to_draft() == expected).count(), 1);
}

#[tokio::test]
async fn test_update_targets_only_selected_question() {
    let client = seeded_client();
    let mut manager = manager(client.clone());
    manager.mount().await;
    let before = manager.state().questions.clone();

    assert!(manager.open_edit_row(1));
    manager.change_field(DraftField::QuestionType(QuestionType::Number));
    manager.change_field(DraftField::Required(true));
    manager.submit().await;

    let after = &manager.state().questions;
    assert_eq!(after.len(), before.len());
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[1].id, before[1].id);
    assert_eq!(after[1].question_type, QuestionType::Number);
    assert!(after[1].required);
    assert_eq!(after[1].question_text, before[1].question_text);
    assert_eq!(manager.state().notification.message, "Question updated successfully");
}

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let client = seeded_client();
    let mut manager = manager(client.clone());
    manager.mount().await;
    let target = manager.state().questions[0].id.clone();

    manager.delete(&target).await;

    let after = &manager.state().questions;
    assert_eq!(after.len(), 2);
    assert!(after.iter().all(|q| q.id != target));
    assert_eq!(manager.state().notification.message, "Question deleted successfully");
    assert_eq!(manager.state().notification.severity, Severity::Success);
}

#[tokio::test]
async fn test_submit_dispatch_follows_selection() {
    let client = seeded_client();
    let mut manager = manager(client.clone());
    manager.mount().await;

    // 编辑后取消，再新建：此时没有选中题目，必须走 create
    assert!(manager.open_edit_row(0));
    manager.close_dialog();
    manager.open_add();
    manager.change_field(DraftField::QuestionText("New one".to_string()));
    manager.submit().await;
    assert_eq!(client.count(Operation::Create), 1);
    assert_eq!(client.count(Operation::Update), 0);

    assert!(manager.open_edit_row(0));
    manager.submit().await;
    assert_eq!(client.count(Operation::Create), 1);
    assert_eq!(client.count(Operation::Update), 1);
}

#[tokio::test]
async fn test_favorite_color_scenario() {
    let client = Arc::new(MemoryQuestionClient::new());
    let mut manager = manager(client.clone());
    manager.mount().await;

    manager.open_add();
    manager.change_field(DraftField::QuestionText("Favorite color?".to_string()));
    manager.change_field(DraftField::QuestionType(QuestionType::MultipleChoice));
    manager.change_field(DraftField::Options(vec!["Red".to_string(), "Blue".to_string()]));
    manager.change_field(DraftField::Category("preferences".to_string()));
    manager.change_field(DraftField::Required(true));

    manager.submit().await;

    let payload = QuestionDraft {
        question_text: "Favorite color?".to_string(),
        question_type: QuestionType::MultipleChoice,
        options: vec!["Red".to_string(), "Blue".to_string()],
        category: "preferences".to_string(),
        required: true,
    };
    // 加载 → 新建 → 刷新
    assert_eq!(
        client.calls(),
        vec![ApiCall::List, ApiCall::Create(payload.clone()), ApiCall::List]
    );
    assert_eq!(client.count(Operation::Create), 1);

    let state = manager.state();
    assert!(state.notification.visible);
    assert_eq!(state.notification.severity, Severity::Success);
    assert_eq!(state.notification.message, "Question created successfully");
    assert_eq!(state.questions.len(), 1);
    assert_eq!(state.questions[0].to_draft(), payload);
    assert!(!state.dialog_open);
    assert!(state.draft.is_empty());
    assert!(state.selected.is_none());
}

#[tokio::test]
async fn test_declined_delete_changes_nothing() {
    let client = seeded_client();
    let accept = Arc::new(AtomicBool::new(false));
    let mut manager = manager_with_confirm(client.clone(), accept.clone());
    manager.mount().await;
    let before = manager.state().clone();

    let target = before.questions[2].id.clone();
    manager.delete(&target).await;

    assert_eq!(client.count(Operation::Delete), 0);
    assert_eq!(manager.state().questions, before.questions);
    assert!(!manager.state().notification.visible);

    // 同意后才真正删除
    accept.store(true, Ordering::SeqCst);
    manager.delete(&target).await;
    assert_eq!(client.count(Operation::Delete), 1);
    assert_eq!(manager.state().questions.len(), 2);
}

#[tokio::test]
async fn test_failures_surface_as_notifications_only() {
    let client = seeded_client();
    let mut manager = manager(client.clone());
    manager.mount().await;
    let before = manager.state().questions.clone();

    client.fail_next(Operation::Delete);
    manager.delete(&QuestionId::from("q1")).await;
    assert_eq!(manager.state().questions, before);
    assert_eq!(manager.state().notification.message, "Failed to delete question");

    client.fail_next(Operation::Update);
    assert!(manager.open_edit_row(0));
    manager.change_field(DraftField::Category("changed".to_string()));
    let outcome = manager.submit().await;
    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(manager.state().dialog_open);
    assert_eq!(manager.state().draft.category, "changed");
    assert_eq!(manager.state().notification.message, "Operation failed");
    assert_eq!(manager.state().notification.severity, Severity::Error);

    client.fail_next(Operation::List);
    manager.close_dialog();
    manager.refresh().await;
    assert_eq!(manager.state().questions, before);
    assert_eq!(manager.state().notification.message, "Failed to fetch questions");
}
