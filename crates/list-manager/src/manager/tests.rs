//! ListManager tests against in-memory fakes of the source and UI ports.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::*;
use crate::ports::{ConfirmPrompt, Tone};
use crate::state::ListView;

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: u32,
    text: String,
}

impl Record for Row {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.text.as_str()]
    }
}

fn row(id: u32, text: &str) -> Row {
    Row { id, text: text.to_string() }
}

/// A scripted response, optionally held back until the gate opens
struct Planned<T> {
    gate: Option<oneshot::Receiver<()>>,
    result: ListResult<T>,
}

impl<T> Planned<T> {
    fn now(result: ListResult<T>) -> Self {
        Self { gate: None, result }
    }

    fn gated(result: ListResult<T>) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        (Self { gate: Some(rx), result }, tx)
    }
}

#[derive(Default)]
struct FakeSource {
    server: RefCell<Vec<Row>>,
    calls: RefCell<Vec<&'static str>>,
    fetch_plan: RefCell<VecDeque<Planned<Vec<Row>>>>,
    mutation_plan: RefCell<VecDeque<Planned<Ack>>>,
    patch_updates: bool,
}

impl FakeSource {
    fn with_rows(rows: Vec<Row>) -> Self {
        Self { server: RefCell::new(rows), ..Default::default() }
    }

    fn calls(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == name).count()
    }

    async fn next_mutation(&self) -> ListResult<Ack> {
        let planned = self.mutation_plan.borrow_mut().pop_front();
        match planned {
            Some(Planned { gate, result }) => {
                if let Some(gate) = gate {
                    gate.await.ok();
                }
                result
            }
            None => Ok(Ack::default()),
        }
    }
}

#[async_trait(?Send)]
impl ListSource<Row> for FakeSource {
    fn noun(&self) -> &'static str {
        "row"
    }

    async fn fetch(&self) -> ListResult<Vec<Row>> {
        self.calls.borrow_mut().push("fetch");
        let planned = self.fetch_plan.borrow_mut().pop_front();
        match planned {
            Some(Planned { gate, result }) => {
                if let Some(gate) = gate {
                    gate.await.ok();
                }
                result
            }
            None => Ok(self.server.borrow().clone()),
        }
    }

    async fn create(&self, fields: &FormFields) -> ListResult<Ack> {
        self.calls.borrow_mut().push("create");
        let ack = self.next_mutation().await?;
        let mut server = self.server.borrow_mut();
        let id = server.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        server.push(row(id, fields.text("text")));
        Ok(ack)
    }

    async fn update(&self, target: &Row, fields: &FormFields) -> ListResult<Ack> {
        self.calls.borrow_mut().push("update");
        let ack = self.next_mutation().await?;
        if let Some(r) = self.server.borrow_mut().iter_mut().find(|r| r.id == target.id) {
            r.text = fields.text("text").to_string();
        }
        Ok(ack)
    }

    async fn delete(&self, target: &Row) -> ListResult<Ack> {
        self.calls.borrow_mut().push("delete");
        let ack = self.next_mutation().await?;
        self.server.borrow_mut().retain(|r| r.id != target.id);
        Ok(ack)
    }

    fn blank_form(&self) -> FormFields {
        FormFields::new().with("text", "")
    }

    fn edit_form(&self, record: &Row) -> FormFields {
        FormFields::new().with("text", record.text.clone())
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["text"]
    }

    fn patch(&self, target: &Row, fields: &FormFields) -> Option<Row> {
        self.patch_updates.then(|| row(target.id, fields.text("text")))
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }

    fn count(&self) -> usize {
        self.notices.borrow().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

struct FakeConfirm {
    answer: bool,
    asked: RefCell<Vec<ConfirmPrompt>>,
}

#[async_trait(?Send)]
impl Confirm for FakeConfirm {
    async fn confirm(&self, prompt: ConfirmPrompt) -> bool {
        self.asked.borrow_mut().push(prompt);
        self.answer
    }
}

struct Harness {
    cell: Rc<RefCell<ListState<Row>>>,
    source: Rc<FakeSource>,
    notifier: Rc<RecordingNotifier>,
    confirm: Rc<FakeConfirm>,
    manager: ListManager<Row, Rc<RefCell<ListState<Row>>>>,
}

fn harness(source: FakeSource, confirm_answer: bool) -> Harness {
    let cell = Rc::new(RefCell::new(ListState::new(10)));
    let source = Rc::new(source);
    let notifier = Rc::new(RecordingNotifier::default());
    let confirm = Rc::new(FakeConfirm { answer: confirm_answer, asked: RefCell::new(Vec::new()) });
    let manager = ListManager::new(cell.clone(), source.clone(), confirm.clone(), notifier.clone());
    Harness { cell, source, notifier, confirm, manager }
}

fn ids(h: &Harness) -> Vec<u32> {
    h.cell.borrow().items().iter().map(|r| r.id).collect()
}

#[tokio::test]
async fn test_load_empty_list() {
    let h = harness(FakeSource::default(), true);
    h.manager.load().await.unwrap();

    let state = h.cell.borrow();
    assert_eq!(state.view_status(), ListView::NoRecords);
    assert_eq!(state.total_pages(), 1);
    assert_eq!(h.notifier.count(), 0);
}

#[tokio::test]
async fn test_load_failure_keeps_items() {
    let h = harness(FakeSource::with_rows(vec![row(1, "a"), row(2, "b"), row(3, "c")]), true);
    h.manager.load().await.unwrap();

    h.source
        .fetch_plan
        .borrow_mut()
        .push_back(Planned::now(Err(ListError::Application("Server busy".to_string()))));
    let err = h.manager.load().await.unwrap_err();

    assert_eq!(err, ListError::Application("Server busy".to_string()));
    assert_eq!(ids(&h), vec![1, 2, 3]);
    assert_eq!(h.notifier.last(), Some(Notice::error("Server busy")));
}

#[tokio::test]
async fn test_transport_failure_uses_generic_message() {
    let h = harness(FakeSource::default(), true);
    h.source
        .fetch_plan
        .borrow_mut()
        .push_back(Planned::now(Err(ListError::Transport("offline".to_string()))));
    assert!(h.manager.load().await.is_err());
    assert_eq!(h.notifier.last(), Some(Notice::error("Something went wrong while loading rows")));
    assert_eq!(h.cell.borrow().view_status(), ListView::NoRecords);
}

#[tokio::test]
async fn test_search_without_matches_keeps_items() {
    let h = harness(FakeSource::with_rows(vec![row(1, "cook dinner"), row(2, "walk")]), true);
    h.manager.load().await.unwrap();
    h.manager.search("zebra");

    let state = h.cell.borrow();
    assert_eq!(state.view_status(), ListView::NoResults);
    assert_eq!(state.items().len(), 2);
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let h = harness(FakeSource::with_rows(vec![row(1, "a"), row(2, "b")]), false);
    h.manager.load().await.unwrap();

    let deleted = h.manager.delete(2).await.unwrap();

    assert!(!deleted);
    assert_eq!(h.source.calls("delete"), 0);
    assert_eq!(ids(&h), vec![1, 2]);
    assert_eq!(h.confirm.asked.borrow().len(), 1);
    assert_eq!(h.confirm.asked.borrow()[0].text, "Do you want to delete this row?");
}

#[tokio::test]
async fn test_confirmed_delete_then_reload() {
    let h = harness(FakeSource::with_rows(vec![row(1, "a"), row(2, "b")]), true);
    h.manager.load().await.unwrap();

    assert!(h.manager.delete(2).await.unwrap());
    assert_eq!(ids(&h), vec![1]);
    assert_eq!(h.notifier.last(), Some(Notice::success("Row deleted successfully")));

    h.manager.load().await.unwrap();
    assert_eq!(ids(&h), vec![1]);
}

#[tokio::test]
async fn test_failed_delete_surfaces_message() {
    let h = harness(FakeSource::with_rows(vec![row(1, "a"), row(2, "b")]), true);
    h.manager.load().await.unwrap();
    h.source
        .mutation_plan
        .borrow_mut()
        .push_back(Planned::now(Err(ListError::Application("Row is in use".to_string()))));

    assert!(h.manager.delete(1).await.is_err());
    assert_eq!(ids(&h), vec![1, 2]);
    assert_eq!(h.notifier.last(), Some(Notice::error("Row is in use")));
    assert!(!h.cell.borrow().is_busy());
}

#[tokio::test]
async fn test_delete_of_unlisted_id_is_noop() {
    let h = harness(FakeSource::with_rows(vec![row(1, "a")]), true);
    h.manager.load().await.unwrap();
    assert!(!h.manager.delete(42).await.unwrap());
    assert!(h.confirm.asked.borrow().is_empty());
}

#[tokio::test]
async fn test_create_round_trip() {
    let h = harness(FakeSource::with_rows(vec![row(1, "a")]), true);
    h.manager.load().await.unwrap();

    h.manager.open_create();
    h.manager.set_field("text", FieldValue::Text("hold hands".to_string()));
    h.manager.submit().await.unwrap();

    let state = h.cell.borrow();
    assert!(!state.modal().is_open());
    assert_eq!(state.items().last(), Some(&row(2, "hold hands")));
    assert_eq!(*h.source.calls.borrow(), vec!["fetch", "create", "fetch"]);
    assert_eq!(h.notifier.last(), Some(Notice::success("Row created successfully")));
}

#[tokio::test]
async fn test_server_success_message_is_used() {
    let h = harness(FakeSource::default(), true);
    h.source
        .mutation_plan
        .borrow_mut()
        .push_back(Planned::now(Ok(Ack::with_message("Question added"))));
    h.manager.create(FormFields::new().with("text", "x")).await.unwrap();
    assert_eq!(h.notifier.last(), Some(Notice::success("Question added")));
}

#[tokio::test]
async fn test_validation_blocks_request() {
    let h = harness(FakeSource::default(), true);
    h.manager.load().await.unwrap();
    h.manager.open_create();
    h.manager.set_field("text", FieldValue::Text("   ".to_string()));

    let err = h.manager.submit().await.unwrap_err();

    assert_eq!(err, ListError::Validation("Text cannot be empty".to_string()));
    assert_eq!(h.source.calls("create"), 0);
    let state = h.cell.borrow();
    assert!(state.modal().is_open());
    assert_eq!(state.modal().error(), Some("Text cannot be empty"));
    assert_eq!(h.notifier.last().map(|n| n.tone), Some(Tone::Warning));
}

#[tokio::test]
async fn test_failed_update_keeps_modal_open() {
    let h = harness(FakeSource::with_rows(vec![row(1, "a")]), true);
    h.manager.load().await.unwrap();
    h.manager.open_edit(row(1, "a"));
    h.manager.set_field("text", FieldValue::Text("b".to_string()));
    h.source
        .mutation_plan
        .borrow_mut()
        .push_back(Planned::now(Err(ListError::Application("Duplicate question".to_string()))));

    assert!(h.manager.submit().await.is_err());

    let state = h.cell.borrow();
    assert!(state.modal().is_open());
    assert_eq!(state.modal().error(), Some("Duplicate question"));
    assert_eq!(state.items(), &[row(1, "a")]);
    assert!(!state.is_busy());
}

#[tokio::test]
async fn test_update_of_vanished_row_reports_in_modal() {
    let h = harness(FakeSource::with_rows(vec![row(1, "a"), row(2, "b")]), true);
    h.manager.load().await.unwrap();
    h.manager.open_edit(row(2, "b"));
    h.source.server.borrow_mut().retain(|r| r.id != 2);
    h.manager.load().await.unwrap();

    let result = h.manager.submit().await;

    assert_eq!(result, Err(ListError::Validation("This row no longer exists".to_string())));
    let state = h.cell.borrow();
    assert!(state.modal().is_open());
    assert_eq!(state.modal().error(), Some("This row no longer exists"));
    assert_eq!(h.notifier.last().map(|n| n.tone), Some(Tone::Warning));
    assert_eq!(h.source.calls("update"), 0);
}

#[tokio::test]
async fn test_update_patches_in_place() {
    let source = FakeSource { patch_updates: true, ..FakeSource::with_rows(vec![row(1, "a"), row(2, "b")]) };
    let h = harness(source, true);
    h.manager.load().await.unwrap();

    h.manager.open_edit(row(2, "b"));
    h.manager.set_field("text", FieldValue::Text("better".to_string()));
    h.manager.submit().await.unwrap();

    assert_eq!(h.source.calls("fetch"), 1);
    assert_eq!(h.cell.borrow().find(&2), Some(&row(2, "better")));
    assert!(!h.cell.borrow().modal().is_open());
}

#[tokio::test]
async fn test_update_refetches_without_patch() {
    let h = harness(FakeSource::with_rows(vec![row(1, "a")]), true);
    h.manager.load().await.unwrap();
    h.manager.update(1, FormFields::new().with("text", "z")).await.unwrap();

    assert_eq!(h.source.calls("fetch"), 2);
    assert_eq!(h.cell.borrow().find(&1), Some(&row(1, "z")));
}

#[tokio::test]
async fn test_soft_lock_rejects_duplicate_submit() {
    let h = harness(FakeSource::default(), true);
    let (planned, release) = Planned::gated(Ok(Ack::default()));
    h.source.mutation_plan.borrow_mut().push_back(planned);

    let fields = FormFields::new().with("text", "once");
    let (first, second) = tokio::join!(h.manager.create(fields.clone()), async {
        let second = h.manager.create(fields.clone()).await;
        release.send(()).ok();
        second
    });

    assert!(first.is_ok());
    assert_eq!(second, Err(ListError::Busy));
    assert_eq!(h.source.calls("create"), 1);
    assert_eq!(ids(&h), vec![1]);
}

#[tokio::test]
async fn test_delete_during_pending_submit_is_rejected() {
    let h = harness(FakeSource::with_rows(vec![row(1, "a")]), true);
    h.manager.load().await.unwrap();
    let (planned, release) = Planned::gated(Ok(Ack::default()));
    h.source.mutation_plan.borrow_mut().push_back(planned);

    let (created, deleted) = tokio::join!(h.manager.create(FormFields::new().with("text", "b")), async {
        let deleted = h.manager.delete(1).await;
        release.send(()).ok();
        deleted
    });

    assert!(created.is_ok());
    assert_eq!(deleted, Err(ListError::Busy));
    assert!(h.confirm.asked.borrow().is_empty());
    assert_eq!(h.source.calls("delete"), 0);
}

#[tokio::test]
async fn test_stale_load_is_discarded() {
    let h = harness(FakeSource::default(), true);
    let (old, release_old) = Planned::gated(Ok(vec![row(1, "old"), row(2, "old")]));
    let (new, release_new) = Planned::gated(Ok(vec![row(3, "new")]));
    h.source.fetch_plan.borrow_mut().extend([old, new]);

    let driver = async {
        release_new.send(()).ok();
        while h.cell.borrow().items().is_empty() {
            tokio::task::yield_now().await;
        }
        release_old.send(()).ok();
    };
    let (first, second, ()) = tokio::join!(h.manager.load(), h.manager.load(), driver);

    assert!(first.is_ok() && second.is_ok());
    assert_eq!(ids(&h), vec![3]);
    assert!(!h.cell.borrow().is_loading());
}

#[tokio::test]
async fn test_response_after_dispose_is_ignored() {
    let h = harness(FakeSource::default(), true);
    let (planned, release) = Planned::gated(Err(ListError::Transport("late".to_string())));
    h.source.fetch_plan.borrow_mut().push_back(planned);

    let (result, ()) = tokio::join!(h.manager.load(), async {
        h.manager.dispose();
        release.send(()).ok();
    });

    assert!(result.is_ok());
    assert!(h.manager.is_disposed());
    assert_eq!(h.notifier.count(), 0);
    assert!(h.cell.borrow().items().is_empty());
}

#[tokio::test]
async fn test_close_modal_clears_staged_fields() {
    let h = harness(FakeSource::with_rows(vec![row(1, "a")]), true);
    h.manager.load().await.unwrap();

    h.manager.open_edit(row(1, "a"));
    h.manager.set_field("text", FieldValue::Text("draft".to_string()));
    h.manager.close_modal();
    h.manager.open_create();

    let state = h.cell.borrow();
    assert_eq!(state.modal().mode(), Some(ModalMode::Create));
    assert!(state.modal().target().is_none());
    assert_eq!(state.modal().fields().map(|f| f.text("text")), Some(""));
}

#[tokio::test]
async fn test_view_submit_just_closes() {
    let h = harness(FakeSource::with_rows(vec![row(1, "a")]), true);
    h.manager.load().await.unwrap();
    h.manager.open_view(row(1, "a"));
    h.manager.submit().await.unwrap();
    assert!(!h.cell.borrow().modal().is_open());
    assert_eq!(h.source.calls("update"), 0);
}
