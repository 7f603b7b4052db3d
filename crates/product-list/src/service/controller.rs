use crate::{
    abstract_trait::{
        ConfirmationGate, DynConfirmationGate, DynNotifier, DynProductMutation, DynTranslator,
        Notifier, ProductMutation, Translator,
    },
    domain::{
        fetch_state::{FetchState, QuerySnapshot},
        requests::DeleteRequest,
        response::{DeleteOutcome, FeedbackEvent, ProductListView, ProductRow},
        route::Route,
    },
    i18n::keys,
    model::Product,
    service::ViewHandle,
};
use chrono::{DateTime, Local, TimeZone};
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use shared::utils::{Method, Metrics, Status as StatusUtils, TracingContext};
use std::{
    collections::HashSet,
    fmt::Display,
    sync::{Arc, Mutex, MutexGuard},
};
use tokio::{sync::oneshot, task::JoinHandle, time::Instant};
use tracing::{debug, error, info, warn};

/// Reported when a failed delete carries no server message.
pub const UNKNOWN_ERROR: &str = "unknown error";

#[derive(Clone)]
pub struct ListMutationControllerDeps {
    pub translator: DynTranslator,
    pub mutation: DynProductMutation,
    pub confirmation: DynConfirmationGate,
    pub notifier: DynNotifier,
}

pub struct ListMutationController {
    translator: DynTranslator,
    mutation: DynProductMutation,
    confirmation: DynConfirmationGate,
    notifier: DynNotifier,
    pending: Mutex<HashSet<i32>>,
    view: ViewHandle,
    metrics: Metrics,
}

impl std::fmt::Debug for ListMutationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListMutationController")
            .field("translator", &"DynTranslator")
            .field("mutation", &"DynProductMutation")
            .field("confirmation", &"DynConfirmationGate")
            .field("notifier", &"DynNotifier")
            .field("view", &self.view)
            .finish()
    }
}

/// A delete running on the runtime. `confirmed` yields the user's answer as
/// soon as the prompt is closed and is dropped unanswered when no prompt was
/// shown.
#[derive(Debug)]
pub struct DeleteTask {
    pub confirmed: oneshot::Receiver<bool>,
    pub handle: JoinHandle<DeleteOutcome>,
}

/// Holds an id in the pending set for as long as its mutation is in flight.
struct PendingGuard<'a> {
    pending: &'a Mutex<HashSet<i32>>,
    id: i32,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        lock_pending(self.pending).remove(&self.id);
    }
}

fn lock_pending(pending: &Mutex<HashSet<i32>>) -> MutexGuard<'_, HashSet<i32>> {
    pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ListMutationController {
    pub fn new(deps: ListMutationControllerDeps, registry: &mut Registry) -> Self {
        let ListMutationControllerDeps {
            translator,
            mutation,
            confirmation,
            notifier,
        } = deps;

        let metrics = Metrics::new();
        metrics.register(
            registry,
            "product_list_controller",
            "ListMutationController",
        );

        Self {
            translator,
            mutation,
            confirmation,
            notifier,
            pending: Mutex::new(HashSet::new()),
            view: ViewHandle::new(),
            metrics,
        }
    }

    pub fn view_handle(&self) -> ViewHandle {
        self.view.clone()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn is_pending(&self, id: i32) -> bool {
        lock_pending(&self.pending).contains(&id)
    }

    pub fn render(&self, snapshot: &QuerySnapshot) -> ProductListView {
        self.render_at(snapshot, &Local::now())
    }

    pub fn render_at<Tz>(&self, snapshot: &QuerySnapshot, now: &DateTime<Tz>) -> ProductListView
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let state = snapshot.fetch_state();
        debug!("Rendering product list in state {state:?}");

        match state {
            FetchState::Loading => ProductListView::Loading {
                label: self.translator.t(keys::LOADING),
            },
            FetchState::Empty => ProductListView::Empty {
                message: self.translator.t(keys::EMPTY),
                create_label: self.translator.t(keys::CREATE),
                create: Route::CreateProduct,
            },
            FetchState::Populated => ProductListView::Populated {
                rows: snapshot
                    .products()
                    .unwrap_or_default()
                    .iter()
                    .map(|product| ProductRow::project(product, self.translator.as_ref(), now))
                    .collect(),
            },
        }
    }

    /// Runs the delete flow on the runtime so the caller keeps handling
    /// events while the mutation is in flight.
    pub fn spawn_delete(self: &Arc<Self>, product: Product) -> DeleteTask {
        let (answered, confirmed) = oneshot::channel();
        let this = Arc::clone(self);
        let handle = tokio::spawn(async move {
            this.run_delete(DeleteRequest::from(&product), Some(answered))
                .await
        });

        DeleteTask { confirmed, handle }
    }

    pub async fn request_delete(&self, product: &Product) -> DeleteOutcome {
        self.process_delete(DeleteRequest::from(product)).await
    }

    pub async fn process_delete(&self, request: DeleteRequest) -> DeleteOutcome {
        self.run_delete(request, None).await
    }

    async fn run_delete(
        &self,
        request: DeleteRequest,
        answered: Option<oneshot::Sender<bool>>,
    ) -> DeleteOutcome {
        if self.is_pending(request.id) {
            warn!(
                "Delete for product ID={} already in flight, ignoring",
                request.id
            );
            return DeleteOutcome::AlreadyPending;
        }

        let prompt = self
            .translator
            .translate(keys::DELETE_CONFIRM, &[("item", request.title.as_str())]);

        let approved = self.confirm(prompt).await;
        if let Some(answered) = answered {
            let _ = answered.send(approved);
        }

        if !approved {
            info!("Delete of product ID={} declined by user", request.id);
            return DeleteOutcome::Declined;
        }

        let Some(_guard) = self.try_mark_pending(request.id) else {
            warn!(
                "Delete for product ID={} started while confirming, ignoring",
                request.id
            );
            return DeleteOutcome::AlreadyPending;
        };

        info!("🗑️ Deleting product ID={} ({})", request.id, request.title);

        let method = Method::Delete;
        let tracing_ctx = self.start_tracing(
            "DeleteProduct",
            vec![
                KeyValue::new("component", "product_list"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("product.id", request.id.to_string()),
            ],
        );

        match self.mutation.delete_product(request.id).await {
            Ok(response) => {
                self.complete_tracing_success(&tracing_ctx, method, "Product deleted");

                let message = response.message().map(str::to_string);

                if !self.view.is_mounted() {
                    debug!(
                        "View torn down before delete of ID={} resolved, dropping feedback",
                        request.id
                    );
                    return DeleteOutcome::Detached;
                }

                if let Some(message) = &message {
                    self.notifier.emit(FeedbackEvent::success(message.clone()));
                }

                DeleteOutcome::Deleted { message }
            }
            Err(err) => {
                error!("❌ Failed to delete product ID={}: {err}", request.id);
                self.complete_tracing_error(&tracing_ctx, method, &err.to_string());

                let message = err
                    .user_message()
                    .unwrap_or_else(|| UNKNOWN_ERROR.to_string());

                if !self.view.is_mounted() {
                    debug!(
                        "View torn down before delete of ID={} failed, dropping feedback",
                        request.id
                    );
                    return DeleteOutcome::Detached;
                }

                self.notifier.emit(FeedbackEvent::error(message.clone()));

                DeleteOutcome::Failed { message }
            }
        }
    }

    /// Gates may wait on user input, so they run on the blocking pool.
    async fn confirm(&self, prompt: String) -> bool {
        let gate = Arc::clone(&self.confirmation);
        match tokio::task::spawn_blocking(move || gate.confirm(&prompt)).await {
            Ok(approved) => approved,
            Err(e) => {
                error!("Confirmation prompt failed: {e}");
                false
            }
        }
    }

    fn try_mark_pending(&self, id: i32) -> Option<PendingGuard<'_>> {
        if lock_pending(&self.pending).insert(id) {
            Some(PendingGuard {
                pending: &self.pending,
                id,
            })
        } else {
            None
        }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("product-list-controller")
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Client)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    fn complete_tracing_success(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete_tracing_internal(tracing_ctx, method, true, message);
    }

    fn complete_tracing_error(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        error_message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, false, error_message);
    }

    fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        confirm::{AlwaysConfirm, NeverConfirm},
        domain::response::Severity,
        i18n::StaticTranslator,
        model::LocalizedTitle,
    };
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::{mock, predicate::eq};
    use shared::{domain::responses::ApiResponse, errors::ClientError};
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            mpsc,
        },
        time::Duration,
    };
    use tokio::sync::Notify;

    mock! {
        pub Mutation {}

        #[async_trait]
        impl ProductMutation for Mutation {
            async fn delete_product(&self, id: i32) -> Result<ApiResponse<()>, ClientError>;
        }
    }

    mock! {
        pub Gate {}

        impl ConfirmationGate for Gate {
            fn confirm(&self, prompt: &str) -> bool;
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        events: Mutex<Vec<FeedbackEvent>>,
    }

    impl RecordingNotifier {
        fn events(&self) -> Vec<FeedbackEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn emit(&self, event: FeedbackEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    /// Blocks every delete until released, counting calls.
    #[derive(Default)]
    struct GatedMutation {
        calls: AtomicUsize,
        release: Notify,
    }

    #[async_trait]
    impl ProductMutation for GatedMutation {
        async fn delete_product(&self, _id: i32) -> Result<ApiResponse<()>, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            Ok(ApiResponse::with_message("Deleted"))
        }
    }

    /// Blocks inside `confirm` until the test sends an answer.
    struct ChannelGate {
        answers: Mutex<mpsc::Receiver<bool>>,
    }

    impl ConfirmationGate for ChannelGate {
        fn confirm(&self, _prompt: &str) -> bool {
            self.answers.lock().unwrap().recv().unwrap_or(false)
        }
    }

    fn shoe(id: i32) -> Product {
        Product {
            product_id: id,
            title: LocalizedTitle {
                en: Some("Shoe".into()),
                ar: None,
            },
            image: None,
            sku: None,
            quantity: None,
            price: 10.0,
            price_sale: None,
            is_active: false,
            created_at: DateTime::parse_from_rfc3339("2024-03-13T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            updated_at: None,
        }
    }

    fn controller(
        mutation: DynProductMutation,
        confirmation: DynConfirmationGate,
        notifier: Arc<RecordingNotifier>,
    ) -> ListMutationController {
        let mut registry = Registry::default();
        ListMutationController::new(
            ListMutationControllerDeps {
                translator: Arc::new(StaticTranslator::new("en")),
                mutation,
                confirmation,
                notifier,
            },
            &mut registry,
        )
    }

    fn mutation_returning(
        id: i32,
        result: Result<ApiResponse<()>, ClientError>,
    ) -> Arc<MockMutation> {
        let mut mutation = MockMutation::new();
        mutation
            .expect_delete_product()
            .with(eq(id))
            .times(1)
            .returning(move |_| result.clone());
        Arc::new(mutation)
    }

    async fn delete_with(
        result: Result<ApiResponse<()>, ClientError>,
    ) -> (DeleteOutcome, Vec<FeedbackEvent>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let ctl = controller(
            mutation_returning(1, result),
            Arc::new(AlwaysConfirm),
            notifier.clone(),
        );
        let outcome = ctl.request_delete(&shoe(1)).await;
        (outcome, notifier.events())
    }

    #[tokio::test]
    async fn declining_never_calls_the_mutation() {
        let mut mutation = MockMutation::new();
        mutation.expect_delete_product().times(0);
        let notifier = Arc::new(RecordingNotifier::default());
        let ctl = controller(Arc::new(mutation), Arc::new(NeverConfirm), notifier.clone());

        let outcome = ctl.request_delete(&shoe(1)).await;

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert!(notifier.events().is_empty());
        assert!(!ctl.is_pending(1));
    }

    #[tokio::test]
    async fn prompt_names_the_product() {
        let mut gate = MockGate::new();
        gate.expect_confirm()
            .withf(|prompt| prompt == "Are you sure you want to delete Shoe?")
            .times(1)
            .return_const(false);
        let mut mutation = MockMutation::new();
        mutation.expect_delete_product().times(0);

        let ctl = controller(
            Arc::new(mutation),
            Arc::new(gate),
            Arc::new(RecordingNotifier::default()),
        );

        assert_eq!(ctl.request_delete(&shoe(1)).await, DeleteOutcome::Declined);
    }

    #[tokio::test]
    async fn success_with_message_emits_one_success_event() {
        let (outcome, events) = delete_with(Ok(ApiResponse::with_message("Deleted"))).await;

        assert_eq!(
            outcome,
            DeleteOutcome::Deleted {
                message: Some("Deleted".into())
            }
        );
        assert_eq!(events, vec![FeedbackEvent::success("Deleted")]);
    }

    #[tokio::test]
    async fn silent_success_emits_nothing() {
        let (outcome, events) = delete_with(Ok(ApiResponse::default())).await;

        assert_eq!(outcome, DeleteOutcome::Deleted { message: None });
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn failure_reports_server_message() {
        let (outcome, events) = delete_with(Err(ClientError::Api {
            status: 404,
            message: Some("Not found".into()),
        }))
        .await;

        assert_eq!(
            outcome,
            DeleteOutcome::Failed {
                message: "Not found".into()
            }
        );
        assert_eq!(events, vec![FeedbackEvent::error("Not found")]);
    }

    #[tokio::test]
    async fn failure_without_message_reports_unknown_error() {
        let (_, events) = delete_with(Err(ClientError::Api {
            status: 500,
            message: None,
        }))
        .await;
        assert_eq!(events, vec![FeedbackEvent::error(UNKNOWN_ERROR)]);

        let (_, events) = delete_with(Err(ClientError::Transport("connection reset".into()))).await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity, Severity::Error);
        assert_eq!(events[0].message, "unknown error");
    }

    #[tokio::test]
    async fn outcome_is_recorded_in_metrics() {
        let notifier = Arc::new(RecordingNotifier::default());
        let ctl = controller(
            mutation_returning(1, Ok(ApiResponse::default())),
            Arc::new(AlwaysConfirm),
            notifier,
        );

        ctl.request_delete(&shoe(1)).await;

        assert_eq!(ctl.metrics().count(Method::Delete, StatusUtils::Success), 1);
        assert_eq!(ctl.metrics().count(Method::Delete, StatusUtils::Error), 0);
    }

    #[tokio::test]
    async fn pending_delete_for_same_id_is_not_dispatched_twice() {
        let mutation = Arc::new(GatedMutation::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let ctl = Arc::new(controller(
            mutation.clone(),
            Arc::new(AlwaysConfirm),
            notifier.clone(),
        ));

        let first = ctl.spawn_delete(shoe(1));
        assert_eq!(first.confirmed.await, Ok(true));
        while mutation.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        assert!(ctl.is_pending(1));

        let second = ctl.request_delete(&shoe(1)).await;
        assert_eq!(second, DeleteOutcome::AlreadyPending);

        let third = ctl.spawn_delete(shoe(1));
        assert!(third.confirmed.await.is_err());
        assert_eq!(third.handle.await.unwrap(), DeleteOutcome::AlreadyPending);
        assert_eq!(mutation.calls.load(Ordering::SeqCst), 1);

        mutation.release.notify_one();
        let first = first.handle.await.unwrap();
        assert_eq!(
            first,
            DeleteOutcome::Deleted {
                message: Some("Deleted".into())
            }
        );
        assert!(!ctl.is_pending(1));
        assert_eq!(notifier.events(), vec![FeedbackEvent::success("Deleted")]);
    }

    #[tokio::test]
    async fn different_ids_may_be_in_flight_together() {
        let mutation = Arc::new(GatedMutation::default());
        let ctl = Arc::new(controller(
            mutation.clone(),
            Arc::new(AlwaysConfirm),
            Arc::new(RecordingNotifier::default()),
        ));

        let first = ctl.spawn_delete(shoe(1));
        let second = ctl.spawn_delete(shoe(2));
        while mutation.calls.load(Ordering::SeqCst) < 2 {
            tokio::task::yield_now().await;
        }
        assert!(ctl.is_pending(1));
        assert!(ctl.is_pending(2));

        mutation.release.notify_one();
        mutation.release.notify_one();

        assert!(matches!(first.handle.await.unwrap(), DeleteOutcome::Deleted { .. }));
        assert!(matches!(second.handle.await.unwrap(), DeleteOutcome::Deleted { .. }));
    }

    #[tokio::test]
    async fn declined_prompt_is_reported_to_the_caller() {
        let mut mutation = MockMutation::new();
        mutation.expect_delete_product().times(0);
        let ctl = Arc::new(controller(
            Arc::new(mutation),
            Arc::new(NeverConfirm),
            Arc::new(RecordingNotifier::default()),
        ));

        let task = ctl.spawn_delete(shoe(1));

        assert_eq!(task.confirmed.await, Ok(false));
        assert_eq!(task.handle.await.unwrap(), DeleteOutcome::Declined);
    }

    #[tokio::test]
    async fn waiting_prompt_does_not_stall_other_tasks() {
        let (answer, answers) = mpsc::channel();
        let ctl = Arc::new(controller(
            mutation_returning(1, Ok(ApiResponse::default())),
            Arc::new(ChannelGate {
                answers: Mutex::new(answers),
            }),
            Arc::new(RecordingNotifier::default()),
        ));

        let task = ctl.spawn_delete(shoe(1));

        let other = tokio::spawn(async {
            tokio::task::yield_now().await;
            "rendered"
        });
        let other = tokio::time::timeout(Duration::from_secs(1), other)
            .await
            .expect("runtime stalled behind the prompt")
            .unwrap();
        assert_eq!(other, "rendered");

        answer.send(true).unwrap();
        assert_eq!(task.confirmed.await, Ok(true));
        assert_eq!(
            task.handle.await.unwrap(),
            DeleteOutcome::Deleted { message: None }
        );
    }

    #[tokio::test]
    async fn teardown_before_resolution_drops_feedback() {
        let notifier = Arc::new(RecordingNotifier::default());
        let view = ViewHandle::new();
        let handle = view.clone();

        let mut mutation = MockMutation::new();
        mutation
            .expect_delete_product()
            .times(1)
            .returning(move |_| {
                handle.teardown();
                Err(ClientError::Api {
                    status: 500,
                    message: Some("boom".into()),
                })
            });

        let mut ctl = controller(Arc::new(mutation), Arc::new(AlwaysConfirm), notifier.clone());
        ctl.view = view;

        let outcome = ctl.request_delete(&shoe(1)).await;

        assert_eq!(outcome, DeleteOutcome::Detached);
        assert!(notifier.events().is_empty());
        assert!(!ctl.is_pending(1));
    }

    #[tokio::test]
    async fn process_delete_uses_request_title() {
        let mut gate = MockGate::new();
        gate.expect_confirm()
            .withf(|prompt| prompt.contains("حذاء"))
            .times(1)
            .return_const(true);

        let ctl = controller(
            mutation_returning(9, Ok(ApiResponse::default())),
            Arc::new(gate),
            Arc::new(RecordingNotifier::default()),
        );

        let outcome = ctl
            .process_delete(DeleteRequest {
                id: 9,
                title: "حذاء".into(),
            })
            .await;
        assert_eq!(outcome, DeleteOutcome::Deleted { message: None });
    }

    #[test]
    fn renders_loading_and_empty_states() {
        let ctl = controller(
            Arc::new(MockMutation::new()),
            Arc::new(NeverConfirm),
            Arc::new(RecordingNotifier::default()),
        );

        assert_eq!(
            ctl.render(&QuerySnapshot::loading()),
            ProductListView::Loading {
                label: "Loading...".into()
            }
        );

        let stale_while_loading = QuerySnapshot {
            is_loading: true,
            data: Some(Arc::new(vec![shoe(1)])),
        };
        assert!(matches!(
            ctl.render(&stale_while_loading),
            ProductListView::Loading { .. }
        ));

        assert_eq!(
            ctl.render(&QuerySnapshot::default()),
            ProductListView::Empty {
                message: "No products found.".into(),
                create_label: "Create a product".into(),
                create: Route::CreateProduct,
            }
        );
        assert!(ctl.render(&QuerySnapshot::loaded(vec![])).rows().is_empty());
    }

    #[test]
    fn renders_single_shoe_row() {
        let ctl = controller(
            Arc::new(MockMutation::new()),
            Arc::new(NeverConfirm),
            Arc::new(RecordingNotifier::default()),
        );
        let now = DateTime::parse_from_rfc3339("2024-03-13T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let view = ctl.render_at(&QuerySnapshot::loaded(vec![shoe(1)]), &now);
        let rows = view.rows();

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.title, "Shoe");
        assert_eq!(row.price, "$10");
        assert_eq!(row.sale, None);
        assert_eq!(row.updated, None);
        assert_eq!(row.created, "today at 10:00 AM");
        assert_eq!(row.edit.route.path(), "/products/products/1");
        assert_eq!(row.edit.label, "Edit");
        assert_eq!(
            row.delete,
            DeleteRequest {
                id: 1,
                title: "Shoe".into()
            }
        );
    }

    #[test]
    fn rows_keep_arrival_order() {
        let ctl = controller(
            Arc::new(MockMutation::new()),
            Arc::new(NeverConfirm),
            Arc::new(RecordingNotifier::default()),
        );

        let view = ctl.render(&QuerySnapshot::loaded(vec![shoe(3), shoe(1), shoe(2)]));
        let ids: Vec<i32> = view.rows().iter().map(|row| row.id).collect();

        assert_eq!(ids, vec![3, 1, 2]);
    }
}
