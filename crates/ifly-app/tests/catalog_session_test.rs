use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use ifly_app::{CatalogApp, CatalogAppBuilder};
use ifly_core::ports::{FetchError, ListingsSourcePort, LoadDiagnosticsPort};
use ifly_core::{CatalogStatus, CategoryId, DisplayValue, Listing, ListingId};

// ---------------------------------------------------------------------------
// Mock: ListingsSourcePort (gated, counting, configurable failure)
// ---------------------------------------------------------------------------

struct GatedSource {
    listings: Vec<Listing>,
    should_fail: bool,
    gate: Option<Arc<Notify>>,
    calls: Arc<AtomicUsize>,
    completed: Arc<AtomicBool>,
}

#[async_trait]
impl ListingsSourcePort for GatedSource {
    async fn fetch_listings(&self) -> Result<Vec<Listing>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.completed.store(true, Ordering::SeqCst);
        if self.should_fail {
            return Err(FetchError::Transport("connection refused".to_string()));
        }
        Ok(self.listings.clone())
    }
}

// ---------------------------------------------------------------------------
// Mock: LoadDiagnosticsPort
// ---------------------------------------------------------------------------

struct CountingDiagnostics {
    failures: Arc<AtomicUsize>,
}

impl LoadDiagnosticsPort for CountingDiagnostics {
    fn load_failed(&self, _error: &FetchError) {
        self.failures.fetch_add(1, Ordering::SeqCst);
    }
}

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

struct Harness {
    app: CatalogApp,
    gate: Arc<Notify>,
    calls: Arc<AtomicUsize>,
    completed: Arc<AtomicBool>,
    failures: Arc<AtomicUsize>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

fn listing(id: u64, title: &str, description: &str, category: &str) -> Listing {
    Listing {
        id: ListingId::from(id),
        title: title.to_string(),
        description: description.to_string(),
        seller: "seller".to_string(),
        category: category.to_string(),
        technologies: vec!["React".to_string()],
        completion_status: DisplayValue::from("done"),
        views: DisplayValue::from(10u64),
        price: DisplayValue::default(),
    }
}

fn sample_dataset() -> Vec<Listing> {
    vec![
        listing(1, "React Shop", "e-commerce", "web"),
        listing(2, "Inventory App", "mobile inventory tool", "mobile"),
    ]
}

fn harness(listings: Vec<Listing>, should_fail: bool, gated: bool) -> Harness {
    init_tracing();
    let gate = Arc::new(Notify::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let completed = Arc::new(AtomicBool::new(false));
    let failures = Arc::new(AtomicUsize::new(0));

    let source = GatedSource {
        listings,
        should_fail,
        gate: gated.then(|| gate.clone()),
        calls: calls.clone(),
        completed: completed.clone(),
    };
    let diagnostics = CountingDiagnostics {
        failures: failures.clone(),
    };

    let app = CatalogAppBuilder::new()
        .with_listings_source(Arc::new(source))
        .with_diagnostics(Arc::new(diagnostics))
        .build()
        .expect("catalog app should build");

    Harness {
        app,
        gate,
        calls,
        completed,
        failures,
    }
}

fn ids(view: &[Listing]) -> Vec<&str> {
    view.iter().map(|l| l.id.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn filter_inputs_survive_the_load() {
    let h = harness(sample_dataset(), false, true);
    let mut session = h.app.mount();

    // Edits are accepted while the load is outstanding
    session.set_search_term("shop");
    assert_eq!(session.status(), CatalogStatus::Loading);
    assert!(session.filtered_view().is_empty());

    h.gate.notify_one();
    let status = session.wait_until_settled().await;

    assert_eq!(status, CatalogStatus::Ready { total: 2 });
    assert_eq!(ids(&session.filtered_view()), vec!["1"]);
    assert_eq!(session.search_term(), "shop");
}

#[tokio::test]
async fn category_selected_before_load_is_reapplied() {
    let h = harness(sample_dataset(), false, true);
    let mut session = h.app.mount();

    session.select_category(CategoryId::from("mobile")).unwrap();
    h.gate.notify_one();
    assert!(session.dataset_changed().await);

    assert_eq!(ids(&session.filtered_view()), vec!["2"]);
}

#[tokio::test]
async fn failed_load_leaves_empty_dataset_and_reports_once() {
    let h = harness(sample_dataset(), true, false);
    let mut session = h.app.mount();

    let status = session.wait_until_settled().await;

    assert!(matches!(status, CatalogStatus::Failed { .. }));
    assert_eq!(session.total_listings(), 0);
    for term in ["", "shop", "xyz"] {
        for category in ["all", "web", "mobile"] {
            session.set_search_term(term);
            session.select_category(CategoryId::from(category)).unwrap();
            assert!(session.filtered_view().is_empty());
        }
    }
    assert_eq!(h.failures.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn edits_never_trigger_another_fetch() {
    let h = harness(sample_dataset(), false, false);
    let mut session = h.app.mount();
    session.wait_until_settled().await;

    for term in ["r", "re", "rea", ""] {
        session.set_search_term(term);
        let _ = session.filtered_view();
    }
    session.select_category(CategoryId::from("web")).unwrap();
    let _ = session.filtered_view();
    // A second wait must not start anything either
    session.wait_until_settled().await;

    assert_eq!(h.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn recomputing_is_idempotent() {
    let h = harness(sample_dataset(), false, false);
    let mut session = h.app.mount();
    session.wait_until_settled().await;
    session.set_search_term("a");

    assert_eq!(session.filtered_view(), session.filtered_view());
}

#[tokio::test]
async fn teardown_discards_outstanding_response() {
    let h = harness(sample_dataset(), true, true);
    let session = h.app.mount();

    // Let the load task reach the gate
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(h.calls.load(Ordering::SeqCst), 1);

    session.teardown();
    h.gate.notify_one();
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert!(!h.completed.load(Ordering::SeqCst));
    assert_eq!(h.failures.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn sessions_do_not_share_filter_inputs() {
    let h = harness(sample_dataset(), false, false);
    let mut first = h.app.mount();
    let mut second = h.app.mount();
    first.wait_until_settled().await;
    second.wait_until_settled().await;

    first.set_search_term("shop");

    assert_eq!(second.search_term(), "");
    assert_eq!(second.filtered_view().len(), 2);
    assert_eq!(h.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn view_details_records_choice() {
    let h = harness(sample_dataset(), false, false);
    let mut session = h.app.mount();
    session.wait_until_settled().await;

    let target = session.view_details(ListingId::new("2"));

    assert_eq!(target.route(), "/projects/2");
    assert_eq!(session.chosen_listing(), Some(&ListingId::new("2")));
    assert_eq!(
        session.listing(&ListingId::new("2")).map(|l| l.title),
        Some("Inventory App".to_string())
    );
}

#[tokio::test]
async fn category_options_follow_selection() {
    let h = harness(Vec::new(), false, false);
    let mut session = h.app.mount();

    session.select_category(CategoryId::from("backend")).unwrap();
    let selected: Vec<String> = session
        .category_options()
        .into_iter()
        .filter(|option| option.selected)
        .map(|option| option.id)
        .collect();

    assert_eq!(selected, vec!["backend".to_string()]);
    assert_eq!(session.category_options().len(), 5);
}
