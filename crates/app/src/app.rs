//! Application state: current screen, draft, listings, notices.

use invoicehub_client::{CatalogItem, ClientRecord, DashboardStats, Invoice, InvoiceApi};
use invoicehub_core::money;
use invoicehub_export::ExportError;
use invoicehub_invoicing::{DraftCommand, InvoiceDraft};

/// Which screen is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Create,
    Clients,
    Items,
}

/// The latest user-visible message. One at a time, newest wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// Dashboard data, applied all-or-nothing: both fetches must succeed
/// before either is visible, so the dashboard never paints half-updated.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub recent_invoices: Vec<Invoice>,
}

/// The whole client application state, owned by the embedding event loop.
///
/// All operations take `&mut self`, so the draft is never touched from two
/// logical flows at once. The one cross-await hazard, a second save while
/// one is pending, is blocked by the in-flight flag.
pub struct App<A: InvoiceApi> {
    api: A,
    pub draft: InvoiceDraft,
    screen: Screen,
    dashboard: Option<DashboardData>,
    clients: Vec<ClientRecord>,
    items: Vec<CatalogItem>,
    invoice_detail: Option<Invoice>,
    notice: Option<Notice>,
    saving: bool,
}

impl<A: InvoiceApi> App<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            draft: InvoiceDraft::new(),
            screen: Screen::Dashboard,
            dashboard: None,
            clients: Vec::new(),
            items: Vec::new(),
            invoice_detail: None,
            notice: None,
            saving: false,
        }
    }

    /// The gateway this app talks through. Exposed so embeddings (and
    /// tests) can reach adapter-level state.
    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn dashboard(&self) -> Option<&DashboardData> {
        self.dashboard.as_ref()
    }

    pub fn clients(&self) -> &[ClientRecord] {
        &self.clients
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn invoice_detail(&self) -> Option<&Invoice> {
        self.invoice_detail.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Whether a save is currently in flight (submit affordance disabled).
    pub fn save_in_flight(&self) -> bool {
        self.saving
    }

    /// Forward a form edit to the draft.
    pub fn dispatch(&mut self, command: DraftCommand) {
        self.draft.apply(command);
    }

    /// Switch screens. Entering Create blanks the form; entering Clients
    /// or Items refreshes that listing.
    pub async fn show_view(&mut self, screen: Screen) {
        self.screen = screen;
        match screen {
            Screen::Create => self.draft = InvoiceDraft::new(),
            Screen::Clients => self.load_clients().await,
            Screen::Items => self.load_items().await,
            Screen::Dashboard => {}
        }
    }

    /// Fetch stats and the recent-invoice list concurrently; apply both or
    /// neither.
    pub async fn load_dashboard(&mut self) {
        self.notice = None;
        let api = &self.api;
        let (stats, invoices) = tokio::join!(api.dashboard_stats(), api.list_invoices());
        match (stats, invoices) {
            (Ok(stats), Ok(recent_invoices)) => {
                self.dashboard = Some(DashboardData {
                    stats,
                    recent_invoices,
                });
            }
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(error = %e, "dashboard load failed");
                self.notice = Some(Notice::Error(format!("Failed to load dashboard: {e}")));
            }
        }
    }

    /// Validate and save the draft. On success the form resets and the
    /// dashboard refreshes; on any failure the draft is left untouched so
    /// the user can retry.
    pub async fn save_invoice(&mut self) {
        if self.saving {
            tracing::warn!("save ignored, one already in flight");
            return;
        }

        let payload = match self.draft.prepare_submission() {
            Ok(payload) => payload,
            Err(e) => {
                self.notice = Some(Notice::Error(e.to_string()));
                return;
            }
        };

        self.saving = true;
        let result = self.api.create_invoice(&payload).await;
        self.saving = false;

        match result {
            Ok(invoice) => {
                tracing::debug!(number = %invoice.invoice_number, "invoice saved");
                self.draft = InvoiceDraft::new();
                self.screen = Screen::Dashboard;
                self.load_dashboard().await;
                // The save did succeed, but a reload failure is newer news
                // and must stay visible.
                if !matches!(self.notice, Some(Notice::Error(_))) {
                    self.notice = Some(Notice::Info(format!(
                        "Invoice {} saved",
                        invoice.invoice_number
                    )));
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                self.notice = Some(Notice::Error(format!("Save failed: {e}")));
            }
        }
    }

    /// Fetch one invoice and surface its summary.
    pub async fn view_invoice(&mut self, id: i64) {
        self.notice = None;
        match self.api.get_invoice(id).await {
            Ok(invoice) => {
                self.notice = Some(Notice::Info(format!(
                    "Invoice #{} | Client: {} | Status: {} | Total: {}",
                    invoice.invoice_number,
                    invoice.client_name,
                    invoice.status.as_str(),
                    money::format_inr(invoice.grand_total)
                )));
                self.invoice_detail = Some(invoice);
            }
            Err(e) => {
                tracing::warn!(error = %e, id, "invoice detail load failed");
                self.notice = Some(Notice::Error("Error loading invoice details".to_string()));
            }
        }
    }

    async fn load_clients(&mut self) {
        self.notice = None;
        match self.api.list_clients().await {
            Ok(clients) => self.clients = clients,
            Err(e) => {
                tracing::warn!(error = %e, "clients load failed");
                self.notice = Some(Notice::Error(format!("Failed to load clients: {e}")));
            }
        }
    }

    async fn load_items(&mut self) {
        self.notice = None;
        match self.api.list_items().await {
            Ok(items) => self.items = items,
            Err(e) => {
                tracing::warn!(error = %e, "items load failed");
                self.notice = Some(Notice::Error(format!("Failed to load items: {e}")));
            }
        }
    }

    /// Render the current draft as a downloadable PDF, dated today.
    pub fn export_pdf(&self) -> Result<Vec<u8>, ExportError> {
        invoicehub_export::render_invoice_pdf(
            &self.draft.client_name,
            &self.draft.items,
            chrono::Local::now().date_naive(),
        )
    }
}
