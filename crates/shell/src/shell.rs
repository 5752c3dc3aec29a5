use serde::{Deserialize, Serialize};

use stockdeck_catalog::{sample_entries, CatalogEntry, CatalogView, StockStatus};
use stockdeck_core::{CoreError, CoreResult};
use stockdeck_wizard::{ProductSink, WizardController};

use crate::session::SessionSettings;
use crate::view::View;

/// Stat-card figures for the dashboard summary panel, derived from the
/// catalog source. Sales/order figures come from collaborators that do not
/// exist in this scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_products: usize,
    pub low_stock: usize,
}

impl DashboardSummary {
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        let low_stock = entries
            .iter()
            .filter(|e| {
                matches!(
                    e.stock_status(),
                    StockStatus::LowStock | StockStatus::OutOfStock
                )
            })
            .count();
        Self {
            total_products: entries.len(),
            low_stock,
        }
    }
}

/// Application root: mounts one view at a time and owns each screen's state
/// for exactly the lifetime of that screen.
///
/// The catalog view is long-lived (the grid keeps its filter while other
/// panels are shown); the wizard is created on entry and discarded on exit,
/// taking its draft with it. No state is shared across screens.
#[derive(Debug)]
pub struct Shell {
    current_view: View,
    catalog: CatalogView,
    wizard: Option<WizardController>,
    settings: SessionSettings,
    sidebar_collapsed: bool,
    signed_in: bool,
}

impl Shell {
    pub fn new(source: Vec<CatalogEntry>) -> Self {
        Self {
            current_view: View::Dashboard,
            catalog: CatalogView::new(source),
            wizard: None,
            settings: SessionSettings::new(),
            sidebar_collapsed: false,
            signed_in: true,
        }
    }

    /// Shell backed by the built-in sample source.
    pub fn with_sample_catalog() -> Self {
        Self::new(sample_entries())
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn catalog(&self) -> &CatalogView {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogView {
        &mut self.catalog
    }

    /// The mounted wizard, if the wizard view is current.
    pub fn wizard(&self) -> Option<&WizardController> {
        self.wizard.as_ref()
    }

    pub fn wizard_mut(&mut self) -> Option<&mut WizardController> {
        self.wizard.as_mut()
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn signed_in(&self) -> bool {
        self.signed_in
    }

    pub fn sign_in(&mut self) {
        self.signed_in = true;
    }

    pub fn sign_out(&mut self) {
        self.signed_in = false;
    }

    /// Switch the mounted view. Entering the wizard creates a fresh
    /// controller; leaving it discards the controller and its draft.
    pub fn navigate(&mut self, view: View) {
        if view == self.current_view {
            return;
        }
        tracing::debug!(from = self.current_view.as_str(), to = view.as_str(), "view switch");
        if view == View::Wizard {
            self.wizard = Some(WizardController::new());
        } else if self.current_view == View::Wizard {
            self.wizard = None;
        }
        self.current_view = view;
    }

    /// Switch views from a raw selector identifier; unrecognized values
    /// land on the dashboard.
    pub fn navigate_raw(&mut self, selector: &str) {
        self.navigate(View::parse(selector));
    }

    /// The "add product" request from the grid or header.
    pub fn open_wizard(&mut self) {
        self.navigate(View::Wizard);
    }

    /// The wizard's back action: discard the draft, return to the grid.
    pub fn close_wizard(&mut self) {
        self.navigate(View::Catalog);
    }

    /// Save the mounted wizard's draft through the sink, then leave the
    /// wizard. On sink failure the wizard stays mounted with its draft so
    /// nothing is lost.
    pub fn save_wizard<S: ProductSink>(&mut self, sink: &S) -> CoreResult<()> {
        let wizard = self.wizard.as_ref().ok_or(CoreError::NotFound)?;
        wizard.save(sink)?;
        self.navigate(View::Catalog);
        Ok(())
    }

    pub fn dashboard_summary(&self) -> DashboardSummary {
        DashboardSummary::from_entries(self.catalog.source())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::with_sample_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdeck_catalog::EntryStatus;
    use stockdeck_core::EntryId;

    fn entry(name: &str, stock: u32) -> CatalogEntry {
        CatalogEntry {
            id: EntryId::new(),
            name: name.to_string(),
            sku: format!("{name}-sku"),
            price: 100,
            stock,
            category: "Misc".to_string(),
            status: EntryStatus::Active,
            variant_labels: Vec::new(),
            expiry: None,
        }
    }

    #[test]
    fn starts_on_the_dashboard_with_no_wizard() {
        let shell = Shell::with_sample_catalog();
        assert_eq!(shell.current_view(), View::Dashboard);
        assert!(shell.wizard().is_none());
        assert!(shell.signed_in());
    }

    #[test]
    fn entering_the_wizard_mounts_a_fresh_controller() {
        let mut shell = Shell::with_sample_catalog();
        shell.open_wizard();
        assert_eq!(shell.current_view(), View::Wizard);
        let wizard = shell.wizard().expect("wizard mounted");
        assert!(wizard.step().is_first());
    }

    #[test]
    fn leaving_the_wizard_discards_the_draft() {
        let mut shell = Shell::with_sample_catalog();
        shell.open_wizard();
        shell
            .wizard_mut()
            .expect("wizard mounted")
            .set_field(stockdeck_wizard::DraftField::ProductName("Lost".to_string()));

        shell.close_wizard();
        assert_eq!(shell.current_view(), View::Catalog);
        assert!(shell.wizard().is_none());

        // Re-entering starts over.
        shell.open_wizard();
        assert_eq!(shell.wizard().expect("wizard mounted").draft().product_name, "");
    }

    #[test]
    fn catalog_filter_survives_view_switches() {
        let mut shell = Shell::with_sample_catalog();
        shell.navigate(View::Catalog);
        shell.catalog_mut().set_query("wh");
        shell.navigate(View::Reports);
        shell.navigate(View::Catalog);
        assert_eq!(shell.catalog().filter().query, "wh");
    }

    #[test]
    fn unrecognized_selector_lands_on_the_dashboard() {
        let mut shell = Shell::with_sample_catalog();
        shell.navigate(View::Catalog);
        shell.navigate_raw("no-such-view");
        assert_eq!(shell.current_view(), View::Dashboard);
    }

    #[test]
    fn dashboard_summary_counts_low_stock() {
        let shell = Shell::new(vec![
            entry("plenty", 50),
            entry("low", 4),
            entry("gone", 0),
        ]);
        let summary = shell.dashboard_summary();
        assert_eq!(summary.total_products, 3);
        assert_eq!(summary.low_stock, 2);
    }

    #[test]
    fn sign_out_and_back_in() {
        let mut shell = Shell::with_sample_catalog();
        shell.sign_out();
        assert!(!shell.signed_in());
        shell.sign_in();
        assert!(shell.signed_in());
    }
}
