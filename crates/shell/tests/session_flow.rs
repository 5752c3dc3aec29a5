//! Black-box walk through the whole client session: sign-in chrome,
//! dashboard, grid filtering, the add-product flow, and the save hand-off.

use stockdeck_catalog::CategoryFilter;
use stockdeck_shell::{SettingsChanged, Shell, Theme, View};
use stockdeck_wizard::{DraftField, DraftProduct, ImageRef, InMemorySink, ProductSink};

use stockdeck_core::{CoreError, CoreResult};

struct OfflineSink;

impl ProductSink for OfflineSink {
    fn accept(&self, _draft: &DraftProduct) -> CoreResult<()> {
        Err(CoreError::sink_unavailable("repository offline"))
    }
}

#[test]
fn add_product_end_to_end() {
    stockdeck_observability::init();

    let sink = InMemorySink::new();
    let mut shell = Shell::with_sample_catalog();

    // Grid → add product.
    shell.navigate(View::Catalog);
    shell.open_wizard();

    {
        let wizard = shell.wizard_mut().expect("wizard mounted");

        // Step 1: general information.
        wizard.set_field(DraftField::ProductName("Test".to_string()));
        wizard.set_field(DraftField::Sku("T-100".to_string()));
        wizard.advance();

        // Step 2: pricing.
        wizard.set_field(DraftField::SellingPrice("49.99".to_string()));
        wizard.set_field(DraftField::PriceIncludesTax(true));
        wizard.advance();

        // Step 3: description & media.
        wizard.set_field(DraftField::Description("End-to-end product".to_string()));
        wizard.add_image(ImageRef::from("img-1"));
        assert!(wizard.add_keyword("hardware"));
        wizard.advance();

        // Step 4: variants; the forward affordance is now "Save".
        assert!(wizard.is_last_step());
        assert!(wizard.select_variant_axis("color"));
        assert!(wizard.set_axis_options("color", vec!["Red".to_string()]));
    }

    shell.save_wizard(&sink).expect("save succeeds");

    // Completion signal: the shell navigated away and unmounted the wizard.
    assert_eq!(shell.current_view(), View::Catalog);
    assert!(shell.wizard().is_none());

    // The sink received one record with all four steps' fields merged.
    let received = sink.received();
    assert_eq!(received.len(), 1);
    let record = &received[0];
    assert_eq!(record.product_name, "Test");
    assert_eq!(record.sku, "T-100");
    assert_eq!(record.selling_price, "49.99");
    assert!(record.price_includes_tax);
    assert_eq!(record.description, "End-to-end product");
    assert_eq!(record.images.len(), 1);
    assert_eq!(record.keywords, vec!["hardware"]);
    assert_eq!(record.variant_axes[0].options, vec!["Red"]);
}

#[test]
fn failed_save_keeps_the_wizard_and_draft() {
    let mut shell = Shell::with_sample_catalog();
    shell.open_wizard();
    shell
        .wizard_mut()
        .expect("wizard mounted")
        .set_field(DraftField::ProductName("Not lost".to_string()));

    let err = shell.save_wizard(&OfflineSink).expect_err("sink is offline");
    assert!(matches!(err, CoreError::SinkUnavailable(_)));

    // Still on the wizard, draft intact: the user can retry.
    assert_eq!(shell.current_view(), View::Wizard);
    let wizard = shell.wizard().expect("wizard still mounted");
    assert_eq!(wizard.draft().product_name, "Not lost");

    // A reachable sink accepts the same draft afterwards.
    let sink = InMemorySink::new();
    shell.save_wizard(&sink).expect("retry succeeds");
    assert_eq!(sink.received()[0].product_name, "Not lost");
}

#[test]
fn save_without_a_mounted_wizard_is_reported() {
    let mut shell = Shell::with_sample_catalog();
    let err = shell.save_wizard(&InMemorySink::new()).expect_err("no wizard");
    assert_eq!(err, CoreError::NotFound);
}

#[test]
fn grid_filtering_against_the_sample_source() {
    let mut shell = Shell::with_sample_catalog();
    shell.navigate(View::Catalog);

    let catalog = shell.catalog_mut();
    assert_eq!(
        catalog.available_categories(),
        vec!["all", "Electronics", "Accessories"]
    );

    catalog.set_query("wh");
    let names: Vec<&str> = catalog.visible_entries().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Wireless Headphones"]);

    catalog.set_query("");
    catalog.set_category_filter(CategoryFilter::Category("Accessories".to_string()));
    assert_eq!(catalog.visible_entries().count(), 2);
}

#[test]
fn header_chrome_observes_session_settings() {
    let shell = Shell::with_sample_catalog();
    let subscription = shell.settings().subscribe();

    shell.settings().set_theme(Theme::Midnight);
    shell.settings().set_notifications(3);

    assert_eq!(
        subscription.try_recv(),
        Ok(SettingsChanged::Theme(Theme::Midnight))
    );
    assert_eq!(
        subscription.try_recv(),
        Ok(SettingsChanged::Notifications(3))
    );
    assert_eq!(shell.settings().theme(), Theme::Midnight);
    assert_eq!(shell.settings().notifications(), 3);
}
