//! A registry shared between producers and consumers through an `Arc`.

use dashstate::controls::{builtin_control_panels, ControlPanel};
use dashstate::registry::{Registry, RegistryError};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn consumers_share_one_memoized_future() {
    let registry = Arc::new(Registry::new("plugins"));
    registry.register("line", Arc::new("LineChart".to_string()));

    let a = registry.get_as_promise("line");
    let b = {
        let registry = Arc::clone(&registry);
        tokio::spawn(async move { registry.get_as_promise("line").await })
            .await
            .unwrap()
    };

    assert_eq!(a.await.unwrap().as_str(), "LineChart");
    assert_eq!(b.unwrap().as_str(), "LineChart");
}

#[tokio::test]
async fn rejected_future_carries_key() {
    let registry: Registry<u8> = Registry::new("plugins");
    match registry.get_as_promise("heatmap").await {
        Err(RegistryError::NotRegistered { registry, key }) => {
            assert_eq!(registry, "plugins");
            assert_eq!(key, "heatmap");
        }
        other => panic!("expected NotRegistered, got {other:?}"),
    }
}

#[tokio::test]
async fn late_control_panel_registration_is_observed() {
    let panels = Arc::new(builtin_control_panels());
    assert!(!panels.has("sankey"));

    let waiter = {
        let panels = Arc::clone(&panels);
        tokio::spawn(async move { panels.wait_for("sankey").await })
    };

    tokio::time::sleep(Duration::from_millis(5)).await;
    panels.register(
        "sankey",
        Arc::new(ControlPanel::new("sankey", &["viz_type", "groupby", "metric"])),
    );

    let panel = tokio::time::timeout(Duration::from_secs(1), waiter)
        .await
        .expect("registration should wake the waiter")
        .unwrap();
    assert_eq!(panel.viz_type, "sankey");
    assert_eq!(
        panels.get_as_promise("sankey").await.unwrap().controls.len(),
        3
    );
}
