// Installs the process-wide configuration, so it lives in its own test
// binary and keeps everything in a single test.

use statemap_core::{
    Error,
    block::{AutoscalerModel, OptionalBlock},
    config::{Config, ConfigError},
    init_config,
    log::Level,
    mapper::NodePoolMapper,
    model::NodePoolModel,
    value::Attr,
};

#[test]
fn installed_config_caps_diagnostics() {
    init_config(
        r#"
        [log]
        level = "error"

        [diagnostics]
        max_entries = 1
        "#,
    )
    .expect("first init");

    assert_eq!(Config::get().log.level, Level::Error);
    assert!(matches!(
        init_config(""),
        Err(Error::Config(ConfigError::AlreadyInitialized))
    ));

    let model = NodePoolModel {
        node_count: Attr::Known(5_000_000_000),
        autoscaler: OptionalBlock::Present(AutoscalerModel::new(10, 3)),
        ..NodePoolModel::default()
    };
    let mapped = NodePoolMapper::model_to_create_options(&model);

    assert!(mapped.has_error());
    assert_eq!(mapped.diagnostics().len(), 1);
    assert_eq!(mapped.diagnostics().dropped(), 1);
}
