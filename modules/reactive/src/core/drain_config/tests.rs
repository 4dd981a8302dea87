use super::DrainConfig;

#[test]
fn default_pulls_one_item_at_a_time() {
  let config = DrainConfig::default();
  assert_eq!(config.initial_demand(), 1);
  assert!(config.refill());
}

#[test]
fn builders_replace_fields() {
  let config = DrainConfig::default().with_initial_demand(8).with_refill(false);
  assert_eq!(config, DrainConfig::new(8, false));
}
