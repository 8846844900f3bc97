use anyhow::Result;
use unveil_config::UnveilConfig;
use unveil_page::Page;

mod scenarios;
use scenarios::Scenario;

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let config = UnveilConfig::load();

    // Scenario selection: --scenario=<name> beats the config file
    // (which UNVEIL_SCENARIO already overrides).
    let from_args = std::env::args().find_map(|a| a.strip_prefix("--scenario=").map(str::to_owned));
    let name = from_args
        .or_else(|| config.demo.scenario.clone())
        .unwrap_or_else(|| "walkthrough".to_owned());

    let mut scenario: Box<dyn Scenario> = scenarios::by_name(&name)
        .ok_or_else(|| anyhow::anyhow!("unknown scenario `{name}`"))?;

    log::info!(
        "scenario={} viewport_height={} speed={} reduced_motion={}",
        scenario.name(),
        config.viewport.height,
        config.motion.speed,
        config.motion.reduced_motion
    );

    let mut page = Page::new(config);
    scenario.run(&mut page)?;

    log::info!("scenario {} finished", scenario.name());
    Ok(())
}
