use crate::fixture::Fixture;
use crate::objects::Kind;
use crate::services::BenchConfig;
use crate::strategy::Strategy;
use anyhow::{Context, Result};

/// 1戦略の検証結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub strategy: Strategy,
    pub checked: usize,
    pub mismatches: usize,
    pub error: Option<String>,
}

impl VerificationOutcome {
    pub fn passed(&self) -> bool {
        self.error.is_none() && self.mismatches == 0
    }
}

/// 1ラウンド後に各要素が持つべき値
fn expected_count(strategy: Strategy, kind: Kind) -> i32 {
    match (strategy.is_kind_correct(), kind) {
        (true, Kind::Down) => -1,
        _ => 1,
    }
}

/// 新しいフィクスチャで戦略を1ラウンド実行し、全要素がちょうど一度、正しい操作で更新されたか確認
pub fn verify_strategy(strategy: Strategy, config: &BenchConfig) -> Result<VerificationOutcome> {
    let mut fixture = Fixture::build(&config.fixture).context("Failed to build fixture")?;

    if let Err(error) = strategy.run_once(&mut fixture, &config.unswitcher()) {
        return Ok(VerificationOutcome {
            strategy,
            checked: 0,
            mismatches: 0,
            error: Some(error.to_string()),
        });
    }

    let observed: Vec<(Kind, i32)> = match strategy {
        Strategy::VirtualDispatch => fixture
            .virtual_objects()
            .iter()
            .map(|object| (object.kind(), object.count()))
            .collect(),
        Strategy::MistypedStatic | Strategy::Unswitched | Strategy::TaggedMatch => fixture
            .tagged_objects()
            .iter()
            .map(|object| (object.kind(), object.count()))
            .collect(),
        Strategy::StaticBoxed => fixture
            .boxed_up()
            .iter()
            .map(|counter| (Kind::Up, counter.count()))
            .collect(),
        Strategy::StaticInline => fixture
            .inline_up()
            .iter()
            .map(|counter| (Kind::Up, counter.count()))
            .collect(),
    };

    let mismatches = observed
        .iter()
        .filter(|(kind, count)| *count != expected_count(strategy, *kind))
        .count();

    Ok(VerificationOutcome {
        strategy,
        checked: observed.len(),
        mismatches,
        error: None,
    })
}

/// Execute verify command
pub fn execute_verify(config: &BenchConfig) -> Result<Vec<VerificationOutcome>> {
    config.fixture.validate().context("Invalid fixture configuration")?;

    println!("🔍 Verifying {} objects", config.fixture.len);
    let mut outcomes = Vec::new();
    for strategy in config.selected_strategies() {
        let outcome = verify_strategy(strategy, config)?;
        match (&outcome.error, outcome.passed()) {
            (Some(error), _) => println!("  ❌ {strategy}: {error}"),
            (None, true) => println!("  ✅ {strategy}: {} objects", outcome.checked),
            (None, false) => println!(
                "  ❌ {strategy}: {} of {} objects have unexpected state",
                outcome.mismatches, outcome.checked
            ),
        }
        outcomes.push(outcome);
    }

    let failed = outcomes.iter().filter(|outcome| !outcome.passed()).count();
    if failed > 0 {
        anyhow::bail!("{failed} strategies failed verification");
    }
    Ok(outcomes)
}
