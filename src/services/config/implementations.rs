// ベンチマーク設定の具象実装

use crate::core::{DispatchError, DispatchResult};
use crate::fixture::FixtureConfig;
use crate::strategy::Strategy;
use crate::unswitch::{LengthPolicy, PassOrder, Unswitcher, BLOCK_WIDTH};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// ベンチマーク全体の設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub fixture: FixtureConfig,
    /// 戦略ごとの計測ラウンド数
    pub iterations: u64,
    pub policy: LengthPolicy,
    pub order: PassOrder,
    /// 空なら全戦略
    pub strategies: Vec<Strategy>,
}

impl BenchConfig {
    pub const DEFAULT_ITERATIONS: u64 = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fixture(mut self, fixture: FixtureConfig) -> Self {
        self.fixture = fixture;
        self
    }

    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_policy(mut self, policy: LengthPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_order(mut self, order: PassOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    /// 実行対象の戦略（重複は除いて指定順を維持）
    pub fn selected_strategies(&self) -> Vec<Strategy> {
        if self.strategies.is_empty() {
            return Strategy::ALL.to_vec();
        }
        let mut selected = Vec::with_capacity(self.strategies.len());
        for strategy in &self.strategies {
            if !selected.contains(strategy) {
                selected.push(*strategy);
            }
        }
        selected
    }

    pub fn unswitcher(&self) -> Unswitcher {
        Unswitcher::new()
            .with_policy(self.policy)
            .with_order(self.order)
    }

    /// 設定の妥当性をチェック
    pub fn validate(&self) -> DispatchResult<()> {
        self.fixture.validate()?;

        if self.iterations == 0 {
            return Err(DispatchError::configuration(
                "iterations",
                "ラウンド数は1以上である必要があります",
            ));
        }

        let runs_unswitched = self.selected_strategies().contains(&Strategy::Unswitched);
        if runs_unswitched
            && self.policy == LengthPolicy::Strict
            && self.fixture.len % BLOCK_WIDTH != 0
        {
            return Err(DispatchError::configuration(
                "len",
                format!(
                    "strict ポリシーでは要素数 {} は {BLOCK_WIDTH} の倍数である必要があります",
                    self.fixture.len
                ),
            ));
        }

        Ok(())
    }

    pub fn to_json(&self) -> DispatchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> DispatchResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DispatchError::configuration("config", format!("JSON解析エラー: {e}")))
    }

    /// JSONファイルから読み込み
    pub fn load(path: &Path) -> DispatchResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            fixture: FixtureConfig::default(),
            iterations: Self::DEFAULT_ITERATIONS,
            policy: LengthPolicy::default(),
            order: PassOrder::default(),
            strategies: Vec::new(),
        }
    }
}
