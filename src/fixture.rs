//! 計測用フィクスチャ
//!
//! 種別列を乱数で一度だけ決め、同じ並びを各表現（動的・タグ付き・静的）に展開する

use crate::core::{DispatchError, DispatchResult};
use crate::objects::{Counter, Kind, Object, UpCounter};
use rand::distributions::{Bernoulli, Distribution};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// フィクスチャ生成の設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// 要素数
    pub len: usize,
    /// 各スロットが種別 Up になる確率
    pub up_probability: f64,
    /// 乱数シード
    pub seed: u64,
}

impl FixtureConfig {
    pub const DEFAULT_LEN: usize = 4096;
    pub const DEFAULT_UP_PROBABILITY: f64 = 0.5;
    /// mt19937 の既定シード値を借りているだけで、生成される種別列は `StdRng` のもの
    pub const DEFAULT_SEED: u64 = 5489;

    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    pub fn with_up_probability(mut self, up_probability: f64) -> Self {
        self.up_probability = up_probability;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> DispatchResult<()> {
        if self.len == 0 {
            return Err(DispatchError::configuration(
                "len",
                "要素数は1以上である必要があります",
            ));
        }
        if !(0.0..=1.0).contains(&self.up_probability) {
            return Err(DispatchError::configuration(
                "up_probability",
                format!("0.0以上1.0以下である必要があります: {}", self.up_probability),
            ));
        }
        Ok(())
    }

    /// シードから決定的に種別列を生成
    pub fn generate_kinds(&self) -> DispatchResult<Vec<Kind>> {
        self.validate()?;
        let is_up = Bernoulli::new(self.up_probability)
            .map_err(|e| DispatchError::configuration("up_probability", e.to_string()))?;
        let mut rng = StdRng::seed_from_u64(self.seed);

        Ok((0..self.len)
            .map(|_| if is_up.sample(&mut rng) { Kind::Up } else { Kind::Down })
            .collect())
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            len: Self::DEFAULT_LEN,
            up_probability: Self::DEFAULT_UP_PROBABILITY,
            seed: Self::DEFAULT_SEED,
        }
    }
}

/// 各ディスパッチ戦略が操作するコレクション一式
pub struct Fixture {
    config: FixtureConfig,
    kinds: Vec<Kind>,
    virtual_objects: Vec<Box<dyn Counter>>,
    tagged_objects: Vec<Object>,
    boxed_up: Vec<Box<UpCounter>>,
    inline_up: Vec<UpCounter>,
}

impl Fixture {
    pub fn build(config: &FixtureConfig) -> DispatchResult<Self> {
        let kinds = config.generate_kinds()?;
        Ok(Self::from_kinds(config.clone(), kinds))
    }

    /// 種別列を直接指定して構築
    pub fn from_kinds(config: FixtureConfig, kinds: Vec<Kind>) -> Self {
        let tagged_objects: Vec<Object> = kinds.iter().map(|kind| Object::new(*kind)).collect();
        let virtual_objects = tagged_objects.iter().map(Object::to_virtual).collect();
        let boxed_up = (0..kinds.len()).map(|_| Box::new(UpCounter::new())).collect();
        let inline_up = vec![UpCounter::new(); kinds.len()];

        Self {
            config: FixtureConfig {
                len: kinds.len(),
                ..config
            },
            kinds,
            virtual_objects,
            tagged_objects,
            boxed_up,
            inline_up,
        }
    }

    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn kinds(&self) -> &[Kind] {
        &self.kinds
    }

    pub fn count_of(&self, kind: Kind) -> usize {
        self.kinds.iter().filter(|k| **k == kind).count()
    }

    pub fn virtual_objects(&self) -> &[Box<dyn Counter>] {
        &self.virtual_objects
    }

    pub fn virtual_objects_mut(&mut self) -> &mut [Box<dyn Counter>] {
        &mut self.virtual_objects
    }

    pub fn tagged_objects(&self) -> &[Object] {
        &self.tagged_objects
    }

    pub fn tagged_objects_mut(&mut self) -> &mut [Object] {
        &mut self.tagged_objects
    }

    pub fn boxed_up(&self) -> &[Box<UpCounter>] {
        &self.boxed_up
    }

    pub fn boxed_up_mut(&mut self) -> &mut [Box<UpCounter>] {
        &mut self.boxed_up
    }

    pub fn inline_up(&self) -> &[UpCounter] {
        &self.inline_up
    }

    pub fn inline_up_mut(&mut self) -> &mut [UpCounter] {
        &mut self.inline_up
    }
}
